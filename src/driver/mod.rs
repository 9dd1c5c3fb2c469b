//! Device framework glue.
//!
//! - [`device`] - Hardware description lookup ([`DeviceNode`])
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Explicit driver registration and binding
//!
//! # Example
//!
//! ```ignore
//! use rcar_usb2_phy::driver::DriverRegistry;
//! use rcar_usb2_phy::RcarGen3Phy;
//!
//! let mut registry: DriverRegistry<BoardNode, BoardPhy, 4> = DriverRegistry::new();
//! registry.register(RcarGen3Phy::driver_entry())?;
//! ```

// Submodules
pub mod device;
pub mod error;
pub mod registry;

// Re-exports for convenience
pub use device::DeviceNode;
pub use error::{
    ConfigError, ConfigResult, Error, ResourceError, ResourceResult, Result,
};
pub use registry::{DriverEntry, DriverRegistry};
