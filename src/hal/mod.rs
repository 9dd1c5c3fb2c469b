//! Hardware Abstraction Layer
//!
//! Interfaces to the collaborators the PHY depends on but does not own.
//!
//! # Modules
//!
//! - [`clock`]: Clock enable/disable and state tracking
//! - [`regulator`]: VBUS regulator control, including a GPIO-switched fixed regulator
//!
//! Platform crates implement [`Clock`] and [`Regulator`] for their own clock
//! and power subsystems and hand the handles out through
//! [`DeviceNode`](crate::driver::device::DeviceNode).

pub mod clock;
pub mod regulator;

// Re-export commonly used types
pub use clock::{Clock, ClockGate, ClockState};
pub use regulator::{GpioRegulator, Polarity, Regulator};
