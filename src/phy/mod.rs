//! USB PHY Drivers
//!
//! This module provides the generic PHY operation table and the R-Car Gen3
//! USB2.0 PHY implementation.
//!
//! # Architecture
//!
//! PHY drivers only talk to hardware through a
//! [`RegisterBus`](crate::unsafe_registers::RegisterBus) and to their
//! collaborators through the [`hal`](crate::hal) traits. This allows:
//!
//! - Binding through any device framework that can provide a [`DeviceNode`](crate::driver::DeviceNode)
//! - Testing with mock register windows
//!
//! # Supported PHYs
//!
//! - [`RcarGen3Phy`]: Renesas R-Car Gen3 USB2.0 PHY
//!
//! # Example
//!
//! ```ignore
//! use rcar_usb2_phy::phy::{GenericPhy, PhyMode, RcarGen3Phy};
//!
//! let mut phy = RcarGen3Phy::probe(&mut node)?;
//! phy.init()?;
//! phy.power_on()?;
//! phy.set_mode(PhyMode::UsbHost, 0)?;
//! ```

pub mod generic;
pub mod rcar_gen3;

pub use generic::{GenericPhy, PhyMode};
pub use rcar_gen3::RcarGen3Phy;
