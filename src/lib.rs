//! R-Car Gen3 USB2.0 PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the USB2.0 PHY of Renesas R-Car
//! Gen3 SoCs.
//!
//! The PHY routes a USB2.0 channel to host or peripheral operation. This
//! crate programs its control registers for a bootloader-style device
//! framework: probe, init, power on, select a mode, power off, exit, remove.
//! It does not enumerate devices or move data; the host and peripheral
//! controllers behind the PHY are driven elsewhere.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): The [`GenericPhy`] operation table and [`RcarGen3Phy`]
//! 2. **Framework Layer** ([`driver`]): Hardware description lookup, driver registry, errors
//! 3. **HAL Layer** ([`hal`]): Clock and regulator interfaces
//!
//! Register access goes through [`unsafe_registers::RegisterBus`], so the
//! whole driver runs on the host against a mock register window.
//!
//! # Modes
//!
//! | Mode | COMMCTRL.OTG_PERI | D+ / D- pull-downs | ADPCTRL.DRVVBUS |
//! |------|-------------------|--------------------|-----------------|
//! | [`PhyMode::UsbHost`]   | 0 | both on  | 1 |
//! | [`PhyMode::UsbDevice`] | 1 | D- only  | 0 |
//! | [`PhyMode::UsbOtg`]    | resolved to host or device from ID pin and VBUS session | | |
//!
//! # Features
//!
//! - `r8a7795` (default): R-Car H3 channel addresses in [`boards`]
//! - `defmt`: Enable defmt logging and formatting for public types
//! - `critical-section`: Enable the ISR-safe [`SharedPhy`] wrapper
//!
//! # Example
//!
//! ```ignore
//! use rcar_usb2_phy::{DriverRegistry, GenericPhy, PhyMode, RcarGen3Phy};
//!
//! let mut registry: DriverRegistry<BoardNode, BoardPhy, 4> = DriverRegistry::new();
//! registry.register(RcarGen3Phy::driver_entry())?;
//!
//! // Probe from the hardware description
//! let (_, mut phy) = registry.bind(&mut usb2_phy0_node)?;
//!
//! phy.init()?;
//! phy.power_on()?;
//!
//! // Wire up OTG detection and pick the role from the cable
//! phy.set_mode(PhyMode::UsbOtg, 1)?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod driver;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::device::DeviceNode;
pub use driver::error::{
    ConfigError, ConfigResult, Error, ResourceError, ResourceResult, Result,
};
pub use driver::registry::{DriverEntry, DriverRegistry};
pub use hal::{Clock, ClockState, GpioRegulator, Polarity, Regulator};
pub use phy::{GenericPhy, PhyMode, RcarGen3Phy};

#[cfg(feature = "critical-section")]
pub use sync::SharedPhy;

/// Low-level register accessors for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer the [`GenericPhy`] operations instead of touching registers directly.
///
/// # Safety
///
/// Direct register access bypasses driver invariants. Use only if you fully
/// understand the PHY's register map and accept responsibility for correct
/// sequencing.
pub mod unsafe_registers {
    pub use crate::internal::register::usb2;
    pub use crate::internal::register::{Mmio, RegisterBus, read_reg, write_reg};
}

/// Shared driver constants.
pub mod constants {
    pub use crate::internal::constants::{
        COMPATIBLE, DRIVER_NAME, OC_TIMSET_INIT, OF_MATCH, PHY_CLOCK_INDEX, SPD_RSM_TIMSET_INIT,
        VBUS_SUPPLY_NAME,
    };
}
