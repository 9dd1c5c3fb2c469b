//! Centralized Constants
//!
//! Single source of truth for the magic numbers used by the PHY driver.
//!
//! Register bit definitions live in [`register::usb2`](super::register::usb2).

// =============================================================================
// Timing Calibration
// =============================================================================

/// Suspend/resume timing value programmed by `init`
pub const SPD_RSM_TIMSET_INIT: u32 = 0x014E_029B;

/// Over-current timing value programmed by `init`
pub const OC_TIMSET_INIT: u32 = 0x0002_09AB;

// =============================================================================
// Driver Identity
// =============================================================================

/// Driver name reported to the device framework
pub const DRIVER_NAME: &str = "rcar-gen3-phy";

/// Hardware-description compatible string matched by the driver
pub const COMPATIBLE: &str = "renesas,rcar-gen3-usb2-phy";

/// Compatible strings matched by the driver
pub const OF_MATCH: &[&str] = &[COMPATIBLE];

// =============================================================================
// Resource Lookup
// =============================================================================

/// Name of the optional VBUS supply property
pub const VBUS_SUPPLY_NAME: &str = "vbus-supply";

/// Index of the PHY functional clock
pub const PHY_CLOCK_INDEX: usize = 0;
