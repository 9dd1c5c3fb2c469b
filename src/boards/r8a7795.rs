//! R-Car H3 (R8A7795) USB2.0 PHY channels.
//!
//! Base addresses of the PHY windows as they appear in the SoC's hardware
//! description. Platforms without a device tree can build register windows
//! from these directly.

use crate::internal::register::Mmio;

/// R-Car H3 USB2.0 PHY layout.
pub struct R8a7795;

impl R8a7795 {
    /// PHY window base of each USB2.0 channel.
    pub const USB2_PHY_BASES: [usize; 4] = [0xEE08_0200, 0xEE0A_0200, 0xEE0C_0200, 0xEE0E_0200];

    /// Size of each PHY window.
    pub const USB2_PHY_WINDOW_SIZE: usize = 0x700;

    /// The dual-role channel.
    pub const OTG_CHANNEL: usize = 0;

    /// PHY window base of `channel`, if the SoC has it.
    pub const fn usb2_phy_base(channel: usize) -> Option<usize> {
        if channel < Self::USB2_PHY_BASES.len() {
            Some(Self::USB2_PHY_BASES[channel])
        } else {
            None
        }
    }

    /// Register window of `channel`.
    ///
    /// # Safety
    ///
    /// The PHY window must be mapped at its physical address and not be
    /// programmed by anything else while the returned window is in use.
    pub const unsafe fn usb2_phy_window(channel: usize) -> Option<Mmio> {
        match Self::usb2_phy_base(channel) {
            // SAFETY: forwarded to the caller
            Some(base) => Some(unsafe { Mmio::new(base) }),
            None => None,
        }
    }
}
