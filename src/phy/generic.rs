//! Generic PHY Operations
//!
//! This module defines the operation table every PHY exposes to the owning
//! device framework, and the mode values the framework passes to
//! [`GenericPhy::set_mode`].

use crate::driver::error::{ConfigError, Result};

// =============================================================================
// PHY Mode
// =============================================================================

/// PHY operating mode requested by the framework
///
/// Discriminants match the framework's raw mode numbering, so values coming
/// from C-style callers convert with [`TryFrom<u32>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum PhyMode {
    /// No mode selected
    #[default]
    Invalid = 0,
    /// USB host
    UsbHost = 1,
    /// USB host, low speed
    UsbHostLs = 2,
    /// USB host, full speed
    UsbHostFs = 3,
    /// USB host, high speed
    UsbHostHs = 4,
    /// USB host, super speed
    UsbHostSs = 5,
    /// USB peripheral
    UsbDevice = 6,
    /// USB peripheral, low speed
    UsbDeviceLs = 7,
    /// USB peripheral, full speed
    UsbDeviceFs = 8,
    /// USB peripheral, high speed
    UsbDeviceHs = 9,
    /// USB peripheral, super speed
    UsbDeviceSs = 10,
    /// USB dual role, resolved by the PHY
    UsbOtg = 11,
    /// UFS HS rate A
    UfsHsA = 12,
    /// UFS HS rate B
    UfsHsB = 13,
    /// PCI Express
    Pcie = 14,
    /// Ethernet
    Ethernet = 15,
    /// MIPI D-PHY
    MipiDphy = 16,
    /// SATA
    Sata = 17,
    /// LVDS
    Lvds = 18,
    /// DisplayPort
    Dp = 19,
}

impl PhyMode {
    const ALL: [PhyMode; 20] = [
        PhyMode::Invalid,
        PhyMode::UsbHost,
        PhyMode::UsbHostLs,
        PhyMode::UsbHostFs,
        PhyMode::UsbHostHs,
        PhyMode::UsbHostSs,
        PhyMode::UsbDevice,
        PhyMode::UsbDeviceLs,
        PhyMode::UsbDeviceFs,
        PhyMode::UsbDeviceHs,
        PhyMode::UsbDeviceSs,
        PhyMode::UsbOtg,
        PhyMode::UfsHsA,
        PhyMode::UfsHsB,
        PhyMode::Pcie,
        PhyMode::Ethernet,
        PhyMode::MipiDphy,
        PhyMode::Sata,
        PhyMode::Lvds,
        PhyMode::Dp,
    ];

    /// Raw framework value
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Whether this is one of the USB modes
    pub const fn is_usb(self) -> bool {
        matches!(self.as_raw(), 1..=11)
    }
}

impl TryFrom<u32> for PhyMode {
    type Error = ConfigError;

    fn try_from(raw: u32) -> core::result::Result<Self, Self::Error> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(ConfigError::UnsupportedMode)
    }
}

impl From<PhyMode> for u32 {
    fn from(mode: PhyMode) -> Self {
        mode.as_raw()
    }
}

// =============================================================================
// Generic PHY Trait
// =============================================================================

/// Operation table of a PHY
///
/// The trait is object safe, so a framework can drive any bound PHY through
/// `&mut dyn GenericPhy`. Operations a PHY does not need keep their default
/// implementation, which succeeds without touching hardware.
///
/// The framework serializes calls; implementations do no locking.
pub trait GenericPhy {
    /// Bring the PHY to a known state
    fn init(&mut self) -> Result<()>;

    /// Undo [`GenericPhy::init`]
    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Power the PHY up
    fn power_on(&mut self) -> Result<()> {
        Ok(())
    }

    /// Power the PHY down
    fn power_off(&mut self) -> Result<()> {
        Ok(())
    }

    /// Select an operating mode
    ///
    /// `submode` is PHY specific.
    fn set_mode(&mut self, mode: PhyMode, submode: i32) -> Result<()> {
        let _ = (mode, submode);
        Ok(())
    }
}

impl<T: GenericPhy + ?Sized> GenericPhy for &mut T {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn exit(&mut self) -> Result<()> {
        (**self).exit()
    }

    fn power_on(&mut self) -> Result<()> {
        (**self).power_on()
    }

    fn power_off(&mut self) -> Result<()> {
        (**self).power_off()
    }

    fn set_mode(&mut self, mode: PhyMode, submode: i32) -> Result<()> {
        (**self).set_mode(mode, submode)
    }
}
