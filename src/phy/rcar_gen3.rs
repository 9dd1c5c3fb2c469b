//! R-Car Gen3 USB2.0 PHY Driver
//!
//! Driver for the USB2.0 PHY of Renesas R-Car Gen3 SoCs (H3, M3-W, M3-N, E3).
//!
//! The PHY sits in front of the EHCI/OHCI host and the HS-USB peripheral
//! controller of each USB2.0 channel. Channel 0 is dual role; the driver
//! routes it to host or peripheral operation and sets up the line
//! terminations and VBUS drive to match.
//!
//! # Lifecycle
//!
//! | Framework call | Effect |
//! |----------------|--------|
//! | probe          | Resolve registers, optional `vbus-supply`, enable clock 0 |
//! | `init`         | Mask interrupts, program suspend/resume and over-current timing |
//! | `power_on`     | Enable VBUS supply, pulse PLL reset |
//! | `set_mode`     | Select host or peripheral, or detect the role for OTG |
//! | `power_off`    | Disable VBUS supply |
//! | `exit`         | Mask interrupts |
//! | remove         | Disable clock |
//!
//! # OTG Role Detection
//!
//! [`PhyMode::UsbOtg`] is not a mode the PHY stays in. The driver samples the
//! ID pin and session-valid status in ADPCTRL and resolves to
//! [`PhyMode::UsbDevice`] when both are set (ID floating and VBUS supplied by
//! the other side), otherwise to [`PhyMode::UsbHost`].
//!
//! A non-zero `submode` with [`PhyMode::UsbOtg`] additionally performs the
//! one-time detection wiring: OTG interrupts, alternate VBUS drive select,
//! ID pull-up and pull-down enables on both data lines.
//!
//! # Example
//!
//! ```ignore
//! use rcar_usb2_phy::{GenericPhy, PhyMode, RcarGen3Phy};
//!
//! let mut phy = RcarGen3Phy::probe(&mut node)?;
//! phy.init()?;
//! phy.power_on()?;
//! phy.set_mode(PhyMode::UsbOtg, 1)?;
//! ```

use crate::driver::device::DeviceNode;
use crate::driver::error::{ConfigError, Error, Result};
use crate::driver::registry::DriverEntry;
use crate::hal::{Clock, ClockGate, ClockState, Regulator};
use crate::internal::constants::{
    DRIVER_NAME, OC_TIMSET_INIT, OF_MATCH, PHY_CLOCK_INDEX, SPD_RSM_TIMSET_INIT, VBUS_SUPPLY_NAME,
};
use crate::internal::register::RegisterBus;
use crate::internal::register::usb2::*;
use crate::phy::generic::{GenericPhy, PhyMode};

/// R-Car Gen3 USB2.0 PHY instance
///
/// Owns the register window, the functional clock and, if the board has
/// one, the VBUS regulator.
#[derive(Debug)]
pub struct RcarGen3Phy<R: RegisterBus, C: Clock, V: Regulator> {
    regs: R,
    clock: ClockGate<C>,
    vbus: Option<V>,
}

impl<R: RegisterBus, C: Clock, V: Regulator> RcarGen3Phy<R, C, V> {
    /// Driver name
    pub const NAME: &'static str = DRIVER_NAME;

    /// Compatible strings matched by the driver
    pub const OF_MATCH: &'static [&'static str] = OF_MATCH;

    /// Build an instance from already resolved resources
    ///
    /// Enables the clock; on failure nothing is constructed and the error
    /// is returned as [`Error::Clock`].
    pub fn from_parts(regs: R, clock: C, vbus: Option<V>) -> Result<Self> {
        let mut clock = ClockGate::new(clock);
        clock.enable().map_err(Error::Clock)?;

        Ok(Self { regs, clock, vbus })
    }

    /// Instantiate the PHY from its hardware description
    ///
    /// Fails with [`ConfigError::MissingRegisterBase`] when the node has no
    /// register window. A missing `vbus-supply` is tolerated; any other
    /// supply lookup failure, and any failure to get or enable clock 0,
    /// aborts the probe with that error.
    pub fn probe<N>(node: &mut N) -> Result<Self>
    where
        N: DeviceNode<Regs = R, Clock = C, Regulator = V>,
    {
        let regs = node.registers().ok_or(ConfigError::MissingRegisterBase)?;

        let vbus = match node.optional_supply_regulator(VBUS_SUPPLY_NAME) {
            Ok(vbus) => vbus,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("USB2 PHY @ {:#010x}: failed to get regulator: {}", regs.base(), e);

                return Err(Error::Regulator(e));
            }
        };

        let clock = node
            .clock_by_index(PHY_CLOCK_INDEX)
            .map_err(Error::Clock)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "USB2 PHY @ {:#010x}: probed (vbus supply: {})",
            regs.base(),
            vbus.is_some()
        );

        Self::from_parts(regs, clock, vbus)
    }

    /// Tear the instance down
    ///
    /// The clock is disabled in every case; a provider failure is returned
    /// as [`Error::Clock`].
    pub fn remove(mut self) -> Result<()> {
        self.clock.disable().map_err(Error::Clock)
    }

    /// Registry entry for this driver
    pub fn driver_entry<N>() -> DriverEntry<N, Self>
    where
        N: DeviceNode<Regs = R, Clock = C, Regulator = V>,
    {
        DriverEntry::new(Self::NAME, Self::OF_MATCH, Self::probe::<N>, Self::remove)
    }

    /// Register window
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Clock handle
    pub fn clock(&self) -> &C {
        self.clock.inner()
    }

    /// Clock state as last set by the driver
    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// VBUS regulator, if the board has one
    pub fn vbus_supply(&self) -> Option<&V> {
        self.vbus.as_ref()
    }

    /// Whether VBUS is switched by this driver
    pub fn has_vbus_supply(&self) -> bool {
        self.vbus.is_some()
    }

    /// Sample the OTG role from ADPCTRL
    ///
    /// Returns [`PhyMode::UsbDevice`] when the ID pin and session-valid bits
    /// are both set, [`PhyMode::UsbHost`] otherwise.
    pub fn resolve_otg_role(&self) -> PhyMode {
        if self.regs.all_set(ADPCTRL_OFFSET, ADPCTRL_DEVICE_MASK) {
            PhyMode::UsbDevice
        } else {
            PhyMode::UsbHost
        }
    }

    /// One-time wiring for OTG role detection
    fn setup_otg_detection(&self) {
        self.regs.write(INT_ENABLE_OFFSET, INT_ENABLE_OTG);
        self.regs.set_bits(VBCTRL_OFFSET, VBCTRL_DRVVBUSSEL);
        // Write-1-to-clear stale change events before unmasking them
        self.regs.write(OBINTSTA_OFFSET, OBINT_OTG);
        self.regs.set_bits(OBINTEN_OFFSET, OBINT_OTG);
        self.regs.set_bits(ADPCTRL_OFFSET, ADPCTRL_IDPULLUP);
        self.regs.clear_set_bits(
            LINECTRL1_OFFSET,
            LINECTRL1_RPD | LINECTRL1_RPD_EN,
            LINECTRL1_RPD_EN,
        );
    }

    fn select_host(&self) {
        self.regs.clear_bits(COMMCTRL_OFFSET, COMMCTRL_OTG_PERI);
        self.regs.set_bits(LINECTRL1_OFFSET, LINECTRL1_RPD);
        self.regs.set_bits(ADPCTRL_OFFSET, ADPCTRL_DRVVBUS);
    }

    fn select_device(&self) {
        self.regs.set_bits(COMMCTRL_OFFSET, COMMCTRL_OTG_PERI);
        // D+ released, D- held low
        self.regs
            .clear_set_bits(LINECTRL1_OFFSET, LINECTRL1_RPD, LINECTRL1_DM_RPD);
        self.regs.clear_bits(ADPCTRL_OFFSET, ADPCTRL_DRVVBUS);
    }
}

impl<R: RegisterBus, C: Clock, V: Regulator> GenericPhy for RcarGen3Phy<R, C, V> {
    fn init(&mut self) -> Result<()> {
        self.regs.write(INT_ENABLE_OFFSET, 0);
        self.regs.write(SPD_RSM_TIMSET_OFFSET, SPD_RSM_TIMSET_INIT);
        self.regs.write(OC_TIMSET_OFFSET, OC_TIMSET_INIT);
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.regs.write(INT_ENABLE_OFFSET, 0);
        Ok(())
    }

    fn power_on(&mut self) -> Result<()> {
        if let Some(vbus) = self.vbus.as_mut() {
            vbus.set_enable(true).map_err(Error::Regulator)?;
        }

        self.regs.set_bits(USBCTR_OFFSET, USBCTR_PLL_RST);
        self.regs.clear_bits(USBCTR_OFFSET, USBCTR_PLL_RST);
        Ok(())
    }

    fn power_off(&mut self) -> Result<()> {
        let Some(vbus) = self.vbus.as_mut() else {
            return Ok(());
        };

        vbus.set_enable(false).map_err(Error::Regulator)
    }

    fn set_mode(&mut self, mode: PhyMode, submode: i32) -> Result<()> {
        let mode = if mode == PhyMode::UsbOtg {
            if submode != 0 {
                self.setup_otg_detection();
            }

            let role = self.resolve_otg_role();

            #[cfg(feature = "defmt")]
            defmt::debug!("USB2 PHY @ {:#010x}: OTG resolved to {}", self.regs.base(), role);

            role
        } else {
            mode
        };

        match mode {
            PhyMode::UsbHost => self.select_host(),
            PhyMode::UsbDevice => self.select_device(),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::error!("USB2 PHY @ {:#010x}: unknown mode {}", self.regs.base(), mode);

                return Err(ConfigError::UnsupportedMode.into());
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
