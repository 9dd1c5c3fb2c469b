//! Regulator HAL
//!
//! VBUS for the port is supplied by an optional regulator. Boards that wire
//! VBUS externally simply have no supply in their hardware description.
//!
//! [`Regulator`] is the interface the driver consumes. [`GpioRegulator`] is a
//! fixed regulator switched by a single enable GPIO, which covers most
//! board-level VBUS switches.
//!
//! # Example
//!
//! ```ignore
//! use rcar_usb2_phy::hal::{GpioRegulator, Polarity};
//!
//! // VBUS switch enable on an active-high GPIO
//! let vbus = GpioRegulator::new(vbus_en_pin, Polarity::ActiveHigh);
//! ```

use embedded_hal::digital::OutputPin;

use crate::driver::error::{ResourceError, ResourceResult};

/// On/off control of a voltage regulator
pub trait Regulator {
    /// Enable (`true`) or disable (`false`) the output
    fn set_enable(&mut self, enable: bool) -> ResourceResult<()>;
}

impl<T: Regulator + ?Sized> Regulator for &mut T {
    fn set_enable(&mut self, enable: bool) -> ResourceResult<()> {
        (**self).set_enable(enable)
    }
}

/// Logic level that turns the regulator on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level enables the output
    #[default]
    ActiveHigh,
    /// Low level enables the output
    ActiveLow,
}

/// Fixed regulator controlled by an enable GPIO
#[derive(Debug)]
pub struct GpioRegulator<P: OutputPin> {
    pin: P,
    polarity: Polarity,
    enabled: bool,
}

impl<P: OutputPin> GpioRegulator<P> {
    /// Create a regulator on `pin`
    ///
    /// The pin is not driven until the first [`Regulator::set_enable`].
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            enabled: false,
        }
    }

    /// Whether the output was last switched on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Regulator for GpioRegulator<P> {
    fn set_enable(&mut self, enable: bool) -> ResourceResult<()> {
        let drive_high = match self.polarity {
            Polarity::ActiveHigh => enable,
            Polarity::ActiveLow => !enable,
        };

        let result = if drive_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ResourceError::Io)?;

        self.enabled = enable;
        Ok(())
    }
}
