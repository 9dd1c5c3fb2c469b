//! Clock HAL
//!
//! The PHY needs its functional clock running before any register access.
//! The clock itself is owned by the platform's clock subsystem; this module
//! defines the [`Clock`] interface the driver consumes and a [`ClockGate`]
//! that tracks what the driver has done with it.

use crate::driver::error::ResourceResult;

/// Enable/disable handle for one clock
pub trait Clock {
    /// Ungate the clock
    fn enable(&mut self) -> ResourceResult<()>;

    /// Gate the clock
    fn disable(&mut self) -> ResourceResult<()>;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn enable(&mut self) -> ResourceResult<()> {
        (**self).enable()
    }

    fn disable(&mut self) -> ResourceResult<()> {
        (**self).disable()
    }
}

/// Clock state as last requested by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Clock not touched yet
    #[default]
    Unconfigured,
    /// Clock enabled
    Enabled,
    /// Clock disabled
    Disabled,
}

/// A clock handle together with its tracked state
///
/// State only changes when the provider reports success.
#[derive(Debug)]
pub struct ClockGate<C: Clock> {
    clock: C,
    state: ClockState,
}

impl<C: Clock> ClockGate<C> {
    /// Wrap a clock handle
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            state: ClockState::Unconfigured,
        }
    }

    /// Enable the clock
    pub fn enable(&mut self) -> ResourceResult<()> {
        self.clock.enable()?;
        self.state = ClockState::Enabled;
        Ok(())
    }

    /// Disable the clock
    pub fn disable(&mut self) -> ResourceResult<()> {
        self.clock.disable()?;
        self.state = ClockState::Disabled;
        Ok(())
    }

    /// Check if the clock is enabled
    pub fn is_enabled(&self) -> bool {
        self.state == ClockState::Enabled
    }

    /// Get current clock state
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Access the underlying handle
    pub fn inner(&self) -> &C {
        &self.clock
    }

    /// Release the underlying handle
    pub fn into_inner(self) -> C {
        self.clock
    }
}
