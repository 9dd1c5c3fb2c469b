//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::vec::Vec;

use crate::driver::device::DeviceNode;
use crate::driver::error::{ResourceError, ResourceResult};
use crate::hal::{Clock, Regulator};
use crate::internal::constants::{COMPATIBLE, PHY_CLOCK_INDEX, VBUS_SUPPLY_NAME};
use crate::internal::register::RegisterBus;
use crate::phy::rcar_gen3::RcarGen3Phy;

/// PHY instance wired to the mocks below
pub type MockPhy = RcarGen3Phy<MockRegisters, MockClock, MockRegulator>;

// =============================================================================
// Mock Register Window
// =============================================================================

/// One recorded register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read at offset
    Read(usize),
    /// Write of value at offset
    Write(usize, u32),
}

impl Access {
    /// Offset touched by the access
    pub fn offset(&self) -> usize {
        match *self {
            Access::Read(offset) | Access::Write(offset, _) => offset,
        }
    }
}

/// Mock register window for testing without hardware
///
/// Unset registers read as zero. [`MockRegisters::set`] and
/// [`MockRegisters::get`] bypass the access log, so tests can preset and
/// inspect state without disturbing what the driver did.
///
/// # Example
///
/// ```ignore
/// let regs = MockRegisters::new(0);
/// regs.set(ADPCTRL_OFFSET, ADPCTRL_IDDIG);
///
/// regs.set_bits(ADPCTRL_OFFSET, ADPCTRL_DRVVBUS);
/// assert_eq!(regs.writes(), vec![(ADPCTRL_OFFSET, ADPCTRL_IDDIG | ADPCTRL_DRVVBUS)]);
/// ```
#[derive(Debug, Default)]
pub struct MockRegisters {
    base: usize,
    /// Register values: offset -> value
    registers: RefCell<HashMap<usize, u32>>,
    /// Every read and write, in order
    log: RefCell<Vec<Access>>,
}

impl MockRegisters {
    /// Create an empty window at `base`
    pub fn new(base: usize) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Preset a register value (not logged)
    pub fn set(&self, offset: usize, value: u32) {
        self.registers.borrow_mut().insert(offset, value);
    }

    /// Current register value (not logged)
    pub fn get(&self, offset: usize) -> u32 {
        self.registers.borrow().get(&offset).copied().unwrap_or(0)
    }

    /// All accesses made through [`RegisterBus`]
    pub fn accesses(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    /// All writes made through [`RegisterBus`], as (offset, value)
    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|access| match *access {
                Access::Write(offset, value) => Some((offset, value)),
                Access::Read(_) => None,
            })
            .collect()
    }

    /// Clear the access log
    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }
}

impl RegisterBus for MockRegisters {
    fn base(&self) -> usize {
        self.base
    }

    fn read(&self, offset: usize) -> u32 {
        self.log.borrow_mut().push(Access::Read(offset));
        self.get(offset)
    }

    fn write(&self, offset: usize, value: u32) {
        self.log.borrow_mut().push(Access::Write(offset, value));
        self.set(offset, value);
    }
}

// =============================================================================
// Mock Clock
// =============================================================================

/// Mock clock recording enable/disable calls
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    enabled: bool,
    enables: u32,
    disables: u32,
    enable_error: Option<ResourceError>,
    disable_error: Option<ResourceError>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every enable fail with `error`
    pub fn fail_enable(&mut self, error: ResourceError) {
        self.enable_error = Some(error);
    }

    /// Make every disable fail with `error`
    pub fn fail_disable(&mut self, error: ResourceError) {
        self.disable_error = Some(error);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of enable attempts
    pub fn enable_count(&self) -> u32 {
        self.enables
    }

    /// Number of disable attempts
    pub fn disable_count(&self) -> u32 {
        self.disables
    }
}

impl Clock for MockClock {
    fn enable(&mut self) -> ResourceResult<()> {
        self.enables += 1;
        if let Some(e) = self.enable_error {
            return Err(e);
        }
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> ResourceResult<()> {
        self.disables += 1;
        if let Some(e) = self.disable_error {
            return Err(e);
        }
        self.enabled = false;
        Ok(())
    }
}

// =============================================================================
// Mock Regulator
// =============================================================================

/// Mock regulator recording requested states
#[derive(Debug, Clone, Default)]
pub struct MockRegulator {
    enabled: bool,
    requests: Vec<bool>,
    fail_next: Option<ResourceError>,
}

impl MockRegulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `set_enable` fail with `error`
    pub fn fail_next(&mut self, error: ResourceError) {
        self.fail_next = Some(error);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Every requested state, including failed requests
    pub fn requests(&self) -> &[bool] {
        &self.requests
    }
}

impl Regulator for MockRegulator {
    fn set_enable(&mut self, enable: bool) -> ResourceResult<()> {
        self.requests.push(enable);
        if let Some(e) = self.fail_next.take() {
            return Err(e);
        }
        self.enabled = enable;
        Ok(())
    }
}

// =============================================================================
// Mock GPIO
// =============================================================================

/// Error reported by a failing [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Mock output pin remembering its last driven level
#[derive(Debug, Default)]
pub struct MockPin {
    level: Option<bool>,
    failing: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whose every operation fails
    pub fn failing() -> Self {
        Self {
            level: None,
            failing: true,
        }
    }

    /// Last driven level, `None` if never driven
    pub fn level(&self) -> Option<bool> {
        self.level
    }

    fn drive(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.failing {
            return Err(MockPinError);
        }
        self.level = Some(high);
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

// =============================================================================
// Mock Device Node
// =============================================================================

/// Mock hardware description node
///
/// Defaults to an R-Car Gen3 USB2 PHY node with a register window and
/// clock 0, and no `vbus-supply`.
#[derive(Debug)]
pub struct MockNode {
    base: Option<usize>,
    compatible: Vec<&'static str>,
    supply: Result<MockRegulator, ResourceError>,
    clock: MockClock,
    clock_error: Option<ResourceError>,
    clock_lookups: u32,
}

impl MockNode {
    /// R-Car Gen3 USB2 PHY node with its window at `base`
    pub fn rcar_gen3(base: usize) -> Self {
        Self {
            base: Some(base),
            compatible: std::vec![COMPATIBLE],
            supply: Err(ResourceError::NotFound),
            clock: MockClock::new(),
            clock_error: None,
            clock_lookups: 0,
        }
    }

    pub fn without_registers(mut self) -> Self {
        self.base = None;
        self
    }

    pub fn with_compatible(mut self, compatible: &[&'static str]) -> Self {
        self.compatible = compatible.to_vec();
        self
    }

    pub fn with_supply(mut self) -> Self {
        self.supply = Ok(MockRegulator::new());
        self
    }

    pub fn with_supply_error(mut self, error: ResourceError) -> Self {
        self.supply = Err(error);
        self
    }

    pub fn with_clock_error(mut self, error: ResourceError) -> Self {
        self.clock_error = Some(error);
        self
    }

    pub fn with_clock_enable_error(mut self, error: ResourceError) -> Self {
        self.clock.fail_enable(error);
        self
    }

    /// Regulator handed out by the next supply lookup
    pub fn regulator_mut(&mut self) -> &mut MockRegulator {
        self.supply.as_mut().expect("node has no supply")
    }

    /// Number of clock lookups performed
    pub fn clock_lookups(&self) -> u32 {
        self.clock_lookups
    }
}

impl DeviceNode for MockNode {
    type Regs = MockRegisters;
    type Clock = MockClock;
    type Regulator = MockRegulator;

    fn compatible(&self) -> &[&str] {
        &self.compatible
    }

    fn registers(&self) -> Option<MockRegisters> {
        self.base.map(MockRegisters::new)
    }

    fn supply_regulator(&mut self, name: &str) -> ResourceResult<MockRegulator> {
        if name != VBUS_SUPPLY_NAME {
            return Err(ResourceError::NotFound);
        }
        self.supply.clone()
    }

    fn clock_by_index(&mut self, index: usize) -> ResourceResult<MockClock> {
        self.clock_lookups += 1;
        if index != PHY_CLOCK_INDEX {
            return Err(ResourceError::NotFound);
        }
        match self.clock_error {
            Some(e) => Err(e),
            None => Ok(self.clock.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_registers_read_write() {
        let regs = MockRegisters::new(0);

        // Initially reads 0
        assert_eq!(regs.read(0x10), 0);

        regs.write(0x10, 0x1234);
        assert_eq!(regs.read(0x10), 0x1234);

        assert_eq!(
            regs.accesses(),
            std::vec![
                Access::Read(0x10),
                Access::Write(0x10, 0x1234),
                Access::Read(0x10)
            ]
        );
        assert_eq!(regs.writes(), std::vec![(0x10, 0x1234)]);
    }

    #[test]
    fn mock_registers_preset_not_logged() {
        let regs = MockRegisters::new(0);
        regs.set(0x4, 7);

        assert_eq!(regs.get(0x4), 7);
        assert!(regs.accesses().is_empty());
    }

    #[test]
    fn mock_clock_counts_attempts() {
        let mut clock = MockClock::new();
        clock.enable().unwrap();
        clock.fail_disable(ResourceError::Busy);

        assert_eq!(clock.disable(), Err(ResourceError::Busy));
        assert!(clock.is_enabled());
        assert_eq!(clock.enable_count(), 1);
        assert_eq!(clock.disable_count(), 1);
    }

    #[test]
    fn mock_regulator_fails_once() {
        let mut reg = MockRegulator::new();
        reg.fail_next(ResourceError::Io);

        assert_eq!(reg.set_enable(true), Err(ResourceError::Io));
        assert!(!reg.is_enabled());

        reg.set_enable(true).unwrap();
        assert!(reg.is_enabled());
        assert_eq!(reg.requests(), &[true, true]);
    }

    #[test]
    fn mock_node_lookups() {
        let mut node = MockNode::rcar_gen3(0x100).with_supply();

        assert_eq!(node.registers().unwrap().base(), 0x100);
        assert!(node.supply_regulator("vbus-supply").is_ok());
        assert_eq!(
            node.supply_regulator("phy-supply").err(),
            Some(ResourceError::NotFound)
        );
        assert_eq!(node.clock_by_index(1).err(), Some(ResourceError::NotFound));
        assert!(node.clock_by_index(0).is_ok());
        assert_eq!(node.clock_lookups(), 2);
    }
}
