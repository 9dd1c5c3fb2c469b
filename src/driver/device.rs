//! Hardware Description Lookup
//!
//! A [`DeviceNode`] is the driver's view of one device in the platform's
//! hardware description (typically a flattened device tree node). It resolves
//! the register window and hands out the clock and regulator handles the
//! node references.
//!
//! Platform glue implements this trait once; the driver's probe only talks to
//! the trait.

use crate::driver::error::{ResourceError, ResourceResult};
use crate::hal::{Clock, Regulator};
use crate::internal::register::RegisterBus;

/// One device in the hardware description
pub trait DeviceNode {
    /// Register window type
    type Regs: RegisterBus;
    /// Clock handle type
    type Clock: Clock;
    /// Regulator handle type
    type Regulator: Regulator;

    /// Compatible strings of the node, most specific first
    fn compatible(&self) -> &[&str];

    /// Register window described by the node
    ///
    /// Returns `None` when the node has no usable register address.
    /// Implementations are responsible for the window pointing at mapped
    /// device memory.
    fn registers(&self) -> Option<Self::Regs>;

    /// Look up a supply regulator by property name
    ///
    /// A node without the property reports [`ResourceError::NotFound`].
    fn supply_regulator(&mut self, name: &str) -> ResourceResult<Self::Regulator>;

    /// Look up the clock at `index` in the node's clock list
    fn clock_by_index(&mut self, index: usize) -> ResourceResult<Self::Clock>;

    /// Look up a supply that boards may leave out
    ///
    /// [`ResourceError::NotFound`] becomes `Ok(None)`; every other lookup
    /// error is returned.
    fn optional_supply_regulator(&mut self, name: &str) -> ResourceResult<Option<Self::Regulator>> {
        match self.supply_regulator(name) {
            Ok(regulator) => Ok(Some(regulator)),
            Err(ResourceError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether the node lists `compatible`
    fn is_compatible(&self, compatible: &str) -> bool {
        self.compatible().iter().any(|c| *c == compatible)
    }
}
