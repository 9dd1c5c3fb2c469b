//! Driver Registry
//!
//! Drivers are registered explicitly into a fixed-capacity table instead of a
//! linker-collected global list. Binding walks the table and probes the first
//! driver whose compatible list matches the device.
//!
//! # Example
//!
//! ```ignore
//! use rcar_usb2_phy::driver::registry::DriverRegistry;
//! use rcar_usb2_phy::RcarGen3Phy;
//!
//! let mut registry: DriverRegistry<BoardNode, BoardPhy, 4> = DriverRegistry::new();
//! registry.register(RcarGen3Phy::driver_entry())?;
//!
//! let (name, mut phy) = registry.bind(&mut usb2_phy0_node)?;
//! ```

use crate::driver::device::DeviceNode;
use crate::driver::error::{ConfigError, ConfigResult, Result};

/// Probe function: build a device from its hardware description
pub type ProbeFn<N, D> = fn(&mut N) -> Result<D>;

/// Remove function: tear a device down
pub type RemoveFn<D> = fn(D) -> Result<()>;

/// One registered driver
pub struct DriverEntry<N, D> {
    name: &'static str,
    of_match: &'static [&'static str],
    probe: ProbeFn<N, D>,
    remove: RemoveFn<D>,
}

// Function pointers are Copy whatever N and D are
impl<N, D> Clone for DriverEntry<N, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, D> Copy for DriverEntry<N, D> {}

impl<N, D> core::fmt::Debug for DriverEntry<N, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DriverEntry")
            .field("name", &self.name)
            .field("of_match", &self.of_match)
            .finish_non_exhaustive()
    }
}

impl<N, D> DriverEntry<N, D> {
    /// Create an entry
    pub const fn new(
        name: &'static str,
        of_match: &'static [&'static str],
        probe: ProbeFn<N, D>,
        remove: RemoveFn<D>,
    ) -> Self {
        Self {
            name,
            of_match,
            probe,
            remove,
        }
    }

    /// Driver name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Compatible strings the driver matches
    pub const fn of_match(&self) -> &'static [&'static str] {
        self.of_match
    }

    /// Whether the driver matches `compatible`
    pub fn matches(&self, compatible: &str) -> bool {
        self.of_match.iter().any(|c| *c == compatible)
    }

    /// Run the driver's probe
    pub fn probe(&self, node: &mut N) -> Result<D> {
        (self.probe)(node)
    }

    /// Run the driver's remove
    pub fn remove(&self, device: D) -> Result<()> {
        (self.remove)(device)
    }
}

/// Fixed-capacity table of drivers producing devices of type `D`
pub struct DriverRegistry<N, D, const CAP: usize> {
    entries: [Option<DriverEntry<N, D>>; CAP],
    len: usize,
}

impl<N, D, const CAP: usize> DriverRegistry<N, D, CAP> {
    /// Create an empty registry (const, suitable for static initialization)
    pub const fn new() -> Self {
        Self {
            entries: [None; CAP],
            len: 0,
        }
    }

    /// Add a driver
    pub fn register(&mut self, entry: DriverEntry<N, D>) -> ConfigResult<()> {
        let slot = self
            .entries
            .get_mut(self.len)
            .ok_or(ConfigError::RegistryFull)?;
        *slot = Some(entry);
        self.len += 1;
        Ok(())
    }

    /// Number of registered drivers
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no driver is registered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over registered drivers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &DriverEntry<N, D>> {
        self.entries[..self.len].iter().flatten()
    }

    /// First driver matching `compatible`
    pub fn find(&self, compatible: &str) -> Option<&DriverEntry<N, D>> {
        self.iter().find(|entry| entry.matches(compatible))
    }

    /// First driver with the given name
    pub fn by_name(&self, name: &str) -> Option<&DriverEntry<N, D>> {
        self.iter().find(|entry| entry.name == name)
    }
}

impl<N: DeviceNode, D, const CAP: usize> DriverRegistry<N, D, CAP> {
    /// Probe the driver matching `node`
    ///
    /// The node's compatible strings are tried most specific first. Returns
    /// the bound driver's name with the device. Fails with
    /// [`ConfigError::NoMatchingDriver`] when no driver matches; a probe
    /// error is returned unchanged.
    pub fn bind(&self, node: &mut N) -> Result<(&'static str, D)> {
        let entry = node
            .compatible()
            .iter()
            .find_map(|compatible| self.find(compatible))
            .copied()
            .ok_or(ConfigError::NoMatchingDriver)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("binding driver {}", entry.name);

        let device = entry.probe(node)?;
        Ok((entry.name, device))
    }

    /// Run the remove of driver `name` on `device`
    pub fn unbind(&self, name: &str, device: D) -> Result<()> {
        let entry = self.by_name(name).ok_or(ConfigError::NoMatchingDriver)?;
        entry.remove(device)
    }
}

impl<N, D, const CAP: usize> Default for DriverRegistry<N, D, CAP> {
    fn default() -> Self {
        Self::new()
    }
}
