//! Memory-mapped register access for the USB2.0 PHY
//!
//! The PHY is programmed through a single register window. All accesses are
//! 32-bit and little-endian, relative to the window's base address.
//!
//! [`RegisterBus`] is the seam between the driver and the hardware: [`Mmio`]
//! performs volatile accesses on real silicon, while tests substitute a mock
//! backend that records every access.

pub mod usb2;

/// Read a 32-bit little-endian register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    u32::from_le(unsafe { core::ptr::read_volatile(addr as *const u32) })
}

/// Write a 32-bit little-endian value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value.to_le()) }
}

// =============================================================================
// Register Bus
// =============================================================================

/// Access to one register window.
///
/// Offsets are byte offsets from [`RegisterBus::base`]. Only [`read`] and
/// [`write`] must be provided; the read-modify-write helpers are built on top
/// of them.
///
/// Accesses take `&self`, like volatile MMIO: a register window is a handle,
/// not the storage itself.
///
/// [`read`]: RegisterBus::read
/// [`write`]: RegisterBus::write
pub trait RegisterBus {
    /// Base address of the window
    fn base(&self) -> usize;

    /// Read the register at `offset`
    fn read(&self, offset: usize) -> u32;

    /// Write `value` to the register at `offset`
    fn write(&self, offset: usize, value: u32);

    /// Apply `f` to the current register value and write the result back
    #[inline]
    fn modify<F>(&self, offset: usize, f: F)
    where
        F: FnOnce(u32) -> u32,
        Self: Sized,
    {
        let value = self.read(offset);
        self.write(offset, f(value));
    }

    /// Set `bits` (read-modify-write)
    #[inline]
    fn set_bits(&self, offset: usize, bits: u32) {
        let value = self.read(offset);
        self.write(offset, value | bits);
    }

    /// Clear `bits` (read-modify-write)
    #[inline]
    fn clear_bits(&self, offset: usize, bits: u32) {
        let value = self.read(offset);
        self.write(offset, value & !bits);
    }

    /// Clear `clear` then set `set` in a single read-modify-write
    #[inline]
    fn clear_set_bits(&self, offset: usize, clear: u32, set: u32) {
        let value = self.read(offset);
        self.write(offset, (value & !clear) | set);
    }

    /// Check whether every bit in `mask` is set
    #[inline]
    fn all_set(&self, offset: usize, mask: u32) -> bool {
        self.read(offset) & mask == mask
    }
}

// =============================================================================
// MMIO Backend
// =============================================================================

/// Volatile register window at a fixed physical address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Create a register window at `base`
    ///
    /// # Safety
    ///
    /// `base` must point to the mapped, 32-bit aligned register block of the
    /// PHY, and no other code may program that block while this window is in
    /// use.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl RegisterBus for Mmio {
    #[inline(always)]
    fn base(&self) -> usize {
        self.base
    }

    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: `Mmio::new` requires a valid register window
        unsafe { read_reg(self.base + offset) }
    }

    #[inline(always)]
    fn write(&self, offset: usize, value: u32) {
        // SAFETY: `Mmio::new` requires a valid register window
        unsafe { write_reg(self.base + offset, value) }
    }
}
