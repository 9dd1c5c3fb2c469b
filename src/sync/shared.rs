//! ISR-safe PHY wrapper using critical sections.

use super::primitives::CriticalSectionCell;

/// ISR-safe slot holding a probed PHY.
///
/// The slot starts empty so it can be a `static`; the PHY is moved in after
/// probe. All access goes through `critical_section::with()`, disabling
/// interrupts for the duration of the closure.
///
/// # Example
///
/// ```ignore
/// static USB2_PHY0: SharedPhy<BoardPhy> = SharedPhy::new();
///
/// USB2_PHY0.install(RcarGen3Phy::probe(&mut node)?);
///
/// #[interrupt]
/// fn USB2_CH0() {
///     // ID pin or VBUS changed: re-sample the role
///     USB2_PHY0.with(|phy| phy.set_mode(PhyMode::UsbOtg, 0));
/// }
/// ```
pub struct SharedPhy<P> {
    inner: CriticalSectionCell<Option<P>>,
}

impl<P> SharedPhy<P> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Move a PHY into the slot, returning the previous one.
    pub fn install(&self, phy: P) -> Option<P> {
        self.inner.with(|slot| slot.replace(phy))
    }

    /// Move the PHY out of the slot, e.g. before remove.
    pub fn take(&self) -> Option<P> {
        self.inner.with(Option::take)
    }

    /// Whether a PHY is installed.
    pub fn is_installed(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the PHY.
    ///
    /// Returns `None` when the slot is empty.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut P) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Try to execute a closure, returning `None` if the slot is empty or
    /// already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut P) -> R,
    {
        self.inner
            .try_with(|slot| slot.as_mut().map(f))
            .flatten()
    }
}

impl<P> Default for SharedPhy<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::register::RegisterBus;
    use crate::internal::register::usb2::{COMMCTRL_OFFSET, COMMCTRL_OTG_PERI};
    use crate::phy::{GenericPhy, PhyMode, RcarGen3Phy};
    use crate::testing::{MockNode, MockPhy};

    #[test]
    fn empty_slot() {
        let shared: SharedPhy<MockPhy> = SharedPhy::new();
        assert!(!shared.is_installed());
        assert!(shared.with(|phy| phy.init()).is_none());
        assert!(shared.take().is_none());
    }

    #[test]
    fn install_and_drive() {
        let shared = SharedPhy::new();
        assert!(shared.install(RcarGen3Phy::probe(&mut MockNode::rcar_gen3(0)).unwrap()).is_none());

        shared
            .with(|phy: &mut MockPhy| phy.set_mode(PhyMode::UsbDevice, 0))
            .unwrap()
            .unwrap();

        let peri = shared.with(|phy| phy.registers().get(COMMCTRL_OFFSET) & COMMCTRL_OTG_PERI);
        assert_eq!(peri, Some(COMMCTRL_OTG_PERI));
    }

    #[test]
    fn take_empties_slot() {
        let shared = SharedPhy::new();
        shared.install(RcarGen3Phy::probe(&mut MockNode::rcar_gen3(0x40)).unwrap());

        let phy: MockPhy = shared.take().unwrap();
        assert_eq!(phy.registers().base(), 0x40);
        assert!(!shared.is_installed());
        phy.remove().unwrap();
    }

    #[test]
    fn try_with_reentrant_access_fails() {
        let shared: SharedPhy<MockPhy> = SharedPhy::new();
        shared.install(RcarGen3Phy::probe(&mut MockNode::rcar_gen3(0)).unwrap());

        let nested = shared.with(|_| shared.try_with(|phy| phy.exit()));
        assert_eq!(nested, Some(None));
    }
}
