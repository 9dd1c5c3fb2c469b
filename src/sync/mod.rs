//! Synchronization Support
//!
//! The driver itself does no locking: the device framework serializes calls.
//! When a PHY has to be reached from interrupt context as well (for example
//! an ID-pin change handler re-running OTG role detection), park it in a
//! [`SharedPhy`].
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`] - ISR-safe interior mutability
//! - **Shared Wrappers** (`shared`): [`SharedPhy`] - critical-section protected PHY slot
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module

pub mod primitives;
pub mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedPhy;
