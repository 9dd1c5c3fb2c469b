//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`register`]: Register window abstraction and the USB2.0 PHY register map
//! - [`constants`]: Timing values, driver identity and lookup names

pub(crate) mod constants;
pub(crate) mod register;
