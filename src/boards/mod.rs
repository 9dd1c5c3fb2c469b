//! SoC-specific PHY layouts.
//!
//! # Supported SoCs
//!
//! - R-Car H3 (R8A7795)

#[cfg(feature = "r8a7795")]
#[cfg_attr(docsrs, doc(cfg(feature = "r8a7795")))]
pub mod r8a7795;
