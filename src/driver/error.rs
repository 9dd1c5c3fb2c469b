//! Error types for the R-Car Gen3 USB2 PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Hardware description, mode selection and registration failures
//! - [`ResourceError`]: Failures reported by clock, regulator and GPIO providers
//!
//! The unified [`Error`] enum wraps both and records which collaborator a
//! [`ResourceError`] came from. Collaborator errors are passed through
//! unchanged.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and binding errors
///
/// These errors belong to the invalid-argument class: the request or the
/// hardware description cannot be honoured, and nothing was programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hardware description has no usable register window
    MissingRegisterBase,
    /// PHY mode not supported by this PHY
    UnsupportedMode,
    /// No registered driver matches the device
    NoMatchingDriver,
    /// Driver registry has no free slot
    RegistryFull,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::MissingRegisterBase => "missing register base address",
            ConfigError::UnsupportedMode => "unsupported PHY mode",
            ConfigError::NoMatchingDriver => "no matching driver",
            ConfigError::RegistryFull => "driver registry full",
        }
    }
}

// =============================================================================
// Resource Errors
// =============================================================================

/// Errors reported by external providers (clock, regulator, GPIO)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// Resource is not described for this device
    NotFound,
    /// Resource is in use or not ready
    Busy,
    /// Provider did not respond in time
    Timeout,
    /// Hardware access failed
    Io,
    /// Operation not supported by the provider
    Unsupported,
}

impl core::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResourceError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceError::NotFound => "not found",
            ResourceError::Busy => "busy",
            ResourceError::Timeout => "timed out",
            ResourceError::Io => "I/O error",
            ResourceError::Unsupported => "not supported",
        }
    }

    /// Negative errno value for this error
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self {
            ResourceError::NotFound => -errno::ENOENT,
            ResourceError::Busy => -errno::EBUSY,
            ResourceError::Timeout => -errno::ETIMEDOUT,
            ResourceError::Io => -errno::EIO,
            ResourceError::Unsupported => -errno::ENOSYS,
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match phy.power_on() {
///     Err(Error::Regulator(ResourceError::Timeout)) => { /* VBUS did not come up */ }
///     Err(Error::Config(ConfigError::UnsupportedMode)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Clock provider error
    Clock(ResourceError),
    /// Regulator provider error
    Regulator(ResourceError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Clock(e) => write!(f, "clock: {}", e.as_str()),
            Error::Regulator(e) => write!(f, "regulator: {}", e.as_str()),
        }
    }
}

impl Error {
    /// Negative errno value, for framework glue that expects integer returns
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self {
            Error::Config(ConfigError::MissingRegisterBase | ConfigError::UnsupportedMode) => {
                -errno::EINVAL
            }
            Error::Config(ConfigError::NoMatchingDriver) => -errno::ENODEV,
            Error::Config(ConfigError::RegistryFull) => -errno::ENOMEM,
            Error::Clock(e) | Error::Regulator(e) => e.errno(),
        }
    }

    /// Whether the error belongs to the invalid-argument class
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        self.errno() == -errno::EINVAL
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Result type alias for PHY operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for provider operations
pub type ResourceResult<T> = core::result::Result<T, ResourceError>;

/// errno values used by [`Error::errno`]
pub mod errno {
    /// No such file or directory
    pub const ENOENT: i32 = 2;
    /// I/O error
    pub const EIO: i32 = 5;
    /// Out of memory
    pub const ENOMEM: i32 = 12;
    /// Device or resource busy
    pub const EBUSY: i32 = 16;
    /// No such device
    pub const ENODEV: i32 = 19;
    /// Invalid argument
    pub const EINVAL: i32 = 22;
    /// Function not implemented
    pub const ENOSYS: i32 = 38;
    /// Connection timed out
    pub const ETIMEDOUT: i32 = 110;
}

// =============================================================================
// Unit Tests
// =============================================================================
