//! Deployment mode gating operator-only endpoints.

use std::fmt;

/// Deployment mode chosen once at startup.
///
/// Only [`Platform::Development`] permits the destructive admin reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Local development; enables the admin reset endpoint.
    Development,
    /// Any other deployment.
    Production,
}

impl Platform {
    /// Configuration value selecting [`Platform::Development`].
    pub const DEVELOPMENT_SETTING: &'static str = "dev";

    /// Map a configuration value to a platform.
    ///
    /// `"dev"` selects development; every other value (including different
    /// letter case) selects production.
    ///
    /// # Examples
    /// ```
    /// use chirpy::domain::Platform;
    ///
    /// assert_eq!(Platform::from_setting("dev"), Platform::Development);
    /// assert_eq!(Platform::from_setting("prod"), Platform::Production);
    /// ```
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        if value == Self::DEVELOPMENT_SETTING {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Whether the admin reset endpoint is available.
    #[must_use]
    pub fn allows_reset(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("dev"),
            Self::Production => f.write_str("production"),
        }
    }
}
