//! Network URL constants and environment selection for the HeyCar SDK.

use std::fmt;

/// Base URL of the HeyCar test environment.
pub const DEV_URL: &str = "http://test-now.heycars.cn/api";

/// Base URL of the HeyCar production environment.
pub const PROD_URL: &str = "http://now.heycars.cn/api";

/// Which HeyCar deployment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// The test deployment at [`DEV_URL`].
    Development,
    /// The live deployment at [`PROD_URL`].
    #[default]
    Production,
}

impl Environment {
    pub fn from_dev_flag(is_dev: bool) -> Self {
        if is_dev {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// The fixed base URL for this environment. Endpoint paths are appended as-is.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Development => DEV_URL,
            Self::Production => PROD_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
