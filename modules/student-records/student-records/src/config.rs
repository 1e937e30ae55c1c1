//! Configuration for the Student Records module.

use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the Student Records module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct StudentRecordsConfig {
    /// Page size used when a listing request omits `limit` or sends an invalid one.
    /// Default: 6
    pub default_page_size: usize,

    /// Upper bound for `limit`.
    /// Default: 100
    pub max_page_size: usize,

    /// Populate the store with the demo records at startup.
    /// Default: true
    pub seed: bool,
}

impl Default for StudentRecordsConfig {
    fn default() -> Self {
        Self {
            default_page_size: 6,
            max_page_size: 100,
            seed: true,
        }
    }
}

impl StudentRecordsConfig {
    /// Checks that page sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_page_size == 0 {
            return Err("max_page_size must be at least 1".to_owned());
        }
        if self.default_page_size == 0 {
            return Err("default_page_size must be at least 1".to_owned());
        }
        if self.default_page_size > self.max_page_size {
            return Err(format!(
                "default_page_size ({}) must not exceed max_page_size ({})",
                self.default_page_size, self.max_page_size
            ));
        }
        Ok(())
    }

    /// Converts this config to the domain service config.
    #[must_use]
    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}
