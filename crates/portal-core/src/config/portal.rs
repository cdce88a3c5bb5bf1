//! Portal creation configuration.

use serde::{Deserialize, Serialize};

/// Portal creation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Upper bound on suffixed slug candidates probed when the bare slug
    /// collides. Exhausting the bound is treated as an internal error.
    #[serde(default = "default_slug_max_attempts")]
    pub slug_max_attempts: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            slug_max_attempts: default_slug_max_attempts(),
        }
    }
}

fn default_slug_max_attempts() -> u32 {
    100
}
