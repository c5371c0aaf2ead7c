//! Storage disk configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
///
/// Maps symbolic disk names to backend settings. A download link references
/// its backend only through one of these names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Configured disks, keyed by symbolic name.
    #[serde(default)]
    pub disks: HashMap<String, DiskConfig>,
}

/// Settings for a single storage disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Provider type for this disk (currently only `"local"`).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root path for local filesystem disks.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            root_path: default_root_path(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_root_path() -> String {
    "./data/storage/local".to_string()
}
