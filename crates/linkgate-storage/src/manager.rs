//! Disk manager — routes operations to the correct provider by disk name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use linkgate_core::config::storage::StorageConfig;
use linkgate_core::error::AppError;
use linkgate_core::result::AppResult;
use linkgate_core::traits::storage::StorageProvider;

use crate::providers::LocalDiskProvider;

/// Registry of configured storage disks.
///
/// Built once from [`StorageConfig`] at startup; answers whether a disk
/// name is configured and resolves it to its provider.
#[derive(Debug, Clone, Default)]
pub struct DiskManager {
    /// Map of disk name → provider instance.
    disks: HashMap<String, Arc<dyn StorageProvider>>,
}

impl DiskManager {
    /// Create a new empty disk manager.
    pub fn new() -> Self {
        Self {
            disks: HashMap::new(),
        }
    }

    /// Build a manager from configuration, instantiating one provider
    /// per configured disk.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let mut manager = Self::new();
        for (name, disk) in &config.disks {
            match disk.provider.as_str() {
                "local" => {
                    let provider = LocalDiskProvider::new(&disk.root_path).await?;
                    manager.register(name, Arc::new(provider));
                }
                other => {
                    return Err(AppError::invalid_configuration(format!(
                        "Unknown storage provider type: {other}"
                    )));
                }
            }
        }
        info!(disks = manager.disks.len(), "Storage disks initialized");
        Ok(manager)
    }

    /// Register a provider under a disk name.
    pub fn register(&mut self, name: &str, provider: Arc<dyn StorageProvider>) {
        self.disks.insert(name.to_string(), provider);
    }

    /// Check whether a disk name is configured.
    pub fn contains(&self, name: &str) -> bool {
        self.disks.contains_key(name)
    }

    /// Get a provider by disk name.
    pub fn get(&self, name: &str) -> AppResult<Arc<dyn StorageProvider>> {
        self.disks
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::invalid_configuration("Disk is NOT valid!"))
    }

    /// List all configured disk names.
    pub fn names(&self) -> Vec<&str> {
        self.disks.keys().map(String::as_str).collect()
    }
}
