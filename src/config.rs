/// Startup configuration
use crate::backend::{LocalStorage, NullStorage, StorageBackend};
use crate::error::Result;

/// Build-time flag enabling persistence (inlined when the wasm is built)
pub const ENABLE_LOCAL_STORAGE_VAR: &str = "APP_ENABLE_LOCAL_STORAGE";

pub const DEFAULT_MOUNT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub enable_local_storage: bool,
    pub mount_id: String,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_flag(option_env!("APP_ENABLE_LOCAL_STORAGE"))
    }

    /// Only the exact string "true" enables persistence
    pub fn from_flag(flag: Option<&str>) -> Self {
        ShellConfig {
            enable_local_storage: flag == Some("true"),
            ..Self::default()
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            enable_local_storage: false,
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

pub fn select_backend(config: &ShellConfig) -> Result<Box<dyn StorageBackend>> {
    if config.enable_local_storage {
        log::info!("Persisting URLs to localStorage");
        Ok(Box::new(LocalStorage::new()?))
    } else {
        log::info!("{} is not \"true\"; URLs will not be persisted", ENABLE_LOCAL_STORAGE_VAR);
        Ok(Box::new(NullStorage))
    }
}
