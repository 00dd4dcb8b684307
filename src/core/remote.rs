// src/core/remote.rs
use crate::models::error::SError;
use async_trait::async_trait;
use serde_json::Value;

/// Source of the installed-applications catalog.
#[async_trait]
pub trait InstalledAppsService: Send + Sync {
    /// Raw payload; see `catalog::decode_installed_apps`.
    async fn installed_apps(&self) -> Result<Value, SError>;
}

/// Server-side type generation. Responses are human readable messages, if any.
#[async_trait]
pub trait TypeGenerationService: Send + Sync {
    async fn generate_all(&self) -> Result<Option<String>, SError>;

    async fn generate_for_app(&self, app_name: &str) -> Result<Option<String>, SError>;
}
