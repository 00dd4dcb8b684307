#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use type_gen_settings_lib::core::remote::{InstalledAppsService, TypeGenerationService};
use type_gen_settings_lib::models::error::SError;
use type_gen_settings_lib::models::settings::{AppTypeRow, SettingsDocument};

/// Builds a document from `(app_name, app_path)` pairs.
pub fn doc(export_to_root: bool, rows: &[(&str, &str)]) -> SettingsDocument {
    SettingsDocument {
        export_to_root,
        root_output_path: String::new(),
        type_settings: rows
            .iter()
            .map(|(name, path)| AppTypeRow::new(*name, *path))
            .collect(),
    }
}

pub fn catalog(apps: &[&str]) -> Vec<String> {
    apps.iter().map(|a| a.to_string()).collect()
}

/// Answers with the host's JSON-encoded string payload.
pub struct FakeApps {
    pub apps: Vec<String>,
}

impl FakeApps {
    pub fn new(apps: &[&str]) -> Self {
        Self { apps: catalog(apps) }
    }

    pub fn payload(&self) -> Value {
        Value::String(serde_json::to_string(&self.apps).unwrap())
    }
}

#[async_trait]
impl InstalledAppsService for FakeApps {
    async fn installed_apps(&self) -> Result<Value, SError> {
        Ok(self.payload())
    }
}

/// Records every generate call.
#[derive(Default)]
pub struct FakeGenerator {
    pub calls: Mutex<Vec<Option<String>>>,
    pub message: Option<String>,
}

impl FakeGenerator {
    pub fn replying(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            message: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl TypeGenerationService for FakeGenerator {
    async fn generate_all(&self) -> Result<Option<String>, SError> {
        self.calls.lock().push(None);
        Ok(self.message.clone())
    }

    async fn generate_for_app(&self, app_name: &str) -> Result<Option<String>, SError> {
        self.calls.lock().push(Some(app_name.to_string()));
        Ok(self.message.clone())
    }
}
