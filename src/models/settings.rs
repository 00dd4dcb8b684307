// src/models/settings.rs
use serde::{Deserialize, Deserializer, Serialize};
use specta::Type;

/// Identifier of an installed application, as reported by the host.
pub type AppId = String;

/// One configured application inside the settings document.
/// Rows have no identity of their own; `idx` is their 1-based position.
#[derive(Serialize, Deserialize, Type, Clone, Debug, Default, PartialEq, Eq)]
pub struct AppTypeRow {
    #[serde(default)]
    pub app_name: AppId,
    #[serde(default)]
    pub app_path: String,
}

impl AppTypeRow {
    pub fn new(app_name: impl Into<AppId>, app_path: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_path: app_path.into(),
        }
    }
}

/// The singleton "Type Generation Settings" document.
#[derive(Serialize, Deserialize, Type, Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDocument {
    #[serde(default, deserialize_with = "check_flag")]
    pub export_to_root: bool,
    #[serde(default)]
    pub root_output_path: String,
    #[serde(default)]
    pub type_settings: Vec<AppTypeRow>,
}

/// The two reachable configurations of a document.
#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Output goes to `root_output_path`; per-app paths are disabled.
    Root,
    /// Every row carries its own required `app_path`.
    PerApp,
}

impl SettingsDocument {
    pub fn mode(&self) -> FormMode {
        if self.export_to_root {
            FormMode::Root
        } else {
            FormMode::PerApp
        }
    }

    /// Rows paired with their 1-based `idx`.
    pub fn indexed_rows(&self) -> impl Iterator<Item = (u32, &AppTypeRow)> {
        (1u32..).zip(self.type_settings.iter())
    }

    pub fn has_app(&self, app_name: &str) -> bool {
        self.type_settings.iter().any(|row| row.app_name == app_name)
    }
}

/// Check fields arrive from the host as `0`/`1` as often as `true`/`false`.
pub(crate) fn check_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "check field must be 0 or 1, got {other}"
        ))),
    }
}
