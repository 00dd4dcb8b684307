// src/core/seed.rs
use crate::core::controller::validate_before_save;
use crate::core::store::DocumentStore;
use crate::models::error::SError;
use crate::models::settings::{check_flag, AppTypeRow, SettingsDocument};
use crate::utils::json::Json;
use camino::Utf8Path;
use serde::Deserialize;
use tracing::{info, instrument};

/// Keys a seed file may set. Absent keys leave the stored value alone.
#[derive(Deserialize, Debug, Default)]
pub struct SettingsSeed {
    #[serde(default, deserialize_with = "optional_flag")]
    pub export_to_root: Option<bool>,
    pub root_output_path: Option<String>,
    pub type_settings: Option<Vec<AppTypeRow>>,
}

fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    check_flag(deserializer).map(Some)
}

impl SettingsSeed {
    pub fn apply_to(self, doc: &mut SettingsDocument) {
        if let Some(flag) = self.export_to_root {
            doc.export_to_root = flag;
        }
        if let Some(path) = self.root_output_path {
            doc.root_output_path = path;
        }
        if let Some(rows) = self.type_settings {
            doc.type_settings = rows;
        }
    }
}

/// Overlays a JSON seed onto the stored document and saves it if valid.
#[instrument(skip(store))]
pub fn import_seed(path: &Utf8Path, store: &dyn DocumentStore) -> Result<SettingsDocument, SError> {
    let seed: SettingsSeed = Json::read(path)?;
    let mut doc = store.load()?;
    seed.apply_to(&mut doc);

    validate_before_save(&doc)?;
    store.save(&doc)?;

    info!(rows = doc.type_settings.len(), export_to_root = doc.export_to_root, "seed imported");
    Ok(doc)
}
