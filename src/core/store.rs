// src/core/store.rs
use crate::models::error::SError;
use crate::models::settings::SettingsDocument;
use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Persistence boundary for the settings document.
pub trait DocumentStore {
    fn load(&self) -> Result<SettingsDocument, SError>;

    fn save(&self, doc: &SettingsDocument) -> Result<(), SError>;
}

/// TOML file managed by confy. A missing file loads as the default document.
pub struct ConfyStore {
    path: Utf8PathBuf,
}

impl ConfyStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl DocumentStore for ConfyStore {
    fn load(&self) -> Result<SettingsDocument, SError> {
        debug!(path = %self.path, "loading settings document");
        Ok(confy::load_path(&self.path)?)
    }

    fn save(&self, doc: &SettingsDocument) -> Result<(), SError> {
        confy::store_path(&self.path, doc)?;
        info!(path = %self.path, rows = doc.type_settings.len(), "settings document saved");
        Ok(())
    }
}

/// In-process store, used for dry runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<Option<SettingsDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: SettingsDocument) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
        }
    }

    /// Last saved document, `None` if nothing was ever stored.
    pub fn saved(&self) -> Option<SettingsDocument> {
        self.doc.lock().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<SettingsDocument, SError> {
        Ok(self.doc.lock().clone().unwrap_or_default())
    }

    fn save(&self, doc: &SettingsDocument) -> Result<(), SError> {
        *self.doc.lock() = Some(doc.clone());
        Ok(())
    }
}
