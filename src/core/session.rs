// src/core/session.rs
use crate::core::catalog::{decode_installed_apps, CatalogTracker, RequestTicket};
use crate::core::controller::SettingsController;
use crate::core::events::{dispatch, FormEvent, FormEventHandler};
use crate::core::remote::{InstalledAppsService, TypeGenerationService};
use crate::core::store::DocumentStore;
use crate::models::directives::{FieldId, FormUpdate};
use crate::models::error::SError;
use crate::models::notification::Notification;
use crate::models::settings::{AppTypeRow, SettingsDocument};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

/// Caller-owned event loop around one settings document.
///
/// Every edit mutates the owned document and then dispatches the matching
/// field-change event against an immutable borrow of it, so handlers never
/// observe a half-applied edit.
pub struct FormSession {
    doc: SettingsDocument,
    controller: SettingsController,
    tracker: CatalogTracker,
}

impl FormSession {
    /// Opens the form. Directives are available immediately; selector
    /// options follow once the catalog arrives.
    pub fn open(doc: SettingsDocument) -> (Self, FormUpdate) {
        let session = Self {
            doc,
            controller: SettingsController::new(),
            tracker: CatalogTracker::new(),
        };
        let update = session.controller.on_load(&session.doc);
        (session, update)
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.doc
    }

    pub fn refresh(&self) -> FormUpdate {
        self.controller.on_refresh(&self.doc)
    }

    fn changed(&self, field: FieldId) -> FormUpdate {
        self.controller.on_field_change(field, &self.doc)
    }

    fn row_mut(&mut self, idx: u32) -> Result<&mut AppTypeRow, SError> {
        idx.checked_sub(1)
            .and_then(|i| self.doc.type_settings.get_mut(i as usize))
            .ok_or(SError::RowOutOfRange(idx))
    }

    pub fn set_export_to_root(&mut self, value: bool) -> FormUpdate {
        self.doc.export_to_root = value;
        self.changed(FieldId::ExportToRoot)
    }

    pub fn set_root_output_path(&mut self, path: impl Into<String>) -> FormUpdate {
        self.doc.root_output_path = path.into();
        self.changed(FieldId::RootOutputPath)
    }

    /// Appends an empty row and returns its `idx`.
    pub fn add_row(&mut self) -> (u32, FormUpdate) {
        self.doc.type_settings.push(AppTypeRow::default());
        let idx = self.doc.type_settings.len() as u32;
        (idx, self.changed(FieldId::TypeSettings))
    }

    pub fn remove_row(&mut self, idx: u32) -> Result<FormUpdate, SError> {
        self.row_mut(idx)?;
        self.doc.type_settings.remove(idx as usize - 1);
        Ok(self.changed(FieldId::TypeSettings))
    }

    pub fn set_row_app_name(&mut self, idx: u32, app_name: impl Into<String>) -> Result<FormUpdate, SError> {
        self.row_mut(idx)?.app_name = app_name.into();
        Ok(self.changed(FieldId::AppName))
    }

    pub fn set_row_app_path(&mut self, idx: u32, app_path: impl Into<String>) -> Result<FormUpdate, SError> {
        self.row_mut(idx)?.app_path = app_path.into();
        Ok(self.changed(FieldId::AppPath))
    }

    pub fn begin_catalog_request(&mut self) -> RequestTicket {
        self.tracker.begin()
    }

    /// Applies a catalog response unless a newer request has superseded it.
    /// Returns the selector update, or an empty update for stale responses.
    pub fn catalog_loaded(&mut self, ticket: RequestTicket, payload: &Value) -> Result<FormUpdate, SError> {
        if !self.tracker.is_current(ticket) {
            warn!("dropping superseded catalog response");
            return Ok(FormUpdate::default());
        }

        let apps = decode_installed_apps(payload)?;
        self.tracker.accept(ticket);

        self.controller.set_catalog(apps);
        Ok(FormUpdate {
            directives: None,
            app_options: self.controller.selectable_apps(&self.doc),
        })
    }

    #[instrument(skip_all)]
    pub async fn refresh_catalog(&mut self, service: &dyn InstalledAppsService) -> Result<FormUpdate, SError> {
        let ticket = self.begin_catalog_request();
        let payload = service.installed_apps().await?;
        self.catalog_loaded(ticket, &payload)
    }

    /// Validates unconditionally, then hands the document to the store.
    #[instrument(skip_all)]
    pub fn save(&self, store: &dyn DocumentStore) -> Result<(), SError> {
        if let Err(e) = dispatch(&self.controller, FormEvent::Validate, &self.doc) {
            error!(row = e.row_index, "save blocked: {}", e.message);
            return Err(e.into());
        }
        store.save(&self.doc)
    }

    #[instrument(skip_all)]
    pub async fn generate_all(&self, service: &dyn TypeGenerationService) -> Result<Option<Notification>, SError> {
        info!(apps = self.doc.type_settings.len(), "generating types for all apps");
        let message = service.generate_all().await?;
        Ok(message.map(Notification::success))
    }

    #[instrument(skip(self, service))]
    pub async fn generate_app(
        &self,
        service: &dyn TypeGenerationService,
        app_name: &str,
    ) -> Result<Option<Notification>, SError> {
        if !self.doc.has_app(app_name) {
            return Err(SError::UnknownApp(app_name.to_string()));
        }
        let message = service.generate_for_app(app_name).await?;
        Ok(message.map(Notification::success))
    }
}
