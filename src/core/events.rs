// src/core/events.rs
use crate::core::controller::{self, SettingsController};
use crate::models::directives::{FieldId, FormUpdate};
use crate::models::error::ValidationError;
use crate::models::settings::SettingsDocument;
use tracing::trace;

/// Lifecycle events delivered by the form runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Load,
    Refresh,
    FieldChanged(FieldId),
    Validate,
}

/// One method per lifecycle event. Handlers see an immutable snapshot
/// and answer with a delta for the renderer.
pub trait FormEventHandler {
    fn on_load(&self, doc: &SettingsDocument) -> FormUpdate;

    fn on_refresh(&self, doc: &SettingsDocument) -> FormUpdate {
        self.on_load(doc)
    }

    fn on_field_change(&self, field: FieldId, doc: &SettingsDocument) -> FormUpdate;

    fn on_validate(&self, doc: &SettingsDocument) -> Result<(), ValidationError>;
}

/// Routes one event to the matching handler method.
pub fn dispatch<H: FormEventHandler + ?Sized>(
    handler: &H,
    event: FormEvent,
    doc: &SettingsDocument,
) -> Result<FormUpdate, ValidationError> {
    trace!(?event, "dispatching form event");
    match event {
        FormEvent::Load => Ok(handler.on_load(doc)),
        FormEvent::Refresh => Ok(handler.on_refresh(doc)),
        FormEvent::FieldChanged(field) => Ok(handler.on_field_change(field, doc)),
        FormEvent::Validate => handler.on_validate(doc).map(|_| FormUpdate::default()),
    }
}

impl FormEventHandler for SettingsController {
    fn on_load(&self, doc: &SettingsDocument) -> FormUpdate {
        FormUpdate {
            directives: Some(controller::on_load_or_refresh(doc)),
            app_options: self.selectable_apps(doc),
        }
    }

    fn on_field_change(&self, field: FieldId, doc: &SettingsDocument) -> FormUpdate {
        match field {
            FieldId::ExportToRoot => FormUpdate {
                directives: Some(controller::on_export_to_root_changed(doc)),
                app_options: None,
            },
            FieldId::TypeSettings | FieldId::AppName => FormUpdate {
                directives: None,
                app_options: self.selectable_apps(doc),
            },
            FieldId::RootOutputPath | FieldId::AppPath => FormUpdate::default(),
        }
    }

    fn on_validate(&self, doc: &SettingsDocument) -> Result<(), ValidationError> {
        controller::validate_before_save(doc)
    }
}
