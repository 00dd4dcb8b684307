// src/core/bindings.rs
use crate::models::directives::{FieldDirectives, FieldId, FieldState, FormUpdate};
use crate::models::error::{SError, ValidationError};
use crate::models::notification::{Indicator, Notification};
use crate::models::settings::{AppTypeRow, FormMode, SettingsDocument};
use camino::Utf8Path;
use specta::TypeCollection;
use specta_typescript::Typescript;
use tracing::info;

/// Every type the form renderer exchanges with the controller.
pub fn collect_types() -> TypeCollection {
    let mut types = TypeCollection::default();
    types
        .register::<SettingsDocument>()
        .register::<AppTypeRow>()
        .register::<FormMode>()
        .register::<FieldId>()
        .register::<FieldState>()
        .register::<FieldDirectives>()
        .register::<FormUpdate>()
        .register::<ValidationError>()
        .register::<Indicator>()
        .register::<Notification>()
        .register::<SError>();
    types
}

/// Writes TypeScript declarations for the frontend to `path`.
pub fn export_bindings(path: &Utf8Path) -> Result<(), SError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    Typescript::default()
        .export_to(path, &collect_types())
        .map_err(|e| SError::Bindings(e.to_string()))?;

    info!(%path, "typescript bindings exported");
    Ok(())
}
