// src/core/controller.rs
use crate::models::directives::{FieldDirectives, FieldState};
use crate::models::error::ValidationError;
use crate::models::settings::{AppId, AppTypeRow, SettingsDocument};
use std::collections::HashSet;
use tracing::debug;

pub const APP_PATH_REQUIRED: &str = "App Path is required when Export to Root is disabled";
pub const APP_NAME_REQUIRED: &str = "App Name is required";

/// Field enablement for the current document. Depends only on `export_to_root`.
pub fn on_load_or_refresh(doc: &SettingsDocument) -> FieldDirectives {
    let per_app = !doc.export_to_root;
    FieldDirectives {
        root_output_path: FieldState {
            enabled: doc.export_to_root,
            required: false,
        },
        app_path: FieldState {
            enabled: per_app,
            required: per_app,
        },
    }
}

/// Re-derived from scratch on every toggle, so repeated flips always converge.
pub fn on_export_to_root_changed(doc: &SettingsDocument) -> FieldDirectives {
    on_load_or_refresh(doc)
}

/// The catalog, in its own order, minus every app already configured in `rows`.
pub fn compute_selectable_apps(catalog: &[AppId], rows: &[AppTypeRow]) -> Vec<AppId> {
    let taken: HashSet<&str> = rows.iter().map(|r| r.app_name.as_str()).collect();
    catalog
        .iter()
        .filter(|app| !taken.contains(app.as_str()))
        .cloned()
        .collect()
}

/// Gate for persistence. Reports the first offending row only.
pub fn validate_before_save(doc: &SettingsDocument) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (idx, row) in doc.indexed_rows() {
        if row.app_name.is_empty() {
            return Err(ValidationError::new(idx, APP_NAME_REQUIRED));
        }
        if !seen.insert(row.app_name.as_str()) {
            return Err(ValidationError::new(
                idx,
                format!("App {} is already configured", row.app_name),
            ));
        }
        if !doc.export_to_root && row.app_path.is_empty() {
            debug!(row = idx, app = %row.app_name, "missing app path");
            return Err(ValidationError::new(idx, APP_PATH_REQUIRED));
        }
    }

    Ok(())
}

/// Stateful face of the controller: remembers the last accepted catalog so
/// selector options can be derived on later events.
#[derive(Debug, Default, Clone)]
pub struct SettingsController {
    catalog: Option<Vec<AppId>>,
}

impl SettingsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog(&mut self, catalog: Vec<AppId>) {
        self.catalog = Some(catalog);
    }

    /// `None` until the catalog has arrived.
    pub fn selectable_apps(&self, doc: &SettingsDocument) -> Option<Vec<AppId>> {
        self.catalog
            .as_deref()
            .map(|catalog| compute_selectable_apps(catalog, &doc.type_settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(export_to_root: bool, rows: &[(&str, &str)]) -> SettingsDocument {
        SettingsDocument {
            export_to_root,
            root_output_path: String::new(),
            type_settings: rows.iter().map(|(n, p)| AppTypeRow::new(*n, *p)).collect(),
        }
    }

    #[test]
    fn empty_document_is_valid_in_both_modes() {
        assert!(validate_before_save(&doc(false, &[])).is_ok());
        assert!(validate_before_save(&doc(true, &[])).is_ok());
    }

    #[test]
    fn empty_app_name_is_rejected_before_path() {
        let err = validate_before_save(&doc(false, &[("", "")])).unwrap_err();
        assert_eq!(err, ValidationError::new(1, APP_NAME_REQUIRED));
    }

    #[test]
    fn duplicate_app_is_rejected_in_root_mode_too() {
        let err = validate_before_save(&doc(true, &[("crm", ""), ("crm", "")])).unwrap_err();
        assert_eq!(err.row_index, 2);
        assert_eq!(err.message, "App crm is already configured");
    }

    #[test]
    fn selectable_apps_wait_for_catalog() {
        let mut controller = SettingsController::new();
        let d = doc(false, &[("frappe", "src")]);
        assert_eq!(controller.selectable_apps(&d), None);

        controller.set_catalog(vec!["frappe".into(), "crm".into()]);
        assert_eq!(controller.selectable_apps(&d), Some(vec!["crm".to_string()]));
    }
}
