mod common;

use common::{catalog, doc};
use type_gen_settings_lib::core::controller::{
    compute_selectable_apps, on_export_to_root_changed, on_load_or_refresh, validate_before_save,
    SettingsController, APP_PATH_REQUIRED,
};
use type_gen_settings_lib::core::events::{dispatch, FormEvent};
use type_gen_settings_lib::models::directives::FieldId;
use type_gen_settings_lib::models::settings::FormMode;

#[test]
fn test_mode_consistency_for_both_flag_values() {
    for flag in [false, true] {
        let d = doc(flag, &[("frappe", "src"), ("crm", "")]);
        let directives = on_export_to_root_changed(&d);

        assert_eq!(directives.root_output_path.enabled, flag);
        assert_eq!(directives.app_path.enabled, !flag);
        assert_eq!(directives.app_path.required, !flag);
        assert_eq!(directives.app_path.enabled, directives.app_path.required);
    }
}

#[test]
fn test_repeated_toggles_converge() {
    let mut d = doc(false, &[("frappe", "src")]);
    for _ in 0..5 {
        d.export_to_root = !d.export_to_root;
        let _ = on_export_to_root_changed(&d);
    }
    // odd number of flips: root mode
    assert_eq!(d.mode(), FormMode::Root);
    assert_eq!(on_export_to_root_changed(&d), on_load_or_refresh(&doc(true, &[])));
}

#[test]
fn test_selector_excludes_configured_apps_and_keeps_catalog_order() {
    let cat = catalog(&["frappe", "erpnext", "crm", "hrms"]);
    let rows = doc(false, &[("crm", "src"), ("frappe", "")]).type_settings;

    let selectable = compute_selectable_apps(&cat, &rows);

    assert_eq!(selectable, catalog(&["erpnext", "hrms"]));
    assert!(selectable.iter().all(|app| cat.contains(app)));
    assert!(selectable
        .iter()
        .all(|app| rows.iter().all(|r| &r.app_name != app)));
}

#[test]
fn test_selector_ignores_rows_outside_catalog() {
    let cat = catalog(&["frappe"]);
    let rows = doc(false, &[("legacy_app", "src")]).type_settings;
    assert_eq!(compute_selectable_apps(&cat, &rows), cat);
    assert!(compute_selectable_apps(&[], &rows).is_empty());
}

#[test]
fn test_validation_reports_first_offending_row() {
    let d = doc(false, &[("frappe", "src"), ("erpnext", "")]);
    let err = validate_before_save(&d).unwrap_err();

    assert_eq!(err.row_index, 2);
    assert_eq!(err.message, APP_PATH_REQUIRED);
}

#[test]
fn test_validation_is_fail_fast() {
    let d = doc(false, &[("frappe", ""), ("erpnext", "")]);
    assert_eq!(validate_before_save(&d).unwrap_err().row_index, 1);
}

#[test]
fn test_root_mode_skips_app_path_check() {
    let d = doc(true, &[("frappe", "")]);
    assert!(validate_before_save(&d).is_ok());
}

#[test]
fn test_load_directives_are_idempotent() {
    let d = doc(true, &[("frappe", "")]);
    assert_eq!(on_load_or_refresh(&d), on_load_or_refresh(&d));

    let controller = SettingsController::new();
    let first = dispatch(&controller, FormEvent::Refresh, &d).unwrap();
    let second = dispatch(&controller, FormEvent::Refresh, &d).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dispatch_routes_field_changes() {
    let mut controller = SettingsController::new();
    controller.set_catalog(catalog(&["frappe", "crm"]));
    let d = doc(false, &[("frappe", "src")]);

    let update = dispatch(&controller, FormEvent::FieldChanged(FieldId::ExportToRoot), &d).unwrap();
    assert!(update.directives.is_some());
    assert!(update.app_options.is_none());

    let update = dispatch(&controller, FormEvent::FieldChanged(FieldId::TypeSettings), &d).unwrap();
    assert!(update.directives.is_none());
    assert_eq!(update.app_options, Some(catalog(&["crm"])));

    let update = dispatch(&controller, FormEvent::FieldChanged(FieldId::AppPath), &d).unwrap();
    assert!(update.is_empty());
}

#[test]
fn test_dispatch_validate_surfaces_error() {
    let controller = SettingsController::new();
    let d = doc(false, &[("frappe", "")]);
    let err = dispatch(&controller, FormEvent::Validate, &d).unwrap_err();
    assert_eq!(err.row_index, 1);
    assert!(err.to_string().to_lowercase().contains("app path is required"));
}
