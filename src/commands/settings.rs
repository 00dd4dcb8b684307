use crate::commands::AppContext;
use crate::core::controller::validate_before_save;
use crate::core::remote::InstalledAppsService;
use crate::core::seed::import_seed;
use crate::core::session::FormSession;
use crate::core::store::DocumentStore;
use crate::models::directives::FormUpdate;
use crate::models::error::SError;
use crate::models::settings::{AppId, SettingsDocument};
use crate::utils::json::Json;
use camino::Utf8Path;
use serde_json::Value;
use tracing::{info, instrument};

fn load_document(ctx: &AppContext, file: Option<&Utf8Path>) -> Result<SettingsDocument, SError> {
    match file {
        Some(path) => Json::read(path),
        None => ctx.store.load(),
    }
}

/// Returns the validated document.
#[instrument(skip(ctx))]
pub fn check(ctx: &AppContext, file: Option<&Utf8Path>) -> Result<SettingsDocument, SError> {
    let doc = load_document(ctx, file)?;
    validate_before_save(&doc)?;
    Ok(doc)
}

pub fn directives(ctx: &AppContext, file: Option<&Utf8Path>) -> Result<FormUpdate, SError> {
    let doc = load_document(ctx, file)?;
    let (_, update) = FormSession::open(doc);
    Ok(update)
}

/// Installed apps not yet configured in the stored document.
#[instrument(skip(ctx))]
pub async fn apps(ctx: &AppContext, catalog: Option<&Utf8Path>) -> Result<Vec<AppId>, SError> {
    let (mut session, _) = FormSession::open(ctx.store.load()?);

    let update = match catalog {
        Some(path) => {
            let payload: Value = Json::read(path)?;
            let ticket = session.begin_catalog_request();
            session.catalog_loaded(ticket, &payload)?
        }
        None => {
            let service: &dyn InstalledAppsService = &ctx.bench;
            session.refresh_catalog(service).await?
        }
    };

    Ok(update.app_options.unwrap_or_default())
}

pub fn import(ctx: &AppContext, file: Option<&Utf8Path>) -> Result<SettingsDocument, SError> {
    let path = file.unwrap_or(ctx.settings.seed_path.as_path());
    let doc = import_seed(path, &ctx.store)?;
    info!(store = %ctx.store.path(), "settings imported");
    Ok(doc)
}
