use crate::commands::AppContext;
use crate::core::bindings::export_bindings;
use crate::core::session::FormSession;
use crate::core::store::DocumentStore;
use crate::models::error::SError;
use crate::models::notification::Notification;
use camino::{Utf8Path, Utf8PathBuf};

pub async fn generate(ctx: &AppContext, app: Option<&str>) -> Result<Option<Notification>, SError> {
    let (session, _) = FormSession::open(ctx.store.load()?);

    match app {
        Some(app) => session.generate_app(&ctx.bench, app).await,
        None => session.generate_all(&ctx.bench).await,
    }
}

/// Returns the path the bindings were written to.
pub fn bindings(ctx: &AppContext, out: Option<&Utf8Path>) -> Result<Utf8PathBuf, SError> {
    let path = out.unwrap_or(ctx.settings.bindings_path.as_path());
    export_bindings(path)?;
    Ok(path.to_owned())
}
