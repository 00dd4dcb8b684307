pub mod generate;
pub mod settings;

use crate::cli::Commands;
use crate::config::AppSettings;
use crate::core::store::ConfyStore;
use crate::models::error::SError;
use crate::utils::bench::BenchClient;
use tracing::{info, warn};

/// Everything a command needs, resolved once from configuration.
pub struct AppContext {
    pub settings: AppSettings,
    pub store: ConfyStore,
    pub bench: BenchClient,
}

impl AppContext {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            store: ConfyStore::new(settings.document_path.clone()),
            bench: BenchClient::new(settings.bench_path.clone(), settings.site.clone()),
            settings,
        }
    }
}

pub async fn route(ctx: &AppContext, command: Commands) -> Result<(), SError> {
    match command {
        Commands::Check { file } => {
            let doc = settings::check(ctx, file.as_deref())?;
            println!("OK: {} app(s) configured", doc.type_settings.len());
            Ok(())
        }
        Commands::Directives { file } => {
            let update = settings::directives(ctx, file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&update)?);
            Ok(())
        }
        Commands::Apps { catalog } => {
            for app in settings::apps(ctx, catalog.as_deref()).await? {
                println!("{app}");
            }
            Ok(())
        }
        Commands::Import { file } => {
            let doc = settings::import(ctx, file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        Commands::Generate { app } => {
            match generate::generate(ctx, app.as_deref()).await? {
                Some(n) => println!("{}: {}", n.title, n.message),
                None => info!("generation finished without a message"),
            }
            Ok(())
        }
        Commands::Bindings { out } => {
            let path = generate::bindings(ctx, out.as_deref())?;
            println!("{path}");
            Ok(())
        }
        Commands::Config => {
            match AppSettings::config_path() {
                Ok(path) => println!("# {}", path.display()),
                Err(e) => warn!("could not resolve config path: {e}"),
            }
            let rendered = toml::to_string_pretty(&ctx.settings).map_err(|e| SError::ParseError(e.to_string()))?;
            println!("{rendered}");
            Ok(())
        }
    }
}
