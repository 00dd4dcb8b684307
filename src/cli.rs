//! Command-line arguments.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "type-gen-settings")]
#[command(about = "Manage per-app type generation settings for a bench site")]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, env = "TYPE_GEN_SETTINGS_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    /// Override the configured site
    #[arg(long)]
    pub site: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the settings document
    Check {
        /// Validate a JSON document instead of the stored one
        #[arg(long)]
        file: Option<Utf8PathBuf>,
    },

    /// Print field directives for the settings document
    Directives {
        #[arg(long)]
        file: Option<Utf8PathBuf>,
    },

    /// List installed apps that are not configured yet
    Apps {
        /// Read the installed-apps payload from a file instead of bench
        #[arg(long)]
        catalog: Option<Utf8PathBuf>,
    },

    /// Import settings from a JSON seed file
    Import {
        /// Defaults to the configured seed path
        #[arg(long)]
        file: Option<Utf8PathBuf>,
    },

    /// Generate types for every configured app, or for one
    Generate {
        #[arg(long)]
        app: Option<String>,
    },

    /// Export TypeScript bindings for the settings form
    Bindings {
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Show the active configuration
    Config,
}
