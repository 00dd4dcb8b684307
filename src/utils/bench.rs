// src/utils/bench.rs
use crate::core::remote::{InstalledAppsService, TypeGenerationService};
use crate::models::error::SError;
use async_trait::async_trait;
use camino::Utf8PathBuf;
use serde_json::{json, Value};
use tokio::process::Command;
use tracing::{debug, instrument};

const GET_INSTALLED_APPS: &str = "frappe.core.doctype.module_def.module_def.get_installed_apps";
const EXPORT_ALL_APPS: &str = "frappe_types.frappe_types.type_generator.export_all_apps";
// Assumed per-app sibling of `export_all_apps`; the host's other per-app
// entry points (`generate_types_for_module`, `generate_types_for_doctype`)
// need a module or doctype name, which the settings rows do not carry.
const EXPORT_APP: &str = "frappe_types.frappe_types.type_generator.export_app";

/// Reaches the host through its `bench` management CLI.
#[derive(Clone, Debug)]
pub struct BenchClient {
    pub bench_path: Utf8PathBuf,
    pub site: Option<String>,
}

impl BenchClient {
    pub fn new(bench_path: impl Into<Utf8PathBuf>, site: Option<String>) -> Self {
        Self {
            bench_path: bench_path.into(),
            site,
        }
    }

    /// Arguments for `bench [--site S] execute <method> [--kwargs K]`.
    pub fn execute_args(&self, method: &str, kwargs: Option<&Value>) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(site) = &self.site {
            args.push("--site".to_string());
            args.push(site.clone());
        }
        args.push("execute".to_string());
        args.push(method.to_string());
        if let Some(kwargs) = kwargs {
            args.push("--kwargs".to_string());
            args.push(kwargs.to_string());
        }
        args
    }

    /// Runs one whitelisted method and returns its trimmed stdout.
    #[instrument(skip(self, kwargs))]
    async fn execute(&self, method: &str, kwargs: Option<&Value>) -> Result<String, SError> {
        let args = self.execute_args(method, kwargs);
        debug!(bench = %self.bench_path, ?args, "running bench");

        let output = Command::new(self.bench_path.as_str())
            .args(&args)
            .output()
            .await
            .map_err(|e| SError::Remote(format!("failed to run {}: {e}", self.bench_path)))?;

        if !output.status.success() {
            let err = String::from_utf8_lossy(&output.stderr);
            return Err(SError::Remote(format!("{method}: {}", err.trim())));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// `bench execute` prints the return value as JSON; plain text is kept as is.
pub fn parse_message(stdout: &str) -> Option<String> {
    if stdout.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(stdout) {
        Ok(Value::Null) => None,
        Ok(Value::String(s)) if s.is_empty() => None,
        Ok(Value::String(s)) => Some(s),
        Ok(other) => Some(other.to_string()),
        Err(_) => Some(stdout.to_string()),
    }
}

#[async_trait]
impl InstalledAppsService for BenchClient {
    async fn installed_apps(&self) -> Result<Value, SError> {
        let stdout = self.execute(GET_INSTALLED_APPS, None).await?;
        serde_json::from_str(&stdout).map_err(|e| SError::ParseError(format!("installed apps: {e}")))
    }
}

#[async_trait]
impl TypeGenerationService for BenchClient {
    async fn generate_all(&self) -> Result<Option<String>, SError> {
        let stdout = self.execute(EXPORT_ALL_APPS, None).await?;
        Ok(parse_message(&stdout))
    }

    async fn generate_for_app(&self, app_name: &str) -> Result<Option<String>, SError> {
        let kwargs = json!({ "app_name": app_name });
        let stdout = self.execute(EXPORT_APP, Some(&kwargs)).await?;
        Ok(parse_message(&stdout))
    }
}
