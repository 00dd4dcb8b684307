use camino::Utf8PathBuf;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const APP_NAME: &str = "type_gen_settings";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub version: u8,
    /// `bench` executable used to reach the host site.
    pub bench_path: Utf8PathBuf,
    pub site: Option<String>,
    /// Where the settings document is kept.
    pub document_path: Utf8PathBuf,
    /// Default seed for `import`.
    pub seed_path: Utf8PathBuf,
    pub bindings_path: Utf8PathBuf,
    pub log_dir: Utf8PathBuf,
    pub log_level: String,
}

fn base_dirs() -> (PathBuf, PathBuf) {
    ProjectDirs::from("io", "frappe", APP_NAME)
        .map(|dirs| (dirs.config_dir().to_path_buf(), dirs.data_local_dir().to_path_buf()))
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe_path| exe_path.parent().map(|p| (p.to_path_buf(), p.to_path_buf())))
        })
        .unwrap_or_else(|| (PathBuf::from("."), PathBuf::from(".")))
}

fn utf8(path: PathBuf) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path).unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

impl Default for AppSettings {
    fn default() -> Self {
        let (config_dir, data_dir) = base_dirs();
        let config_dir = utf8(config_dir);
        let data_dir = utf8(data_dir);

        Self {
            version: 0,
            bench_path: "bench".into(),
            site: None,
            document_path: data_dir.join("type_generation_settings.toml"),
            seed_path: config_dir.join("seed.json"),
            bindings_path: "generated/bindings.ts".into(),
            log_dir: data_dir.join("logs"),
            log_level: "info".into(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    pub fn load_from(path: &camino::Utf8Path) -> Result<AppSettings, confy::ConfyError> {
        confy::load_path(path)
    }

    pub fn config_path() -> Result<PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, None)
    }
}
