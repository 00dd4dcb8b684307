// src/models/directives.rs
use crate::models::settings::AppId;
use serde::{Deserialize, Serialize};
use specta::Type;

/// Fields of the settings form the controller reacts to or drives.
#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    ExportToRoot,
    RootOutputPath,
    TypeSettings,
    AppName,
    AppPath,
}

#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub enabled: bool,
    pub required: bool,
}

/// Enable/require instructions for the form renderer.
/// `app_path` applies to that column across every row.
#[derive(Serialize, Deserialize, Type, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDirectives {
    pub root_output_path: FieldState,
    pub app_path: FieldState,
}

/// What a handler hands back to the form runtime after an event.
/// `None` means "leave as is".
#[derive(Serialize, Deserialize, Type, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormUpdate {
    pub directives: Option<FieldDirectives>,
    /// Replacement option list for the `app_name` selector.
    pub app_options: Option<Vec<AppId>>,
}

impl FormUpdate {
    pub fn is_empty(&self) -> bool {
        self.directives.is_none() && self.app_options.is_none()
    }
}
