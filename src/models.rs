pub mod directives;
pub mod error;
pub mod notification;
pub mod settings;
