pub mod bench;
pub mod json;
pub mod logging;
