//! Configuration file parsing for Folio
//!
//! Supports:
//! - `.folio/config.toml` - Content source and UI settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
