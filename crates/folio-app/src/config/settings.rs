//! Settings parser for .folio/config.toml

use super::types::Settings;
use folio_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const FOLIO_DIR: &str = ".folio";

/// Load settings from `<dir>/.folio/config.toml`.
///
/// A missing or unparsable file yields defaults; problems are logged, never fatal.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(FOLIO_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config file in `<dir>/.folio/`. Existing files are kept.
pub fn init_config_dir(dir: &Path) -> Result<()> {
    let folio_dir = dir.join(FOLIO_DIR);

    if !folio_dir.exists() {
        std::fs::create_dir_all(&folio_dir)
            .map_err(|e| Error::config(format!("Failed to create .folio dir: {}", e)))?;
    }

    let config_path = folio_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Folio Configuration

[content]
source = "data.json"    # File path or http(s) URL of the content document

[ui]
stagger_ms = 80         # Delay between cards appearing (0 = no animation)
show_image_refs = true  # Show image URLs on cards and in articles
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
