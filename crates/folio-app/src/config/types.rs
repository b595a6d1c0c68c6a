//! Configuration types

use serde::{Deserialize, Serialize};

use crate::loader::{DocumentSource, DEFAULT_SOURCE};
use folio_core::prelude::*;

/// Application settings (.folio/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub content: ContentSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the content document is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentSettings {
    /// File path (relative to the working directory) or http(s) URL
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

impl ContentSettings {
    pub fn document_source(&self) -> Result<DocumentSource> {
        self.source.parse()
    }
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Delay between consecutive cards appearing, in milliseconds (0 disables)
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,

    /// Show image URLs on cards, banners and article images
    #[serde(default = "default_true")]
    pub show_image_refs: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            stagger_ms: default_stagger_ms(),
            show_image_refs: true,
        }
    }
}

fn default_stagger_ms() -> u64 {
    80
}

fn default_true() -> bool {
    true
}
