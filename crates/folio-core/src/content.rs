//! Content tree domain types
//!
//! The tree is deserialized once from the `global` field of the content
//! document and never mutated afterwards. Categories and subcategories are
//! keyed by name in document order; articles are an ordered sequence and are
//! addressed by position.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level content document wrapper (`{ "global": { ... } }`)
#[derive(Debug, Clone, Deserialize)]
pub struct ContentDocument {
    pub global: Global,
}

/// Root of the content tree
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Global {
    /// Site description shown above every view
    pub description: String,

    /// Categories in document order
    pub categories: IndexMap<String, Category>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub description: String,

    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,

    pub subcategories: IndexMap<String, Subcategory>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Subcategory {
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,

    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Article {
    pub title: String,

    #[serde(default, rename = "abstract", deserialize_with = "non_empty")]
    pub summary: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,

    pub content: Vec<ContentBlock>,
}

/// A single block of article content, discriminated by its `type` field.
///
/// Any `type` other than `heading`, `paragraph` or `image` deserializes to
/// [`ContentBlock::Unrecognized`] and is skipped when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Image {
        src: String,
        #[serde(default, deserialize_with = "non_empty")]
        alt: Option<String>,
    },
    #[serde(other)]
    Unrecognized,
}

impl ContentBlock {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ContentBlock::Unrecognized)
    }
}

impl Global {
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Total number of articles across all categories
    pub fn article_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|c| c.subcategories.values())
            .map(|s| s.articles.len())
            .sum()
    }

    /// Number of content blocks with a `type` this model does not know.
    pub fn unrecognized_block_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|c| c.subcategories.values())
            .flat_map(|s| s.articles.iter())
            .flat_map(|a| a.content.iter())
            .filter(|b| !b.is_recognized())
            .count()
    }
}

impl Category {
    pub fn subcategory(&self, name: &str) -> Option<&Subcategory> {
        self.subcategories.get(name)
    }
}

impl Subcategory {
    pub fn article(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }
}

/// Treat missing, `null` and empty-string values alike as absent.
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
