//! Navigation locations and the transitions between them
//!
//! A [`Location`] is an address into the content tree, never a copy of tree
//! data. Transitions are pure functions over locations; whether the target
//! actually exists is checked by [`Location::resolve`] against the tree.

use std::fmt;

use folio_core::prelude::*;
use folio_core::{Article, Category, Global, Subcategory};
use serde::Serialize;

/// Where the user currently is in the content tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// List of all categories
    #[default]
    Home,

    /// Subcategories of one category
    Category { category: String },

    /// Articles of one subcategory
    Subcategory {
        category: String,
        subcategory: String,
    },

    /// A single article, addressed by its position in the subcategory
    Article {
        category: String,
        subcategory: String,
        article: usize,
    },
}

/// A child of the current location chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum Selection {
    Category(String),
    Subcategory(String),
    Article(usize),
}

/// Tree records a location resolves to
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Home(&'a Global),
    Category(&'a Category),
    Subcategory(&'a Subcategory),
    Article(&'a Article),
}

impl Location {
    /// Forward transition to a child of this location.
    ///
    /// Fails with [`Error::InvalidTransition`] when the selection kind does not
    /// match the children this location has (articles from Home, etc.).
    pub fn select(&self, selection: Selection) -> Result<Location> {
        match (self, selection) {
            (Location::Home, Selection::Category(category)) => Ok(Location::Category { category }),
            (Location::Category { category }, Selection::Subcategory(subcategory)) => {
                Ok(Location::Subcategory {
                    category: category.clone(),
                    subcategory,
                })
            }
            (
                Location::Subcategory {
                    category,
                    subcategory,
                },
                Selection::Article(article),
            ) => Ok(Location::Article {
                category: category.clone(),
                subcategory: subcategory.clone(),
                article,
            }),
            (location, selection) => Err(Error::invalid_transition(format!(
                "cannot select {selection:?} from {location}"
            ))),
        }
    }

    /// Backward transition to the parent location, `None` on Home
    pub fn back(&self) -> Option<Location> {
        match self {
            Location::Home => None,
            Location::Category { .. } => Some(Location::Home),
            Location::Subcategory { category, .. } => Some(Location::Category {
                category: category.clone(),
            }),
            Location::Article {
                category,
                subcategory,
                ..
            } => Some(Location::Subcategory {
                category: category.clone(),
                subcategory: subcategory.clone(),
            }),
        }
    }

    /// Walk the tree by key to the records this location addresses.
    ///
    /// Returns [`Error::StaleReference`] if any key along the path is missing.
    pub fn resolve<'a>(&self, tree: &'a Global) -> Result<Resolved<'a>> {
        match self {
            Location::Home => Ok(Resolved::Home(tree)),
            Location::Category { category } => {
                Ok(Resolved::Category(lookup_category(tree, category)?))
            }
            Location::Subcategory {
                category,
                subcategory,
            } => {
                let cat = lookup_category(tree, category)?;
                let sub = lookup_subcategory(cat, category, subcategory)?;
                Ok(Resolved::Subcategory(sub))
            }
            Location::Article {
                category,
                subcategory,
                article,
            } => {
                let cat = lookup_category(tree, category)?;
                let sub = lookup_subcategory(cat, category, subcategory)?;
                let art = sub
                    .article(*article)
                    .ok_or_else(|| Error::stale_reference(self.to_string()))?;
                Ok(Resolved::Article(art))
            }
        }
    }
}

fn lookup_category<'a>(tree: &'a Global, name: &str) -> Result<&'a Category> {
    tree.category(name)
        .ok_or_else(|| Error::stale_reference(format!("category {name:?}")))
}

fn lookup_subcategory<'a>(
    category: &'a Category,
    category_name: &str,
    name: &str,
) -> Result<&'a Subcategory> {
    category
        .subcategory(name)
        .ok_or_else(|| Error::stale_reference(format!("subcategory {category_name:?} / {name:?}")))
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Home => write!(f, "Home"),
            Location::Category { category } => write!(f, "{category}"),
            Location::Subcategory {
                category,
                subcategory,
            } => write!(f, "{category} / {subcategory}"),
            Location::Article {
                category,
                subcategory,
                article,
            } => write!(f, "{category} / {subcategory} / #{article}"),
        }
    }
}
