//! View rendering: projects a location into element descriptors
//!
//! [`render`] is pure. It walks the tree to the records the location
//! addresses and describes what should be displayed; the display surface
//! decides how. Action descriptors attached to elements carry everything
//! needed to perform the transition, so the surface never captures tree data.

use folio_core::prelude::*;
use folio_core::{ContentBlock, Global};
use serde::Serialize;

use crate::location::{Location, Resolved, Selection};

/// Label shown on the back element
pub const BACK_LABEL: &str = "← Back";

/// Interaction bound to an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Action {
    /// Move to a child of the current location
    Select(Selection),
    /// Return to the parent location
    Back,
}

/// Visual weight of a card. Display hint only, never affects navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTier {
    Category,
    Subcategory,
    Article,
}

/// A clickable summary of a child node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tier: CardTier,
    /// 0-based position among the cards of this view, for entrance timing
    pub stagger: usize,
    pub action: Action,
}

/// One displayable piece of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    /// Back button, always bound to [`Action::Back`]
    Back { label: String, action: Action },

    /// Page banner for category and subcategory views
    Banner {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },

    /// Article title
    Title { text: String },

    /// Free description text under a banner
    Text { text: String },

    /// Emphasized text from a heading block
    Heading { text: String },

    /// Body text from a paragraph block
    Paragraph { text: String },

    /// Image reference from an image block
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },

    Card(Card),
}

impl Element {
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Element::Card(card) => Some(card),
            _ => None,
        }
    }

    /// The action bound to this element, if it is interactive
    pub fn action(&self) -> Option<&Action> {
        match self {
            Element::Back { action, .. } => Some(action),
            Element::Card(card) => Some(&card.action),
            _ => None,
        }
    }
}

/// Cards of a view, in emission order
pub fn cards(elements: &[Element]) -> impl Iterator<Item = &Card> {
    elements.iter().filter_map(Element::as_card)
}

/// Render the view for `location`.
///
/// Fails only with [`Error::StaleReference`] when the location does not
/// exist in `tree`.
pub fn render(tree: &Global, location: &Location) -> Result<Vec<Element>> {
    let elements = match location.resolve(tree)? {
        Resolved::Home(global) => stagger_cards(global.categories.iter().map(|(name, category)| {
            PendingCard {
                title: name.clone(),
                description: Some(category.description.clone()).filter(|d| !d.is_empty()),
                image: category.image.clone(),
                tier: CardTier::Category,
                selection: Selection::Category(name.clone()),
            }
        }))
        .collect(),

        Resolved::Category(category) => {
            let mut out = vec![
                back(),
                Element::Banner {
                    title: location.to_string(),
                    image: category.image.clone(),
                },
                Element::Text {
                    text: category.description.clone(),
                },
            ];
            out.extend(stagger_cards(category.subcategories.iter().map(
                |(sub_name, sub)| PendingCard {
                    title: sub_name.clone(),
                    description: None,
                    image: sub.image.clone(),
                    tier: CardTier::Subcategory,
                    selection: Selection::Subcategory(sub_name.clone()),
                },
            )));
            out
        }

        Resolved::Subcategory(sub) => {
            let mut out = vec![
                back(),
                Element::Banner {
                    title: location.to_string(),
                    image: sub.image.clone(),
                },
            ];
            out.extend(stagger_cards(sub.articles.iter().enumerate().map(
                |(index, article)| PendingCard {
                    title: article.title.clone(),
                    description: article.summary.clone(),
                    image: article.image.clone(),
                    tier: CardTier::Article,
                    selection: Selection::Article(index),
                },
            )));
            out
        }

        Resolved::Article(article) => {
            let mut out = Vec::with_capacity(article.content.len() + 2);
            out.push(back());
            out.push(Element::Title {
                text: article.title.clone(),
            });
            out.extend(article.content.iter().filter_map(render_block));
            out
        }
    };

    trace!("Rendered {} elements for {}", elements.len(), location);
    Ok(elements)
}

fn back() -> Element {
    Element::Back {
        label: BACK_LABEL.to_string(),
        action: Action::Back,
    }
}

fn render_block(block: &ContentBlock) -> Option<Element> {
    match block {
        ContentBlock::Heading { text } => Some(Element::Heading { text: text.clone() }),
        ContentBlock::Paragraph { text } => Some(Element::Paragraph { text: text.clone() }),
        ContentBlock::Image { src, alt } => Some(Element::Image {
            src: src.clone(),
            alt: alt.clone(),
        }),
        ContentBlock::Unrecognized => None,
    }
}

struct PendingCard {
    title: String,
    description: Option<String>,
    image: Option<String>,
    tier: CardTier,
    selection: Selection,
}

/// Assigns stagger indices in emission order
fn stagger_cards(pending: impl Iterator<Item = PendingCard>) -> impl Iterator<Item = Element> {
    pending.enumerate().map(|(stagger, p)| {
        Element::Card(Card {
            title: p.title,
            description: p.description,
            image: p.image,
            tier: p.tier,
            stagger,
            action: Action::Select(p.selection),
        })
    })
}
