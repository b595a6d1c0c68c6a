//! Custom widget components

mod card;
mod header;
mod page;
mod status_bar;
pub mod text;

pub use card::{CardView, SELECTED_MARKER};
pub use header::SiteHeader;
pub use page::PageView;
pub use status_bar::{HintSet, StatusBar};
