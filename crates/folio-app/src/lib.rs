//! folio-app - Application state and orchestration for Folio
//!
//! Content loading and caching, navigation over the content tree, view
//! construction, configuration, and the TEA (The Elm Architecture) update
//! loop that the terminal front end drives.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod loader;
pub mod location;
pub mod message;
pub mod navigation;
pub mod process;
pub mod state;
pub mod view;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use loader::{ContentCache, DocumentSource};
pub use location::{Location, Selection};
pub use message::Message;
pub use navigation::Navigator;
pub use state::{AppPhase, AppState};
pub use view::{render, Action, Card, CardTier, Element};
