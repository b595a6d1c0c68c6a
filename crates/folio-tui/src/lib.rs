//! folio-tui - Terminal UI for Folio
//!
//! Renders the element descriptors produced by folio-app with ratatui, polls
//! crossterm for input, and drives the TEA loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
