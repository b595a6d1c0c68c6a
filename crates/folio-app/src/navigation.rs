//! Navigation controller
//!
//! Owns the current [`Location`] and the view rendered for it. Every
//! transition re-resolves the target against the shared tree and re-renders
//! from scratch, so the displayed view can never drift from the tree.

use std::sync::Arc;

use folio_core::prelude::*;
use folio_core::Global;

use crate::location::{Location, Selection};
use crate::view::{self, Action, Card, Element};

#[derive(Debug, Clone)]
pub struct Navigator {
    tree: Arc<Global>,
    location: Location,
    view: Vec<Element>,
}

impl Navigator {
    /// Start at Home. Only constructible from a successfully loaded tree.
    pub fn new(tree: Arc<Global>) -> Result<Self> {
        let view = view::render(&tree, &Location::Home)?;
        Ok(Self {
            tree,
            location: Location::Home,
            view,
        })
    }

    pub fn tree(&self) -> &Global {
        &self.tree
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Elements of the current view
    pub fn view(&self) -> &[Element] {
        &self.view
    }

    /// Cards of the current view, in stagger order
    pub fn cards(&self) -> Vec<&Card> {
        view::cards(&self.view).collect()
    }

    /// Forward transition to a child of the current location
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        let target = self.location.select(selection)?;
        self.enter(target)
    }

    /// Backward transition. Returns `false` when already at Home.
    pub fn back(&mut self) -> Result<bool> {
        match self.location.back() {
            Some(parent) => {
                self.enter(parent)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply an action descriptor taken from the current view
    pub fn dispatch(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Select(selection) => self.select(selection.clone()),
            Action::Back => self.back().map(|_| ()),
        }
    }

    /// Render `target` and make it current. On failure nothing changes.
    fn enter(&mut self, target: Location) -> Result<()> {
        let view = view::render(&self.tree, &target)?;
        debug!("Navigated {} -> {}", self.location, target);
        self.view = view;
        self.location = target;
        Ok(())
    }
}
