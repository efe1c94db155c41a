//! Tag-to-view registry.
//!
//! Hosts register a node when it mounts and unregister it when it
//! unmounts; everything downstream resolves tags through the
//! [`ViewProvider`] seam and reads geometry fresh on every query, so the
//! registry stores identity only, never cached coordinates.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::measurer::ViewProvider;
use crate::view::{ViewNode, ViewTag};

/// The stock [`ViewProvider`]: a hash map from tag to live node.
#[derive(Default)]
pub struct ViewRegistry {
    views: RefCell<FxHashMap<ViewTag, Rc<ViewNode>>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `view` under its own tag, replacing any previous entry.
    pub fn register(&self, view: Rc<ViewNode>) {
        self.views.borrow_mut().insert(view.tag(), view);
    }

    /// Removes the entry for `tag`; subsequent lookups miss softly.
    pub fn unregister(&self, tag: ViewTag) {
        self.views.borrow_mut().remove(&tag);
    }

    pub fn len(&self) -> usize {
        self.views.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.borrow().is_empty()
    }
}

impl ViewProvider for ViewRegistry {
    fn provide_view(&self, tag: ViewTag) -> Option<Rc<ViewNode>> {
        self.views.borrow().get(&tag).cloned()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
