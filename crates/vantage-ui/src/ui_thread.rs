//! Thread affinity for tree reads.
//!
//! View geometry and topology are mutated exclusively by the thread that
//! owns the tree, so measurement must run there too. `ViewMeasurer` is
//! already `!Send` (it holds `Rc` collaborators), which keeps safe Rust
//! callers on the owning thread; the guard backstops FFI hosts that
//! smuggle the measurer across threads anyway, turning a wrong-thread
//! query into a panic at the entry point rather than a torn read further
//! in.

use std::thread::{self, ThreadId};

/// Captures the UI thread's identity so measurement entry points can
/// assert they were not called from elsewhere.
#[derive(Clone, Debug)]
pub struct UiThreadGuard {
    owner: ThreadId,
}

impl UiThreadGuard {
    /// Binds the guard to the calling thread. Construct this on the
    /// thread that owns the view tree.
    pub fn bind_current_thread() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Panics when called off the owning thread. A violation is a caller
    /// programming error, not a runtime condition measurement handles;
    /// off-thread callers marshal through a `MeasurerHandle` instead.
    pub fn assert_ui_thread(&self) {
        assert!(
            self.is_ui_thread(),
            "view measurement invoked off the UI thread (owner {:?}, caller {:?})",
            self.owner,
            thread::current().id()
        );
    }
}

#[cfg(test)]
#[path = "tests/ui_thread_tests.rs"]
mod tests;
