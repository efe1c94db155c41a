//! View tree measurement primitives for Vantage
//!
//! This crate answers one question about a retained view hierarchy: where
//! is a node on screen? It walks the ancestor chain of an already-laid-out
//! node, folding each ancestor's affine transform, scroll offset and layout
//! offset into a single bounding rectangle, and exposes the result in two
//! coordinate spaces: relative to the window's root view, and relative to
//! the visible window frame.
//!
//! Layout itself (sizing/positioning policy) is out of scope; nodes are
//! measured as-is. All queries run on the thread that owns the tree;
//! [`MeasurerHandle`] provides the channel handoff for other threads.

mod bridge;
mod coordinates;
mod measurer;
mod registry;
mod ui_thread;
mod view;

pub use bridge::*;
pub use coordinates::*;
pub use measurer::*;
pub use registry::*;
pub use ui_thread::*;
pub use view::*;
