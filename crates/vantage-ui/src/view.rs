//! The retained view node.
//!
//! The tree is owned by the hosting UI runtime; measurement only reads it.
//! Geometry lives in `Cell`s so the runtime can update a node's frame,
//! scroll position or transform through a shared `Rc` without handing out
//! mutable references, and the parent link is a `Weak` so a subtree can be
//! dropped without back-references keeping it alive.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use vantage_ui_graphics::Matrix;

/// Opaque identifier a host assigns to a mounted view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ViewTag(pub i32);

impl fmt::Display for ViewTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the view hierarchy, carrying the already-laid-out geometry
/// that measurement reads: local size, offset into the parent, scroll
/// position, and an affine transform about the node's local origin.
pub struct ViewNode {
    tag: ViewTag,
    width: Cell<f32>,
    height: Cell<f32>,
    left: Cell<f32>,
    top: Cell<f32>,
    scroll_x: Cell<f32>,
    scroll_y: Cell<f32>,
    matrix: Cell<Matrix>,
    parent: RefCell<Weak<ViewNode>>,
    /// Set by the host on the root view of a displayed window. Root
    /// finding uses it to distinguish an attached tree from a detached
    /// subtree whose chain also ends in a parentless node.
    window_root: Cell<bool>,
}

impl ViewNode {
    pub fn new(tag: ViewTag) -> Rc<Self> {
        Rc::new(Self {
            tag,
            width: Cell::new(0.0),
            height: Cell::new(0.0),
            left: Cell::new(0.0),
            top: Cell::new(0.0),
            scroll_x: Cell::new(0.0),
            scroll_y: Cell::new(0.0),
            matrix: Cell::new(Matrix::IDENTITY),
            parent: RefCell::new(Weak::new()),
            window_root: Cell::new(false),
        })
    }

    pub fn tag(&self) -> ViewTag {
        self.tag
    }

    pub fn width(&self) -> f32 {
        self.width.get()
    }

    pub fn height(&self) -> f32 {
        self.height.get()
    }

    /// Horizontal offset of this node's frame within its parent.
    pub fn left(&self) -> f32 {
        self.left.get()
    }

    /// Vertical offset of this node's frame within its parent.
    pub fn top(&self) -> f32 {
        self.top.get()
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x.get()
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }

    pub fn matrix(&self) -> Matrix {
        self.matrix.get()
    }

    pub fn set_size(&self, width: f32, height: f32) {
        self.width.set(width);
        self.height.set(height);
    }

    pub fn set_position(&self, left: f32, top: f32) {
        self.left.set(left);
        self.top.set(top);
    }

    /// Content offset applied to this node's children when it scrolls.
    pub fn set_scroll(&self, scroll_x: f32, scroll_y: f32) {
        self.scroll_x.set(scroll_x);
        self.scroll_y.set(scroll_y);
    }

    pub fn set_matrix(&self, matrix: Matrix) {
        self.matrix.set(matrix);
    }

    /// Upgraded parent link, or `None` at the window boundary (and for
    /// nodes whose parent has been dropped).
    pub fn parent(&self) -> Option<Rc<ViewNode>> {
        self.parent.borrow().upgrade()
    }

    /// Attaches `child` under `parent`. Re-parenting just overwrites the
    /// previous link.
    pub fn add_child(parent: &Rc<ViewNode>, child: &Rc<ViewNode>) {
        *child.parent.borrow_mut() = Rc::downgrade(parent);
    }

    /// Severs the parent link, leaving the subtree detached.
    pub fn detach(&self) {
        *self.parent.borrow_mut() = Weak::new();
    }

    pub fn is_window_root(&self) -> bool {
        self.window_root.get()
    }

    pub fn set_window_root(&self, window_root: bool) {
        self.window_root.set(window_root);
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("tag", &self.tag)
            .field("width", &self.width.get())
            .field("height", &self.height.get())
            .field("left", &self.left.get())
            .field("top", &self.top.get())
            .finish()
    }
}
