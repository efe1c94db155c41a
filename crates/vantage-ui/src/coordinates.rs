//! Mapping rectangles from a node's local space into root coordinates.
//!
//! The walk is a single iterative pass over the parent chain. Order
//! matters at every step: a node's own matrix is defined about its local
//! origin and is applied before the node's offset into its parent, and an
//! ancestor's scroll offset shifts its children before that ancestor's
//! own matrix and offset take effect.

use std::rc::Rc;

use vantage_ui_graphics::Rect;

use crate::view::ViewNode;

/// Rewrites `rect`, given in `node`'s local coordinate space, into the
/// coordinate space of the outermost ancestor. The tree is not touched;
/// `rect` is the only thing mutated.
pub fn map_rect_to_root(node: &ViewNode, rect: &mut Rect) {
    let matrix = node.matrix();
    if !matrix.is_identity() {
        matrix.map_rect(rect);
    }

    rect.offset(node.left(), node.top());

    let mut current: Option<Rc<ViewNode>> = node.parent();
    while let Some(ancestor) = current {
        // Children are drawn shifted by the parent's scroll position.
        rect.offset(-ancestor.scroll_x(), -ancestor.scroll_y());

        let matrix = ancestor.matrix();
        if !matrix.is_identity() {
            matrix.map_rect(rect);
        }

        rect.offset(ancestor.left(), ancestor.top());

        current = ancestor.parent();
    }
}

/// A node's pixel-quantized bounding box in root coordinates, plus its
/// raw parent-relative offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Unmapped offset into the parent, reported alongside the absolute
    /// position for layout-relative reasoning.
    pub left: i32,
    pub top: i32,
}

/// Maps the node's local frame (0, 0, width, height) to root coordinates
/// and quantizes it to whole pixels.
///
/// Rounding is `f32::round`, i.e. half away from zero: 0.5 becomes 1 and
/// -0.5 becomes -1. Width and height are rounded from the mapped edge
/// difference, not recomputed from the rounded edges.
pub fn bounding_box(node: &ViewNode) -> BoundingBox {
    let mut rect = Rect::from_size(node.width(), node.height());
    map_rect_to_root(node, &mut rect);

    BoundingBox {
        x: rect.left.round() as i32,
        y: rect.top.round() as i32,
        width: rect.width().round() as i32,
        height: rect.height().round() as i32,
        left: node.left().round() as i32,
        top: node.top().round() as i32,
    }
}

#[cfg(test)]
#[path = "tests/coordinates_tests.rs"]
mod tests;
