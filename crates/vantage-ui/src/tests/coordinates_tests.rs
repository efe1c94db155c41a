use super::{bounding_box, map_rect_to_root};
use crate::view::{ViewNode, ViewTag};
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;
use vantage_ui_graphics::{Matrix, Rect};

fn view(tag: i32, left: f32, top: f32, width: f32, height: f32) -> Rc<ViewNode> {
    let node = ViewNode::new(ViewTag(tag));
    node.set_position(left, top);
    node.set_size(width, height);
    node
}

#[test]
fn root_only_node_applies_own_offset_and_nothing_else() {
    let node = view(1, 7.0, 9.0, 100.0, 50.0);
    let mut rect = Rect::from_size(100.0, 50.0);
    map_rect_to_root(&node, &mut rect);
    assert_eq!(rect, Rect::new(7.0, 9.0, 107.0, 59.0));
}

#[test]
fn translation_only_ancestry_sums_offsets() {
    let grandparent = view(1, 100.0, 200.0, 1000.0, 1000.0);
    let parent = view(2, 30.0, 40.0, 500.0, 500.0);
    let child = view(3, 5.0, 6.0, 50.0, 20.0);
    ViewNode::add_child(&grandparent, &parent);
    ViewNode::add_child(&parent, &child);

    let mut rect = Rect::from_size(50.0, 20.0);
    map_rect_to_root(&child, &mut rect);
    assert_eq!(rect.left, 135.0);
    assert_eq!(rect.top, 246.0);
    assert_eq!(rect.width(), 50.0);
    assert_eq!(rect.height(), 20.0);
}

#[test]
fn ancestor_scroll_shifts_descendants_negatively() {
    let parent = view(1, 0.0, 0.0, 500.0, 500.0);
    let child = view(2, 10.0, 10.0, 50.0, 50.0);
    ViewNode::add_child(&parent, &child);

    let mut rect = Rect::from_size(50.0, 50.0);
    map_rect_to_root(&child, &mut rect);
    let unscrolled_left = rect.left;
    let unscrolled_top = rect.top;

    parent.set_scroll(7.0, 11.0);
    let mut rect = Rect::from_size(50.0, 50.0);
    map_rect_to_root(&child, &mut rect);
    assert_eq!(rect.left, unscrolled_left - 7.0);
    assert_eq!(rect.top, unscrolled_top - 11.0);
}

#[test]
fn own_matrix_applies_before_own_offset() {
    // Scale about the local origin, then move into the parent: the
    // offset must not be scaled.
    let node = view(1, 10.0, 0.0, 10.0, 10.0);
    node.set_matrix(Matrix::from_scale(2.0, 2.0));

    let mut rect = Rect::from_size(10.0, 10.0);
    map_rect_to_root(&node, &mut rect);
    assert_eq!(rect, Rect::new(10.0, 0.0, 30.0, 20.0));
}

#[test]
fn ancestor_applies_scroll_then_matrix_then_offset() {
    let parent = view(1, 100.0, 0.0, 500.0, 500.0);
    parent.set_scroll(5.0, 0.0);
    parent.set_matrix(Matrix::from_scale(2.0, 2.0));
    let child = view(2, 0.0, 0.0, 10.0, 10.0);
    ViewNode::add_child(&parent, &child);

    // scroll first: (-5, 0, 5, 10); then scale: (-10, 0, 10, 20);
    // then the parent's own offset: (90, 0, 110, 20).
    let mut rect = Rect::from_size(10.0, 10.0);
    map_rect_to_root(&child, &mut rect);
    assert_eq!(rect, Rect::new(90.0, 0.0, 110.0, 20.0));
}

#[test]
fn rotated_ancestor_produces_axis_aligned_envelope() {
    let parent = view(1, 0.0, 0.0, 500.0, 500.0);
    parent.set_matrix(Matrix::from_rotation(FRAC_PI_2));
    let child = view(2, 0.0, 0.0, 100.0, 50.0);
    ViewNode::add_child(&parent, &child);

    let bounds = bounding_box(&child);
    assert_eq!(bounds.width, 50);
    assert_eq!(bounds.height, 100);
}

#[test]
fn bounding_box_rounds_half_away_from_zero() {
    let node = view(1, -0.5, 2.5, 10.5, 20.4);
    let bounds = bounding_box(&node);
    assert_eq!(bounds.x, -1);
    assert_eq!(bounds.y, 3);
    assert_eq!(bounds.width, 11);
    assert_eq!(bounds.height, 20);
    assert_eq!(bounds.left, -1);
    assert_eq!(bounds.top, 3);
}

#[test]
fn bounding_box_reports_raw_parent_relative_offsets() {
    let parent = view(1, 40.0, 40.0, 500.0, 500.0);
    let child = view(2, 12.0, 13.0, 30.0, 30.0);
    ViewNode::add_child(&parent, &child);

    let bounds = bounding_box(&child);
    assert_eq!((bounds.x, bounds.y), (52, 53));
    assert_eq!((bounds.left, bounds.top), (12, 13));
}

#[test]
fn dropped_parent_ends_the_walk() {
    let parent = view(1, 100.0, 100.0, 500.0, 500.0);
    let child = view(2, 10.0, 10.0, 50.0, 50.0);
    ViewNode::add_child(&parent, &child);
    drop(parent);

    let mut rect = Rect::from_size(50.0, 50.0);
    map_rect_to_root(&child, &mut rect);
    assert_eq!(rect.left, 10.0);
    assert_eq!(rect.top, 10.0);
}
