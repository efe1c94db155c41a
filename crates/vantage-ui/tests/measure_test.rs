//! Root-relative measurement through the full measurer, driven by the
//! view tree fixture.

use std::f32::consts::FRAC_PI_2;

use vantage_testing::ViewTreeFixture;
use vantage_ui::{MeasureOutput, NotFoundReason, ViewTag};
use vantage_ui_graphics::{Matrix, Rect};

#[test]
fn unnested_root_measures_its_own_frame() {
    let fixture = ViewTreeFixture::new();
    fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let measurer = fixture.measurer();

    let bounds = measurer.measure(ViewTag(1));
    assert_eq!(
        bounds,
        MeasureOutput {
            x: 0,
            y: 0,
            width: 1080,
            height: 1920,
            left: 0,
            top: 0,
        }
    );
}

#[test]
fn translation_only_nesting_sums_ancestor_offsets() {
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let panel = fixture.child_view(&root, ViewTag(2), Rect::new(100.0, 200.0, 600.0, 800.0));
    let row = fixture.child_view(&panel, ViewTag(3), Rect::new(30.0, 40.0, 530.0, 140.0));
    fixture.child_view(&row, ViewTag(4), Rect::new(5.0, 6.0, 55.0, 26.0));
    let measurer = fixture.measurer();

    let bounds = measurer.measure(ViewTag(4));
    assert_eq!(bounds.x, 135);
    assert_eq!(bounds.y, 246);
    assert_eq!(bounds.width, 50);
    assert_eq!(bounds.height, 20);
    // Raw offsets stay parent-relative.
    assert_eq!((bounds.left, bounds.top), (5, 6));
}

#[test]
fn rotated_ancestor_swaps_envelope_dimensions() {
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let spinner = fixture.child_view(&root, ViewTag(2), Rect::from_size(500.0, 500.0));
    spinner.set_matrix(Matrix::from_rotation(FRAC_PI_2));
    fixture.child_view(&spinner, ViewTag(3), Rect::from_size(100.0, 50.0));
    let measurer = fixture.measurer();

    let bounds = measurer.measure(ViewTag(3));
    assert_eq!(bounds.width, 50);
    assert_eq!(bounds.height, 100);
}

#[test]
fn scrolling_an_ancestor_shifts_descendants_by_minus_delta() {
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let list = fixture.child_view(&root, ViewTag(2), Rect::from_size(1080.0, 1920.0));
    fixture.child_view(&list, ViewTag(3), Rect::new(0.0, 300.0, 1080.0, 400.0));
    let measurer = fixture.measurer();

    let before = measurer.measure(ViewTag(3));
    list.set_scroll(16.0, 120.0);
    let after = measurer.measure(ViewTag(3));

    assert_eq!(after.x, before.x - 16);
    assert_eq!(after.y, before.y - 120);
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
}

#[test]
fn root_offset_within_window_is_subtracted_out() {
    // Root sits below a 24px status bar; measurement is still relative
    // to the root view, not the window.
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::new(0.0, 24.0, 1080.0, 1944.0));
    fixture.child_view(&root, ViewTag(2), Rect::new(10.0, 10.0, 110.0, 60.0));
    let measurer = fixture.measurer();

    let bounds = measurer.measure(ViewTag(2));
    assert_eq!((bounds.x, bounds.y), (10, 10));
    assert_eq!((bounds.width, bounds.height), (100, 50));
}

#[test]
fn unknown_tag_degrades_to_zero_sentinel() {
    let fixture = ViewTreeFixture::new();
    fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let measurer = fixture.measurer();

    assert_eq!(measurer.measure(ViewTag(404)), MeasureOutput::ZERO);
    let miss = measurer.try_measure(ViewTag(404)).unwrap_err();
    assert_eq!(miss.tag, ViewTag(404));
    assert_eq!(miss.reason, NotFoundReason::Unregistered);
    assert_eq!(miss.to_string(), "no view for tag 404 currently exists");
}

#[test]
fn detached_view_degrades_to_zero_sentinel() {
    let fixture = ViewTreeFixture::new();
    fixture.detached_view(ViewTag(9), Rect::from_size(100.0, 100.0));
    let measurer = fixture.measurer();

    assert_eq!(measurer.measure(ViewTag(9)), MeasureOutput::ZERO);
    let miss = measurer.try_measure(ViewTag(9)).unwrap_err();
    assert_eq!(miss.reason, NotFoundReason::Detached);
    assert_eq!(miss.to_string(), "view 9 is no longer on screen");
}

#[test]
fn detaching_a_mounted_subtree_degrades_to_zero_sentinel() {
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let panel = fixture.child_view(&root, ViewTag(2), Rect::new(100.0, 100.0, 600.0, 600.0));
    fixture.child_view(&panel, ViewTag(3), Rect::from_size(50.0, 50.0));
    let measurer = fixture.measurer();

    assert_ne!(measurer.measure(ViewTag(3)), MeasureOutput::ZERO);
    panel.detach();
    assert_eq!(measurer.measure(ViewTag(3)), MeasureOutput::ZERO);
}

#[test]
fn unmounted_view_degrades_to_zero_sentinel() {
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    fixture.child_view(&root, ViewTag(2), Rect::from_size(50.0, 50.0));
    let measurer = fixture.measurer();

    assert_ne!(measurer.measure(ViewTag(2)), MeasureOutput::ZERO);
    fixture.unmount(ViewTag(2));
    assert_eq!(measurer.measure(ViewTag(2)), MeasureOutput::ZERO);
}

#[test]
fn measurement_is_idempotent_without_tree_mutation() {
    let fixture = ViewTreeFixture::new();
    let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
    let panel = fixture.child_view(&root, ViewTag(2), Rect::new(40.0, 60.0, 440.0, 460.0));
    panel.set_scroll(3.0, 4.0);
    fixture.child_view(&panel, ViewTag(3), Rect::new(10.0, 20.0, 90.0, 100.0));
    let measurer = fixture.measurer();

    let first = measurer.measure(ViewTag(3));
    let second = measurer.measure(ViewTag(3));
    assert_eq!(first, second);
}
