//! Root-relative and window-relative bounding box queries.
//!
//! `ViewMeasurer` orchestrates the two measurement contracts on top of
//! the coordinate mapper and a set of host collaborators. Both queries
//! are read-only and idempotent, and both tolerate a view that has just
//! been unmounted: the `try_` forms report [`NotFound`], and the
//! fixed-shape forms degrade to an all-zero output with a warning, which
//! is what bridge serialization expects.

use std::fmt;
use std::rc::Rc;

use vantage_ui_graphics::Rect;

use crate::coordinates::bounding_box;
use crate::ui_thread::UiThreadGuard;
use crate::view::{ViewNode, ViewTag};

/// Resolves a host-assigned tag to a live view, if one is mounted.
///
/// Implementations return `None` (never panic) for unknown or
/// no-longer-live tags.
pub trait ViewProvider {
    fn provide_view(&self, tag: ViewTag) -> Option<Rc<ViewNode>>;
}

/// Resolves the root view of the window a node is attached to, or `None`
/// when the node is detached from any displayed window.
pub trait RootResolver {
    fn find_root(&self, view: &Rc<ViewNode>) -> Option<Rc<ViewNode>>;
}

/// A node's absolute on-screen position in physical pixels, as reported
/// by the platform.
pub trait ScreenLocator {
    fn location_on_screen(&self, view: &ViewNode) -> (i32, i32);
}

/// The window frame currently visible to the user, in physical pixels,
/// reflecting system bars, split-screen and multi-window chrome.
pub trait WindowMetrics {
    fn visible_frame(&self) -> Rect;
}

/// Root resolution by walking the parent chain.
///
/// The topmost node counts as a root only if the host has flagged it as
/// a window root; a parentless node without the flag is a detached
/// subtree and resolves to `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HierarchyRootResolver;

impl RootResolver for HierarchyRootResolver {
    fn find_root(&self, view: &Rc<ViewNode>) -> Option<Rc<ViewNode>> {
        let mut current = Rc::clone(view);
        loop {
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current.is_window_root().then_some(current)
    }
}

/// Why a measurement missed. The distinction only feeds diagnostics; the
/// caller-visible outcome is the same either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The tag resolves to no mounted view.
    Unregistered,
    /// The view exists but is no longer attached to a displayed window,
    /// e.g. it was clipped away.
    Detached,
}

/// The single failure mode of measurement: the view cannot be resolved
/// to something measurable. Never surfaced as a panic; the fixed-shape
/// entry points flatten it into a zero-valued output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotFound {
    pub tag: ViewTag,
    pub reason: NotFoundReason,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            NotFoundReason::Unregistered => {
                write!(f, "no view for tag {} currently exists", self.tag)
            }
            NotFoundReason::Detached => {
                write!(f, "view {} is no longer on screen", self.tag)
            }
        }
    }
}

/// Root-relative measurement result, in physical pixels.
///
/// `x`/`y` are relative to the window's root view (the root's own offset
/// within the window is already subtracted out); `left`/`top` are the
/// node's raw offsets into its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MeasureOutput {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub left: i32,
    pub top: i32,
}

impl MeasureOutput {
    /// The soft-miss sentinel.
    pub const ZERO: MeasureOutput = MeasureOutput {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
        left: 0,
        top: 0,
    };
}

/// Window-relative measurement result, in physical pixels, measured from
/// the top-left of the *visible* window area. A distinct coordinate
/// space from [`MeasureOutput`]'s root-relative one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WindowMeasureOutput {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowMeasureOutput {
    /// The soft-miss sentinel.
    pub const ZERO: WindowMeasureOutput = WindowMeasureOutput {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };
}

/// Measures mounted views by tag, on the thread that owns the tree.
pub struct ViewMeasurer {
    views: Rc<dyn ViewProvider>,
    roots: Rc<dyn RootResolver>,
    locator: Rc<dyn ScreenLocator>,
    window: Rc<dyn WindowMetrics>,
    guard: UiThreadGuard,
}

impl ViewMeasurer {
    /// Builds a measurer bound to the calling thread. All four
    /// collaborators are host-provided; see [`HierarchyRootResolver`]
    /// for the stock root resolution.
    pub fn new(
        views: Rc<dyn ViewProvider>,
        roots: Rc<dyn RootResolver>,
        locator: Rc<dyn ScreenLocator>,
        window: Rc<dyn WindowMetrics>,
    ) -> Self {
        Self {
            views,
            roots,
            locator,
            window,
            guard: UiThreadGuard::bind_current_thread(),
        }
    }

    /// Bounding box relative to the root view of the node's window.
    ///
    /// The root's own bounding box is computed first and subtracted from
    /// the node's, because the root itself may sit offset within the
    /// window (e.g. below a status bar).
    pub fn try_measure(&self, tag: ViewTag) -> Result<MeasureOutput, NotFound> {
        self.guard.assert_ui_thread();

        let view = self.resolve(tag)?;
        let root = self.roots.find_root(&view).ok_or(NotFound {
            tag,
            reason: NotFoundReason::Detached,
        })?;

        let root_box = bounding_box(&root);
        let view_box = bounding_box(&view);

        Ok(MeasureOutput {
            x: view_box.x - root_box.x,
            y: view_box.y - root_box.y,
            width: view_box.width,
            height: view_box.height,
            left: view_box.left,
            top: view_box.top,
        })
    }

    /// Fixed-shape form of [`try_measure`](Self::try_measure): a miss is
    /// logged and flattened to [`MeasureOutput::ZERO`].
    pub fn measure(&self, tag: ViewTag) -> MeasureOutput {
        match self.try_measure(tag) {
            Ok(output) => output,
            Err(miss) => {
                log::warn!("measure: {miss}");
                MeasureOutput::ZERO
            }
        }
    }

    /// Bounding box relative to the visible window frame.
    ///
    /// Uses the platform's absolute screen position rather than the
    /// ancestor walk, then subtracts the visible frame's top-left so
    /// window insets, split-screen and multi-window chrome are accounted
    /// for.
    pub fn try_measure_in_window(&self, tag: ViewTag) -> Result<WindowMeasureOutput, NotFound> {
        self.guard.assert_ui_thread();

        let view = self.resolve(tag)?;
        let (screen_x, screen_y) = self.locator.location_on_screen(&view);
        let visible_frame = self.window.visible_frame();

        Ok(WindowMeasureOutput {
            x: screen_x - visible_frame.left.round() as i32,
            y: screen_y - visible_frame.top.round() as i32,
            width: view.width().round() as i32,
            height: view.height().round() as i32,
        })
    }

    /// Fixed-shape form of
    /// [`try_measure_in_window`](Self::try_measure_in_window).
    pub fn measure_in_window(&self, tag: ViewTag) -> WindowMeasureOutput {
        match self.try_measure_in_window(tag) {
            Ok(output) => output,
            Err(miss) => {
                log::warn!("measureInWindow: {miss}");
                WindowMeasureOutput::ZERO
            }
        }
    }

    fn resolve(&self, tag: ViewTag) -> Result<Rc<ViewNode>, NotFound> {
        self.views.provide_view(tag).ok_or(NotFound {
            tag,
            reason: NotFoundReason::Unregistered,
        })
    }
}
