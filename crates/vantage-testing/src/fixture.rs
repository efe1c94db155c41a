//! Stand-in host for measurement tests.
//!
//! `ViewTreeFixture` is similar in spirit to a robot test rule: tests
//! build a small view tree through it, place the window on a pretend
//! screen, and then measure through the real `ViewMeasurer` wired to the
//! fixture's collaborator implementations.
//!
//! # Example
//!
//! ```
//! use vantage_testing::ViewTreeFixture;
//! use vantage_ui::ViewTag;
//! use vantage_ui_graphics::Rect;
//!
//! let fixture = ViewTreeFixture::new();
//! let root = fixture.root_view(ViewTag(1), Rect::from_size(1080.0, 1920.0));
//! let _child = fixture.child_view(&root, ViewTag(2), Rect::new(10.0, 10.0, 110.0, 60.0));
//! let measurer = fixture.measurer();
//!
//! let bounds = measurer.measure(ViewTag(2));
//! assert_eq!((bounds.x, bounds.y), (10, 10));
//! ```

use std::cell::Cell;
use std::rc::Rc;

use vantage_ui::{
    map_rect_to_root, HierarchyRootResolver, ScreenLocator, ViewMeasurer, ViewNode, ViewProvider,
    ViewRegistry, ViewTag, WindowMetrics,
};
use vantage_ui_graphics::{EdgeInsets, Point, Rect, Size};

struct FixtureInner {
    registry: ViewRegistry,
    window_origin: Cell<Point>,
    window_size: Cell<Size>,
    chrome_insets: Cell<EdgeInsets>,
}

/// Owns a registry and window placement for a test, and implements the
/// measurer's collaborator traits against them. Cheap to clone; clones
/// share the same tree and window.
#[derive(Clone)]
pub struct ViewTreeFixture {
    inner: Rc<FixtureInner>,
}

impl ViewTreeFixture {
    /// A fixture with the window at the screen origin, a 1080x1920
    /// window, and no system chrome.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FixtureInner {
                registry: ViewRegistry::new(),
                window_origin: Cell::new(Point::ZERO),
                window_size: Cell::new(Size::new(1080.0, 1920.0)),
                chrome_insets: Cell::new(EdgeInsets::default()),
            }),
        }
    }

    /// Moves the window on the pretend screen.
    pub fn set_window_origin(&self, origin: Point) {
        self.inner.window_origin.set(origin);
    }

    pub fn set_window_size(&self, size: Size) {
        self.inner.window_size.set(size);
    }

    /// System-chrome insets subtracted from the window bounds to form
    /// the visible frame (status bar, split-screen divider, ...).
    pub fn set_chrome_insets(&self, insets: EdgeInsets) {
        self.inner.chrome_insets.set(insets);
    }

    /// Creates, registers and returns a window root with the given
    /// frame. `frame`'s left/top is the root's offset within the window.
    pub fn root_view(&self, tag: ViewTag, frame: Rect) -> Rc<ViewNode> {
        let view = self.build_view(tag, frame);
        view.set_window_root(true);
        view
    }

    /// Creates and registers a view attached under `parent`.
    pub fn child_view(&self, parent: &Rc<ViewNode>, tag: ViewTag, frame: Rect) -> Rc<ViewNode> {
        let view = self.build_view(tag, frame);
        ViewNode::add_child(parent, &view);
        view
    }

    /// Creates and registers a view with no parent and no window-root
    /// flag: resolvable by tag, but detached from any window.
    pub fn detached_view(&self, tag: ViewTag, frame: Rect) -> Rc<ViewNode> {
        self.build_view(tag, frame)
    }

    /// Drops the registry entry for `tag`, simulating an unmount. The
    /// node itself stays alive for as long as the test holds it.
    pub fn unmount(&self, tag: ViewTag) {
        self.inner.registry.unregister(tag);
    }

    /// A measurer bound to the calling thread, wired to this fixture's
    /// registry, screen and window.
    pub fn measurer(&self) -> ViewMeasurer {
        ViewMeasurer::new(
            Rc::new(self.clone()),
            Rc::new(HierarchyRootResolver),
            Rc::new(self.clone()),
            Rc::new(self.clone()),
        )
    }

    fn build_view(&self, tag: ViewTag, frame: Rect) -> Rc<ViewNode> {
        let view = ViewNode::new(tag);
        view.set_position(frame.left, frame.top);
        view.set_size(frame.width(), frame.height());
        self.inner.registry.register(Rc::clone(&view));
        view
    }
}

impl Default for ViewTreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewProvider for ViewTreeFixture {
    fn provide_view(&self, tag: ViewTag) -> Option<Rc<ViewNode>> {
        self.inner.registry.provide_view(tag)
    }
}

impl ScreenLocator for ViewTreeFixture {
    /// Window origin plus the node's mapped position within the window,
    /// mirroring how a platform reports absolute screen coordinates.
    fn location_on_screen(&self, view: &ViewNode) -> (i32, i32) {
        let mut rect = Rect::from_size(view.width(), view.height());
        map_rect_to_root(view, &mut rect);
        let origin = self.inner.window_origin.get();
        (
            (origin.x + rect.left).round() as i32,
            (origin.y + rect.top).round() as i32,
        )
    }
}

impl WindowMetrics for ViewTreeFixture {
    fn visible_frame(&self) -> Rect {
        let bounds = Rect::from_origin_size(
            self.inner.window_origin.get(),
            self.inner.window_size.get(),
        );
        bounds.inset(self.inner.chrome_insets.get())
    }
}
