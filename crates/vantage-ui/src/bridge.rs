//! Channel handoff for off-thread callers.
//!
//! Measurement reads the tree, so it runs only on the UI thread. Other
//! threads enqueue requests through a cloneable [`MeasurerHandle`]; the
//! host's frame pump drains the queue on the UI thread via
//! [`MeasurerBridge::pump`], runs the measurer, converts the physical
//! pixel output to density-independent units, and fires the responder.
//! This is a scheduling handoff only: each request is a single atomic
//! read of the tree state at the time it is pumped, and a soft miss
//! arrives at the responder as the zero-valued bounds, never an error.

use std::sync::mpsc::{channel, Receiver, Sender};

use vantage_ui_graphics::{Dp, Px};

use crate::measurer::{MeasureOutput, ViewMeasurer, WindowMeasureOutput};
use crate::view::ViewTag;

/// Measurement result delivered to responders, in density-independent
/// pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredBounds {
    pub x: Dp,
    pub y: Dp,
    pub width: Dp,
    pub height: Dp,
}

impl MeasuredBounds {
    fn from_measure(output: MeasureOutput, density: f32) -> Self {
        Self {
            x: Px(output.x as f32).to_dp(density),
            y: Px(output.y as f32).to_dp(density),
            width: Px(output.width as f32).to_dp(density),
            height: Px(output.height as f32).to_dp(density),
        }
    }

    fn from_measure_in_window(output: WindowMeasureOutput, density: f32) -> Self {
        Self {
            x: Px(output.x as f32).to_dp(density),
            y: Px(output.y as f32).to_dp(density),
            width: Px(output.width as f32).to_dp(density),
            height: Px(output.height as f32).to_dp(density),
        }
    }
}

type MeasureResponder = Box<dyn FnOnce(MeasuredBounds) + Send>;

enum MeasureRequest {
    RelativeToRoot {
        tag: ViewTag,
        responder: MeasureResponder,
    },
    InWindow {
        tag: ViewTag,
        responder: MeasureResponder,
    },
}

/// Sending half of the handoff. Clone freely and move to any thread.
#[derive(Clone)]
pub struct MeasurerHandle {
    sender: Sender<MeasureRequest>,
}

impl MeasurerHandle {
    /// Requests a root-relative measurement. The responder runs on the
    /// UI thread during the next [`MeasurerBridge::pump`]; if the bridge
    /// has been dropped the request is quietly discarded.
    pub fn measure(&self, tag: ViewTag, responder: impl FnOnce(MeasuredBounds) + Send + 'static) {
        let _ = self.sender.send(MeasureRequest::RelativeToRoot {
            tag,
            responder: Box::new(responder),
        });
    }

    /// Requests a window-relative measurement; delivery as in
    /// [`measure`](Self::measure).
    pub fn measure_in_window(
        &self,
        tag: ViewTag,
        responder: impl FnOnce(MeasuredBounds) + Send + 'static,
    ) {
        let _ = self.sender.send(MeasureRequest::InWindow {
            tag,
            responder: Box::new(responder),
        });
    }
}

/// UI-thread half of the handoff: owns the measurer and the display
/// density used to convert pixel output for responders.
pub struct MeasurerBridge {
    measurer: ViewMeasurer,
    density: f32,
    receiver: Receiver<MeasureRequest>,
}

impl MeasurerBridge {
    /// Wraps `measurer` and returns the bridge plus the handle to hand
    /// to other threads. `density` is physical pixels per dp.
    pub fn new(measurer: ViewMeasurer, density: f32) -> (Self, MeasurerHandle) {
        let (sender, receiver) = channel();
        (
            Self {
                measurer,
                density,
                receiver,
            },
            MeasurerHandle { sender },
        )
    }

    pub fn measurer(&self) -> &ViewMeasurer {
        &self.measurer
    }

    /// Drains all pending requests, answering each against the current
    /// tree state. Call from the host's frame pump on the UI thread.
    /// Returns the number of requests served.
    pub fn pump(&self) -> usize {
        let mut served = 0;
        while let Ok(request) = self.receiver.try_recv() {
            match request {
                MeasureRequest::RelativeToRoot { tag, responder } => {
                    let output = self.measurer.measure(tag);
                    responder(MeasuredBounds::from_measure(output, self.density));
                }
                MeasureRequest::InWindow { tag, responder } => {
                    let output = self.measurer.measure_in_window(tag);
                    responder(MeasuredBounds::from_measure_in_window(output, self.density));
                }
            }
            served += 1;
        }
        served
    }
}
