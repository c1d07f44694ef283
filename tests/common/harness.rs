//! Test harness wrapping a [`CanvasController`] with event tracking and
//! helpers for simulating pointer and wheel input.

#![allow(dead_code)]

use super::EventTracker;
use slint_node_canvas::{
    CanvasController, CanvasModel, GestureState, Node, NodeId, Point, PointerTarget, Subscription,
};

/// Install a test-writer subscriber once per process so `RUST_LOG=debug`
/// shows engine traces in failing tests.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct CanvasHarness {
    pub ctrl: CanvasController,
    pub tracker: EventTracker,
    _subscription: Subscription,
}

impl CanvasHarness {
    pub fn new() -> Self {
        init_tracing();
        let ctrl = CanvasController::new();
        ctrl.seed_placement(42);
        let tracker = EventTracker::new();
        let subscription = ctrl.subscribe({
            let tracker = tracker.clone();
            move |event| tracker.record(event)
        });
        Self {
            ctrl,
            tracker,
            _subscription: subscription,
        }
    }

    /// Harness with one node at `position`; returns its id too.
    pub fn with_node_at(inputs: u32, outputs: u32, position: Point) -> (Self, NodeId) {
        let harness = Self::new();
        let id = harness.ctrl.add_node_at(inputs, outputs, position);
        harness.tracker.clear();
        (harness, id)
    }

    pub fn press_node(&self, id: &NodeId, x: f32, y: f32) {
        self.ctrl
            .pointer_down(PointerTarget::Node(id.clone()), Point::new(x, y));
    }

    pub fn press_background(&self, x: f32, y: f32) {
        self.ctrl.pointer_down(PointerTarget::Background, Point::new(x, y));
    }

    pub fn move_to(&self, x: f32, y: f32) {
        self.ctrl.pointer_move(Point::new(x, y));
    }

    pub fn release(&self) {
        self.ctrl.pointer_up();
    }

    /// Press on a node, move by `(dx, dy)`, release.
    pub fn drag_node_by(&self, id: &NodeId, dx: f32, dy: f32) {
        let start = Point::new(300.0, 300.0);
        self.press_node(id, start.x, start.y);
        self.move_to(start.x + dx, start.y + dy);
        self.release();
    }

    pub fn wheel(&self, delta_y: f32) {
        self.ctrl.wheel(delta_y);
    }

    pub fn node(&self, id: &NodeId) -> Node {
        self.ctrl.find_node(id).expect("node should exist")
    }

    pub fn position(&self, id: &NodeId) -> Point {
        self.node(id).current_position
    }

    pub fn model(&self) -> CanvasModel {
        self.ctrl.model()
    }

    pub fn gesture(&self) -> GestureState {
        self.ctrl.gesture()
    }

    /// Number of rows flagged as selected in the render model.
    pub fn selected_row_count(&self) -> usize {
        let model = self.model();
        (0..model.len())
            .filter(|&i| model.row(i).map(|r| r.selected).unwrap_or(false))
            .count()
    }
}
