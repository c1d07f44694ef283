//! High-level controller for a node canvas.
//!
//! The [`CanvasController`] owns every piece of canvas state (nodes,
//! selection, zoom, the active gesture, port hover) and turns raw input
//! events into state changes, [`CanvasEvent`]s and render-model updates.
//!
//! # Example
//!
//! ```ignore
//! use slint_node_canvas::{CanvasController, CanvasEvent};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = CanvasController::new();
//!
//!     // NodeData is the .slint row struct; it implements CanvasNode
//!     window.set_nodes(ctrl.nodes_model_as::<NodeData>());
//!
//!     // Pointer routing - controller decides pan vs. node drag
//!     window.on_board_pointer_down(ctrl.background_pointer_down_callback());
//!     window.on_node_pointer_down(ctrl.node_pointer_down_callback());
//!     window.on_pointer_move(ctrl.pointer_move_callback());
//!     window.on_pointer_up(ctrl.pointer_up_callback());
//!     window.on_wheel(ctrl.wheel_callback());
//!
//!     // Host-side effects
//!     let w = window.as_weak();
//!     let _sub = ctrl.subscribe(move |event| {
//!         let Some(w) = w.upgrade() else { return };
//!         match event {
//!             CanvasEvent::TransformChanged(t) => w.set_board_scale(t.scale),
//!             CanvasEvent::ScrollBy { dx, dy } => w.invoke_scroll_by(*dx, *dy),
//!             CanvasEvent::SelectionChanged(sel) => w.set_show_delete(sel.is_some()),
//!             _ => {}
//!         }
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::events::{CanvasEvent, EventEmitter, Subscription};
use crate::geometry::{screen_delta_to_workspace, Point, Rect};
use crate::gesture::{GestureState, PointerTarget};
use crate::model::{CanvasModel, CanvasNode, NodeRow};
use crate::ports::{PortHoverTracker, PortKind, PortRef};
use crate::registry::{Node, NodeId, NodeRegistry};
use crate::selection::SelectionManager;
use crate::viewport::{SurfaceTransform, ViewportController, WheelBinding, WheelSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slint::{ModelRc, SharedString};
use std::cell::RefCell;
use std::rc::Rc;

struct CanvasState {
    config: CanvasConfig,
    registry: NodeRegistry,
    selection: SelectionManager,
    viewport: ViewportController,
    gesture: GestureState,
    ports: PortHoverTracker,
    rng: StdRng,
}

/// Controller that owns the canvas state and implements the input callbacks.
///
/// All handlers run synchronously on the UI thread, in event order. Events
/// are emitted after the internal state borrow is released, so listeners may
/// query the controller.
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct CanvasController {
    state: Rc<RefCell<CanvasState>>,
    events: Rc<EventEmitter>,
    model: CanvasModel,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(CanvasConfig::default())
    }

    /// Create a controller after validating `config`.
    pub fn with_config(config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CanvasConfig) -> Self {
        let state = CanvasState {
            viewport: ViewportController::from_config(&config),
            config,
            registry: NodeRegistry::new(),
            selection: SelectionManager::new(),
            gesture: GestureState::Idle,
            ports: PortHoverTracker::new(),
            rng: StdRng::from_entropy(),
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            events: Rc::new(EventEmitter::new()),
            model: CanvasModel::new(),
        }
    }

    /// Reseed the placement RNG, making node placement reproducible.
    pub fn seed_placement(&self, seed: u64) {
        self.state.borrow_mut().rng = StdRng::seed_from_u64(seed);
    }

    /// Register a listener for [`CanvasEvent`]s.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&CanvasEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    /// Connect the wheel handler to a host surface for the binding's lifetime.
    pub fn bind_wheel(&self, source: Rc<dyn WheelSource>) -> WheelBinding {
        let ctrl = self.clone();
        WheelBinding::new(source, Box::new(move |delta_y| {
            ctrl.wheel(delta_y);
        }))
    }

    // === Queries ===

    pub fn config(&self) -> CanvasConfig {
        self.state.borrow().config.clone()
    }

    /// Node rows for the renderer.
    pub fn nodes_model(&self) -> ModelRc<NodeRow> {
        self.model.model_rc()
    }

    /// Node rows converted to a host row type, e.g. a `.slint` struct.
    pub fn nodes_model_as<T: CanvasNode>(&self) -> ModelRc<T> {
        self.model.mapped()
    }

    pub fn model(&self) -> CanvasModel {
        self.model.clone()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.state.borrow().registry.iter().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.state.borrow().registry.len()
    }

    pub fn find_node(&self, id: &NodeId) -> Option<Node> {
        self.state.borrow().registry.find_node(id).cloned()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.state.borrow().selection.current().cloned()
    }

    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.state.borrow().selection.is_selected(id)
    }

    pub fn show_delete_control(&self) -> bool {
        self.state.borrow().selection.show_delete_control()
    }

    pub fn gesture(&self) -> GestureState {
        self.state.borrow().gesture.clone()
    }

    pub fn scale(&self) -> f32 {
        self.state.borrow().viewport.scale()
    }

    pub fn transform(&self) -> SurfaceTransform {
        self.state.borrow().viewport.transform()
    }

    /// Accumulated scroll issued to the host container by canvas panning.
    pub fn scroll_offset(&self) -> Point {
        self.state.borrow().viewport.scroll_offset()
    }

    pub fn hovered_port(&self) -> Option<PortRef> {
        self.state.borrow().ports.hovered().cloned()
    }

    pub fn is_port_hovered(&self, port: &PortRef) -> bool {
        self.state.borrow().ports.is_hovered(port)
    }

    /// Update the viewport size used to place new nodes.
    pub fn set_viewport_size(&self, width: f32, height: f32) {
        self.state.borrow_mut().viewport.set_size(width, height);
    }

    // === Node lifecycle ===

    /// Add a node at a random position inside the viewport.
    ///
    /// Port counts are not range-checked; see [`AddNodeRequest`](crate::AddNodeRequest).
    pub fn request_add_node(&self, number_inputs: u32, number_outputs: u32) -> NodeId {
        let id = {
            let mut s = self.state.borrow_mut();
            let s = &mut *s;
            let bounds = s.viewport.size();
            let id = s
                .registry
                .add_node(number_inputs, number_outputs, &mut s.rng, bounds)
                .id
                .clone();
            self.model.sync(&s.registry, &s.selection);
            id
        };
        self.events.emit(CanvasEvent::NodeAdded(id.clone()));
        id
    }

    /// Add a node at an explicit workspace position.
    pub fn add_node_at(&self, number_inputs: u32, number_outputs: u32, position: Point) -> NodeId {
        let id = {
            let mut s = self.state.borrow_mut();
            let id = s.registry.insert_at(number_inputs, number_outputs, position).id.clone();
            self.model.sync(&s.registry, &s.selection);
            id
        };
        self.events.emit(CanvasEvent::NodeAdded(id.clone()));
        id
    }

    /// Delete the selected node. No-op when nothing is selected.
    pub fn request_delete_selected(&self) -> Option<NodeId> {
        let id = self.selected()?;
        self.delete_node(&id).then_some(id)
    }

    /// Delete a node by id. Clears the selection only if it pointed at this node.
    ///
    /// Returns false if no such node exists.
    pub fn delete_node(&self, id: &NodeId) -> bool {
        let mut events = Vec::new();
        {
            let mut s = self.state.borrow_mut();
            if s.registry.delete_node(id).is_none() {
                return false;
            }
            if s.selection.is_selected(id) {
                s.selection.clear();
                events.push(CanvasEvent::SelectionChanged(None));
            }
            if s.gesture.dragged_node() == Some(id) {
                tracing::debug!(%id, "dragged node deleted; ending gesture");
                s.gesture = GestureState::Idle;
            }
            s.ports.forget_node(id);
            self.model.sync(&s.registry, &s.selection);
        }
        events.insert(0, CanvasEvent::NodeRemoved(id.clone()));
        self.emit_all(events);
        true
    }

    // === Pointer gestures ===

    /// Pointer pressed on the background or on a node.
    ///
    /// A press on the background clears the selection and starts panning. A
    /// press on a node selects it and starts dragging it. A press while a
    /// gesture is still active ends that gesture first. A press on an unknown
    /// node is ignored.
    pub fn pointer_down(&self, target: PointerTarget, position: Point) {
        let mut events = Vec::new();
        {
            let mut s = self.state.borrow_mut();
            if s.gesture.is_active() {
                tracing::debug!("pointer-down during active gesture; ending previous gesture");
                s.gesture = GestureState::Idle;
            }
            match target {
                PointerTarget::Background => {
                    if s.selection.clear() {
                        events.push(CanvasEvent::SelectionChanged(None));
                    }
                    s.gesture = GestureState::DraggingCanvas { anchor: position };
                    tracing::debug!(x = position.x, y = position.y, "canvas drag started");
                }
                PointerTarget::Node(node_id) => {
                    let scale = s.viewport.scale();
                    if s.registry.capture_anchor(&node_id, scale).is_none() {
                        tracing::debug!(id = %node_id, "pointer-down on unknown node ignored");
                        return;
                    }
                    if s.selection.select(node_id.clone()) {
                        events.push(CanvasEvent::SelectionChanged(Some(node_id.clone())));
                    }
                    tracing::debug!(id = %node_id, x = position.x, y = position.y, "node drag started");
                    s.gesture = GestureState::DraggingNode {
                        node_id,
                        anchor: position,
                    };
                }
            }
            if !events.is_empty() {
                self.model.sync(&s.registry, &s.selection);
            }
        }
        self.emit_all(events);
    }

    /// Pointer moved. Pans or drags depending on the active gesture.
    pub fn pointer_move(&self, position: Point) {
        let event = {
            let mut s = self.state.borrow_mut();
            match s.gesture.clone() {
                GestureState::Idle => None,
                GestureState::DraggingNode { node_id, anchor } => {
                    self.drag_node(&mut s, node_id, anchor, position)
                }
                GestureState::DraggingCanvas { anchor } => {
                    let delta = position - anchor;
                    s.gesture = GestureState::DraggingCanvas { anchor: position };
                    if delta == Point::default() {
                        None
                    } else {
                        let scroll = -delta;
                        s.viewport.scroll_by(scroll);
                        tracing::trace!(dx = scroll.x, dy = scroll.y, "pan");
                        Some(CanvasEvent::ScrollBy {
                            dx: scroll.x,
                            dy: scroll.y,
                        })
                    }
                }
            }
        };
        if let Some(event) = event {
            self.events.emit(event);
        }
    }

    // Anchor-relative: the position is recomputed from the node's captured
    // anchor on every move, never accumulated.
    fn drag_node(
        &self,
        s: &mut CanvasState,
        node_id: NodeId,
        anchor: Point,
        position: Point,
    ) -> Option<CanvasEvent> {
        if !s.selection.is_selected(&node_id) {
            return None;
        }
        let index = s.registry.index_of(&node_id)?;
        let scale = s.viewport.scale();
        let previous = s.registry.find_node(&node_id)?.previous_position;
        let origin = screen_delta_to_workspace(previous, scale);
        let target = origin + screen_delta_to_workspace(position - anchor, scale);

        s.registry.update_node_position(&node_id, target);
        if let Some(node) = s.registry.find_node(&node_id) {
            self.model.update_row(index, node, true);
        }
        tracing::trace!(id = %node_id, x = target.x, y = target.y, "node moved");
        Some(CanvasEvent::NodeMoved {
            id: node_id,
            position: target,
        })
    }

    /// Pointer released. Ends any gesture; a no-op when idle.
    pub fn pointer_up(&self) {
        let mut s = self.state.borrow_mut();
        if s.gesture.is_active() {
            tracing::debug!(canvas = s.gesture.is_dragging_canvas(), "gesture ended");
            s.gesture = GestureState::Idle;
        }
    }

    /// Pointer left the surface or capture was lost mid-gesture.
    ///
    /// Treated exactly like a pointer release so no gesture gets stuck.
    pub fn pointer_capture_lost(&self) {
        self.pointer_up();
    }

    // === Viewport ===

    /// Apply a wheel delta. Negative deltas zoom in.
    pub fn wheel(&self, delta_y: f32) -> SurfaceTransform {
        let (before, transform) = {
            let mut s = self.state.borrow_mut();
            let before = s.viewport.scale();
            (before, s.viewport.zoom(delta_y))
        };
        tracing::trace!(delta_y, scale = transform.scale, "wheel");
        if transform.scale != before {
            self.events.emit(CanvasEvent::TransformChanged(transform));
        }
        transform
    }

    // === Ports ===

    /// Pointer entered a port; `bounds` is its measured screen-space box.
    pub fn port_entered(&self, kind: PortKind, node_id: NodeId, index: u32, bounds: Rect) {
        let hover = self
            .state
            .borrow_mut()
            .ports
            .enter(PortRef::new(node_id, kind, index), bounds);
        self.events.emit(CanvasEvent::PortEntered(hover));
    }

    pub fn port_left(&self, kind: PortKind, node_id: NodeId, index: u32) {
        let port = PortRef::new(node_id, kind, index);
        self.state.borrow_mut().ports.leave(&port);
        self.events.emit(CanvasEvent::PortLeft(port));
    }

    /// Pointer pressed a port. Reports its center; does not start a node drag.
    pub fn port_pressed(&self, kind: PortKind, node_id: NodeId, index: u32, bounds: Rect) {
        let press = self
            .state
            .borrow()
            .ports
            .press(PortRef::new(node_id, kind, index), bounds);
        self.events.emit(CanvasEvent::PortPressed(press));
    }

    // === Callback factories ===

    /// Returns a callback for a background `pointer-down(x, y)`.
    pub fn background_pointer_down_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.pointer_down(PointerTarget::Background, Point::new(x, y))
    }

    /// Returns a callback for a node `pointer-down(id, x, y)`.
    pub fn node_pointer_down_callback(&self) -> impl Fn(SharedString, f32, f32) {
        let ctrl = self.clone();
        move |id, x, y| {
            ctrl.pointer_down(PointerTarget::Node(NodeId::from(id.as_str())), Point::new(x, y))
        }
    }

    /// Returns a callback for `pointer-move(x, y)`.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.pointer_move(Point::new(x, y))
    }

    /// Returns a callback for `pointer-up`.
    pub fn pointer_up_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.pointer_up()
    }

    /// Returns a callback for `wheel(delta-y)`.
    pub fn wheel_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |delta_y| {
            ctrl.wheel(delta_y);
        }
    }

    fn emit_all(&self, events: Vec<CanvasEvent>) {
        for event in events {
            self.events.emit(event);
        }
    }
}
