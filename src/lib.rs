//! # Slint Node Canvas
//!
//! Interaction engine for node-graph canvases: nodes with input/output ports
//! that can be added, selected, dragged and deleted on a workspace that can
//! be panned and zoomed.
//!
//! Rendering is left to the host. The engine consumes pointer and wheel
//! events in screen space and produces:
//!
//! - a Slint [`VecModel`](slint::VecModel) of [`NodeRow`]s (id, workspace
//!   position, port counts, selected flag), exposed to `.slint` row structs
//!   through the [`CanvasNode`] trait
//! - [`CanvasEvent`]s for everything the host must act on: surface
//!   transform after zoom, scroll deltas while panning, port hover reports
//!
//! ## Coordinate spaces
//!
//! Nodes live in **workspace space**, independent of zoom. Pointer events
//! arrive in **screen space**. A screen delta becomes a workspace delta by
//! dividing by the zoom scale, which is clamped to `[1.0, 2.0]` by default.
//!
//! ## Gestures
//!
//! A pointer-down decides what the following moves do: on a node it selects
//! and drags that node, on the background it clears the selection and pans.
//! Pointer-up (or lost pointer capture) ends the gesture.
//!
//! ## Core Types
//!
//! - [`CanvasController`] - Owns all state, handles input, emits events
//! - [`NodeRegistry`] - Ordered node storage
//! - [`SelectionManager`] - Zero-or-one selected node
//! - [`ViewportController`] - Clamped zoom, scroll bookkeeping
//! - [`GestureState`] - Idle / panning / dragging a node
//! - [`PortHoverTracker`] - Port center reporting for wire routing
//! - [`CanvasConfig`] - Tunables, loadable from JSON

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod model;
pub mod ports;
pub mod registry;
pub mod selection;
pub mod toolbar;
pub mod viewport;

pub use config::CanvasConfig;
pub use controller::CanvasController;
pub use error::{CanvasError, CanvasResult};
pub use events::{CanvasEvent, EventEmitter, Subscription};
pub use geometry::{screen_delta_to_workspace, workspace_delta_to_screen, Point, Rect};
pub use gesture::{GestureState, PointerTarget};
pub use model::{CanvasModel, CanvasNode, NodeRow};
pub use ports::{PortHover, PortHoverTracker, PortKind, PortRef};
pub use registry::{Node, NodeId, NodeRegistry};
pub use selection::SelectionManager;
pub use toolbar::{AddNodeRequest, ToolbarState};
pub use viewport::{SurfaceTransform, ViewportController, WheelBinding, WheelConnection, WheelSource};
