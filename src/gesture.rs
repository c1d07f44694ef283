//! Pointer gesture state.
//!
//! A gesture is one pointer-down → pointer-move* → pointer-up sequence. What
//! a move does is fixed at pointer-down: a press on the background pans the
//! canvas, a press on a node drags that node. The transitions themselves are
//! driven by [`CanvasController`](crate::CanvasController).

use crate::geometry::Point;
use crate::registry::NodeId;

/// What the pointer-down landed on.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Background,
    Node(NodeId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Panning; `anchor` is the last pointer position (re-anchored each move)
    DraggingCanvas { anchor: Point },
    /// Moving `node_id`; `anchor` is the pointer position at pointer-down
    DraggingNode { node_id: NodeId, anchor: Point },
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureState::Idle)
    }

    pub fn is_dragging_canvas(&self) -> bool {
        matches!(self, GestureState::DraggingCanvas { .. })
    }

    /// The node being dragged, if any
    pub fn dragged_node(&self) -> Option<&NodeId> {
        match self {
            GestureState::DraggingNode { node_id, .. } => Some(node_id),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            GestureState::Idle => None,
            GestureState::DraggingCanvas { anchor } | GestureState::DraggingNode { anchor, .. } => {
                Some(*anchor)
            }
        }
    }

    /// Anchor as a plain pair, `(-1, -1)` when idle.
    pub fn anchor_or_sentinel(&self) -> Point {
        self.anchor().unwrap_or(Point::SENTINEL)
    }
}
