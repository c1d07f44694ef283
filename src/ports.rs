//! Port hover reporting.
//!
//! Ports are identified by node, side and index. When the pointer enters or
//! presses a port the renderer supplies the port's measured bounding box; the
//! tracker turns it into a screen-space center for the wire-routing
//! collaborator. No connection logic lives here.

use crate::geometry::{Point, Rect};
use crate::registry::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    Input,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortRef {
    pub node_id: NodeId,
    pub kind: PortKind,
    pub index: u32,
}

impl PortRef {
    pub fn new(node_id: NodeId, kind: PortKind, index: u32) -> Self {
        Self { node_id, kind, index }
    }
}

/// A port together with its screen-space center.
#[derive(Debug, Clone, PartialEq)]
pub struct PortHover {
    pub port: PortRef,
    pub center: Point,
}

#[derive(Debug, Default, Clone)]
pub struct PortHoverTracker {
    hovered: Option<PortRef>,
}

impl PortHoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the pointer entered `port`, measured at `bounds`.
    pub fn enter(&mut self, port: PortRef, bounds: Rect) -> PortHover {
        self.hovered = Some(port.clone());
        PortHover {
            port,
            center: bounds.center(),
        }
    }

    /// Record that the pointer left `port`.
    ///
    /// Returns false if a different port (or none) is currently hovered; the
    /// hover state is left alone in that case.
    pub fn leave(&mut self, port: &PortRef) -> bool {
        if self.hovered.as_ref() == Some(port) {
            self.hovered = None;
            true
        } else {
            false
        }
    }

    /// Report a press on `port` without touching hover state.
    pub fn press(&self, port: PortRef, bounds: Rect) -> PortHover {
        PortHover {
            port,
            center: bounds.center(),
        }
    }

    pub fn hovered(&self) -> Option<&PortRef> {
        self.hovered.as_ref()
    }

    pub fn is_hovered(&self, port: &PortRef) -> bool {
        self.hovered.as_ref() == Some(port)
    }

    /// Drop hover state belonging to a deleted node.
    pub fn forget_node(&mut self, node_id: &NodeId) {
        if self.hovered.as_ref().is_some_and(|p| &p.node_id == node_id) {
            self.hovered = None;
        }
    }
}
