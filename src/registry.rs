//! Ordered node storage.
//!
//! The registry owns every node's positions as plain fields. It does not
//! notify anyone itself; the [`CanvasController`](crate::CanvasController)
//! emits events and syncs the render model after each mutation.

use crate::geometry::Point;
use rand::Rng;
use std::fmt;
use uuid::Uuid;

/// Opaque, stable node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Allocate a fresh id (`node_` followed by a v4 UUID in hex).
    pub fn generate() -> Self {
        Self(format!("node_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub number_inputs: u32,
    pub number_outputs: u32,
    /// Drag anchor captured at pointer-down, in scaled workspace units
    pub previous_position: Point,
    /// Live workspace-space position consumed by the renderer
    pub current_position: Point,
}

impl Node {
    pub fn new(id: NodeId, number_inputs: u32, number_outputs: u32, position: Point) -> Self {
        Self {
            id,
            number_inputs,
            number_outputs,
            previous_position: position,
            current_position: position,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node at a random position within `[0, width) × [0, height)`.
    ///
    /// Port counts are not validated here; zero is a valid count.
    pub fn add_node<R: Rng>(
        &mut self,
        number_inputs: u32,
        number_outputs: u32,
        rng: &mut R,
        bounds: (f32, f32),
    ) -> &Node {
        let x = rng.gen::<f32>() * bounds.0.max(0.0);
        let y = rng.gen::<f32>() * bounds.1.max(0.0);
        self.insert_at(number_inputs, number_outputs, Point::new(x, y))
    }

    /// Append a node at an explicit workspace position.
    pub fn insert_at(&mut self, number_inputs: u32, number_outputs: u32, position: Point) -> &Node {
        let node = Node::new(NodeId::generate(), number_inputs, number_outputs, position);
        tracing::debug!(id = %node.id, number_inputs, number_outputs, "node added");
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Remove a node, returning it. Absent ids are a no-op.
    pub fn delete_node(&mut self, id: &NodeId) -> Option<Node> {
        let index = self.index_of(id)?;
        let node = self.nodes.remove(index);
        tracing::debug!(id = %node.id, "node deleted");
        Some(node)
    }

    pub fn find_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| &n.id == id)
    }

    /// Replace a node's live position. Returns false if the node is absent.
    pub fn update_node_position(&mut self, id: &NodeId, position: Point) -> bool {
        match self.find_node_mut(id) {
            Some(node) => {
                node.current_position = position;
                true
            }
            None => false,
        }
    }

    /// Store `current_position × scale` as the node's drag anchor.
    pub fn capture_anchor(&mut self, id: &NodeId, scale: f32) -> Option<Point> {
        let node = self.find_node_mut(id)?;
        node.previous_position = node.current_position.scaled(scale);
        Some(node.previous_position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn find_node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = NodeId::generate();
        let b = NodeId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("node_"));
        assert_eq!(a.as_str().len(), "node_".len() + 32);
    }

    #[test]
    fn test_add_node_within_bounds() {
        let mut registry = NodeRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let node = registry.add_node(2, 1, &mut rng, (800.0, 600.0));
            assert!((0.0..800.0).contains(&node.current_position.x));
            assert!((0.0..600.0).contains(&node.current_position.y));
            assert_eq!(node.previous_position, node.current_position);
        }
        assert_eq!(registry.len(), 50);
    }

    #[test]
    fn test_add_node_zero_bounds() {
        let mut registry = NodeRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);
        let node = registry.add_node(0, 0, &mut rng, (0.0, -10.0));
        assert_eq!(node.current_position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = NodeRegistry::new();
        let a = registry.insert_at(1, 1, Point::new(0.0, 0.0)).id.clone();
        let b = registry.insert_at(1, 1, Point::new(5.0, 5.0)).id.clone();
        let ids: Vec<_> = registry.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec![a.clone(), b]);
        assert_eq!(registry.index_of(&a), Some(0));
    }

    #[test]
    fn test_large_port_counts_tolerated() {
        let mut registry = NodeRegistry::new();
        let node = registry.insert_at(100, 0, Point::default());
        assert_eq!(node.number_inputs, 100);
        assert_eq!(node.number_outputs, 0);
    }

    #[test]
    fn test_delete_node() {
        let mut registry = NodeRegistry::new();
        let id = registry.insert_at(1, 1, Point::default()).id.clone();
        let removed = registry.delete_node(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(registry.is_empty());
        assert!(registry.find_node(&id).is_none());
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut registry = NodeRegistry::new();
        registry.insert_at(1, 1, Point::default());
        assert!(registry.delete_node(&NodeId::from("node_missing")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_position() {
        let mut registry = NodeRegistry::new();
        let id = registry.insert_at(1, 1, Point::new(1.0, 2.0)).id.clone();
        assert!(registry.update_node_position(&id, Point::new(9.0, 8.0)));
        let node = registry.find_node(&id).unwrap();
        assert_eq!(node.current_position, Point::new(9.0, 8.0));
        assert_eq!(node.previous_position, Point::new(1.0, 2.0));
        assert!(!registry.update_node_position(&NodeId::from("x"), Point::default()));
    }

    #[test]
    fn test_capture_anchor_scales_position() {
        let mut registry = NodeRegistry::new();
        let id = registry.insert_at(1, 1, Point::new(10.0, 30.0)).id.clone();
        assert_eq!(registry.capture_anchor(&id, 2.0), Some(Point::new(20.0, 60.0)));
        assert_eq!(registry.find_node(&id).unwrap().previous_position, Point::new(20.0, 60.0));
        assert_eq!(registry.capture_anchor(&NodeId::from("x"), 2.0), None);
    }
}
