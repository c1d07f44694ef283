//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_node_canvas::{CanvasEvent, Point};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every [`CanvasEvent`] the controller emits.
#[derive(Default, Clone)]
pub struct EventTracker {
    pub events: Rc<RefCell<Vec<CanvasEvent>>>,
}

impl EventTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: &CanvasEvent) {
        self.events.borrow_mut().push(event.clone());
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn scrolls(&self) -> Vec<(f32, f32)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::ScrollBy { dx, dy } => Some((*dx, *dy)),
                _ => None,
            })
            .collect()
    }

    pub fn moves(&self) -> Vec<Point> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::NodeMoved { position, .. } => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn selection_changes(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, CanvasEvent::SelectionChanged(_)))
            .count()
    }

    pub fn transforms(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::TransformChanged(t) => Some(t.scale),
                _ => None,
            })
            .collect()
    }
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

pub fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        approx_eq(actual.x, expected.x) && approx_eq(actual.y, expected.y),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
