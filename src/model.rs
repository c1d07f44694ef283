//! Render-facing node list.
//!
//! [`CanvasModel`] mirrors the registry into a Slint [`VecModel`] of
//! [`NodeRow`]s. Rows are updated in place, which makes the model emit
//! row-change notifications only for nodes that actually changed.
//!
//! A `.slint` file declares its own row struct, which is a different Rust
//! type. Implement [`CanvasNode`] for the generated struct and bind
//! [`CanvasModel::mapped`]; the mapping forwards every row notification.
//!
//! ```ignore
//! impl CanvasNode for NodeData {
//!     fn set_id(&mut self, id: SharedString) { self.id = id; }
//!     fn set_position(&mut self, x: f32, y: f32) { self.x = x; self.y = y; }
//!     fn set_port_counts(&mut self, inputs: i32, outputs: i32) {
//!         self.inputs = inputs;
//!         self.outputs = outputs;
//!     }
//!     fn set_selected(&mut self, selected: bool) { self.selected = selected; }
//! }
//!
//! window.set_nodes(ctrl.nodes_model_as::<NodeData>());
//! ```

use crate::registry::{Node, NodeRegistry};
use crate::selection::SelectionManager;
use slint::{MapModel, Model, ModelRc, SharedString, VecModel};
use std::rc::Rc;

/// Trait for host row types that can display a canvas node.
///
/// Slint-generated structs derive `Default` and `Clone`, so implementing the
/// four setters is enough.
pub trait CanvasNode: Clone + Default + 'static {
    fn set_id(&mut self, id: SharedString);
    fn set_position(&mut self, x: f32, y: f32);
    fn set_port_counts(&mut self, inputs: i32, outputs: i32);
    fn set_selected(&mut self, selected: bool);

    /// Build a host row from a canvas row.
    fn from_row(row: &NodeRow) -> Self {
        let mut node = Self::default();
        node.set_id(row.id.clone());
        node.set_position(row.x, row.y);
        node.set_port_counts(row.number_inputs, row.number_outputs);
        node.set_selected(row.selected);
        node
    }
}

/// One rendered node: id, live workspace position, port counts, selection flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeRow {
    pub id: SharedString,
    pub x: f32,
    pub y: f32,
    pub number_inputs: i32,
    pub number_outputs: i32,
    pub selected: bool,
}

impl NodeRow {
    pub fn from_node(node: &Node, selected: bool) -> Self {
        Self {
            id: SharedString::from(node.id.as_str()),
            x: node.current_position.x,
            y: node.current_position.y,
            number_inputs: port_count(node.number_inputs),
            number_outputs: port_count(node.number_outputs),
            selected,
        }
    }
}

impl CanvasNode for NodeRow {
    fn set_id(&mut self, id: SharedString) {
        self.id = id;
    }
    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
    fn set_port_counts(&mut self, inputs: i32, outputs: i32) {
        self.number_inputs = inputs;
        self.number_outputs = outputs;
    }
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

// Slint models use i32 for integers.
fn port_count(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[derive(Clone)]
pub struct CanvasModel {
    rows: Rc<VecModel<NodeRow>>,
}

impl Default for CanvasModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasModel {
    pub fn new() -> Self {
        Self {
            rows: Rc::new(VecModel::default()),
        }
    }

    /// Model handle for binding to a Slint property.
    pub fn model_rc(&self) -> ModelRc<NodeRow> {
        ModelRc::from(self.rows.clone())
    }

    /// Model handle converting each row to the host's own row type.
    pub fn mapped<T: CanvasNode>(&self) -> ModelRc<T> {
        ModelRc::new(MapModel::new(self.model_rc(), |row: NodeRow| T::from_row(&row)))
    }

    pub fn rows(&self) -> Rc<VecModel<NodeRow>> {
        self.rows.clone()
    }

    /// Bring the rows in line with the registry and selection.
    ///
    /// Rows are matched by position; only differing rows are written.
    pub fn sync(&self, registry: &NodeRegistry, selection: &SelectionManager) {
        for (index, node) in registry.iter().enumerate() {
            let row = NodeRow::from_node(node, selection.is_selected(&node.id));
            if index < self.rows.row_count() {
                if self.rows.row_data(index).as_ref() != Some(&row) {
                    self.rows.set_row_data(index, row);
                }
            } else {
                self.rows.push(row);
            }
        }
        while self.rows.row_count() > registry.len() {
            self.rows.remove(self.rows.row_count() - 1);
        }
    }

    /// Rewrite a single row after a position change.
    pub fn update_row(&self, index: usize, node: &Node, selected: bool) {
        if index < self.rows.row_count() {
            self.rows.set_row_data(index, NodeRow::from_node(node, selected));
        }
    }

    pub fn len(&self) -> usize {
        self.rows.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.row_count() == 0
    }

    pub fn row(&self, index: usize) -> Option<NodeRow> {
        self.rows.row_data(index)
    }
}
