//! Add/delete toolbar contract.
//!
//! The engine accepts any port count. Range checking happens here, before a
//! request reaches [`CanvasController::request_add_node`](crate::CanvasController::request_add_node).

use crate::error::{CanvasError, CanvasResult};
use crate::selection::SelectionManager;

/// A validated add-node request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddNodeRequest {
    pub number_inputs: u32,
    pub number_outputs: u32,
}

impl AddNodeRequest {
    /// Validate both counts against the inclusive range `[0, max]`.
    ///
    /// Counts are taken as `i64` since they usually come straight from a
    /// numeric text field and may be negative.
    pub fn new(number_inputs: i64, number_outputs: i64, max: u32) -> CanvasResult<Self> {
        Ok(Self {
            number_inputs: check_count("input", number_inputs, max)?,
            number_outputs: check_count("output", number_outputs, max)?,
        })
    }
}

fn check_count(kind: &'static str, count: i64, max: u32) -> CanvasResult<u32> {
    match u32::try_from(count) {
        Ok(c) if c <= max => Ok(c),
        _ => Err(CanvasError::PortCountOutOfRange { kind, count, max }),
    }
}

/// State of the "add node" dropdown.
#[derive(Debug, Clone, Default)]
pub struct ToolbarState {
    is_open: bool,
    number_inputs: i64,
    number_outputs: i64,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_number_inputs(&mut self, count: i64) {
        self.number_inputs = count;
    }

    pub fn set_number_outputs(&mut self, count: i64) {
        self.number_outputs = count;
    }

    pub fn counts(&self) -> (i64, i64) {
        (self.number_inputs, self.number_outputs)
    }

    /// Validate the entered counts. On success the dropdown closes and resets;
    /// on failure it stays open with the entered values.
    pub fn submit(&mut self, max: u32) -> CanvasResult<AddNodeRequest> {
        let request = AddNodeRequest::new(self.number_inputs, self.number_outputs, max)?;
        self.dismiss();
        Ok(request)
    }

    /// Whether the delete button is shown. Mirrors the selection.
    pub fn show_delete(&self, selection: &SelectionManager) -> bool {
        selection.show_delete_control()
    }

    /// Close the dropdown (e.g. click outside) and reset the counts.
    pub fn dismiss(&mut self) {
        *self = Self::default();
    }
}
