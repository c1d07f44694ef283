use crate::registry::NodeId;

/// Tracks the single selected node, if any.
///
/// The canvas never selects more than one node. Callers keep the selection
/// pointing at a live node by clearing it when that node is deleted.
#[derive(Debug, Default, Clone)]
pub struct SelectionManager {
    selected: Option<NodeId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, replacing any previous selection.
    ///
    /// Returns true if the selection changed.
    pub fn select(&mut self, id: NodeId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the current selection. Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Check if an ID is selected
    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn current(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Whether the toolbar should offer the delete control
    pub fn show_delete_control(&self) -> bool {
        self.selected.is_some()
    }
}
