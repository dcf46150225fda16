//! Drag-and-drop UI state.
//!
//! DESIGN
//! ======
//! Tracks which card is being dragged and which column is highlighted as the
//! drop target. Purely presentational; card moves themselves go through the
//! board controller.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use kanban::Status;

use crate::util::drag::DragPayload;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Card currently being dragged, with its source column.
    pub dragging: Option<DragPayload>,
    /// Column under the pointer while dragging.
    pub drop_target: Option<Status>,
}

impl UiState {
    pub fn start_drag(&mut self, payload: DragPayload) {
        self.dragging = Some(payload);
        self.drop_target = None;
    }

    /// Highlight `status` as the drop target. Ignored when nothing is dragged.
    pub fn hover(&mut self, status: Status) {
        if self.dragging.is_some() {
            self.drop_target = Some(status);
        }
    }

    pub fn leave(&mut self, status: Status) {
        if self.drop_target == Some(status) {
            self.drop_target = None;
        }
    }

    /// End the drag and hand back what was being dragged.
    pub fn finish_drag(&mut self) -> Option<DragPayload> {
        self.drop_target = None;
        self.dragging.take()
    }

    pub fn is_drop_target(&self, status: Status) -> bool {
        self.drop_target == Some(status)
    }

    pub fn is_dragging(&self, card_id: &str) -> bool {
        self.dragging.as_ref().is_some_and(|d| d.id == card_id)
    }
}
