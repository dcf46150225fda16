//! Drag-and-drop payload carried in `DataTransfer`.
//!
//! The payload names the card and the column it was picked up from; the drop
//! handler passes both to `BoardController::move_card`, which ignores the drop
//! if the card has changed column in the meantime.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use kanban::Status;
use serde::{Deserialize, Serialize};

/// MIME type used for the payload.
pub const DRAG_MIME: &str = "application/x-kanban-card";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: String,
    pub from: Status,
}

impl DragPayload {
    pub fn new(id: impl Into<String>, from: Status) -> Self {
        Self { id: id.into(), from }
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a payload; anything that is not one of ours yields `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Attach the payload to a native drag event.
#[cfg(feature = "hydrate")]
pub fn write_transfer(ev: &web_sys::DragEvent, payload: &DragPayload) {
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_effect_allowed("move");
        if let Err(e) = transfer.set_data(DRAG_MIME, &payload.encode()) {
            leptos::logging::warn!("drag payload not attached: {e:?}");
        }
    }
}

/// Read our payload back from a native drop event.
#[cfg(feature = "hydrate")]
pub fn read_transfer(ev: &web_sys::DragEvent) -> Option<DragPayload> {
    let raw = ev.data_transfer()?.get_data(DRAG_MIME).ok()?;
    DragPayload::decode(&raw)
}
