//! Draggable card with a delete action.

use kanban::Card;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::components::board_column::drop_card;
use crate::state::board::Controller;
use crate::state::ui::UiState;
use crate::util::drag::DragPayload;

/// A card inside a column. `index` is its position within that column and is
/// used as the insertion point when another card is dropped onto it.
#[component]
pub fn CardTile(card: Card, index: usize) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let ui = expect_context::<RwSignal<UiState>>();
    let status = card.status;

    let on_delete = {
        let controller = controller.clone();
        let id = card.id.clone();
        move |_| {
            let controller = controller.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                let _ = controller.delete(&id).await;
            });
        }
    };

    let on_dragstart = {
        let id = card.id.clone();
        move |ev: DragEvent| {
            let payload = DragPayload::new(id.clone(), status);
            #[cfg(feature = "hydrate")]
            crate::util::drag::write_transfer(&ev, &payload);
            #[cfg(not(feature = "hydrate"))]
            let _ = ev;
            ui.update(|u| u.start_drag(payload));
        }
    };
    let on_dragend = move |_| {
        ui.update(|u| {
            u.finish_drag();
        });
    };
    let on_drop = move |ev: DragEvent| {
        ev.stop_propagation();
        drop_card(&controller, ui, &ev, status, Some(index));
    };

    let tile_class = {
        let id = card.id.clone();
        move || {
            if ui.with(|u| u.is_dragging(&id)) {
                "card card--dragging"
            } else {
                "card"
            }
        }
    };
    let priority_class = format!("card__priority card__priority--{}", card.priority);

    view! {
        <article
            class=tile_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dragover=|ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <header class="card__header">
                <h3 class="card__title">{card.title}</h3>
                <span class=priority_class>{card.priority.label()}</span>
            </header>
            <p class="card__description">{card.description}</p>
            <button class="card__delete" type="button" title="Delete card" on:click=on_delete>
                "Delete"
            </button>
        </article>
    }
}
