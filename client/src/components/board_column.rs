//! One kanban column: header, card list, drop zone, and "Add task" popover.

use kanban::Status;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::components::add_card_form::AddCardForm;
use crate::components::card_tile::CardTile;
use crate::state::board::Controller;
use crate::state::ui::UiState;

/// Column for a single status. Membership is derived from the board state on
/// every render, so a card can never show up in two columns.
#[component]
pub fn BoardColumn(status: Status) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let ui = expect_context::<RwSignal<UiState>>();
    let board = controller.state().signal();

    let cards = move || {
        board
            .with(|s| s.column_cards(status))
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let count = move || board.with(|s| s.column_len(status));
    let popover_open = move || board.with(|s| s.popovers[status]);
    let column_class = move || {
        if ui.with(|u| u.is_drop_target(status)) {
            "column column--drop-target"
        } else {
            "column"
        }
    };

    let on_toggle = {
        let controller = controller.clone();
        move |_| controller.toggle_popover(status)
    };
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ui.update(|u| u.hover(status));
    };
    let on_dragleave = move |_| ui.update(|u| u.leave(status));
    let on_drop = move |ev: DragEvent| drop_card(&controller, ui, &ev, status, None);

    view! {
        <section
            class=column_class
            data-status=status.as_str()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <header class="column__header">
                <h2 class="column__title">{status.title()}</h2>
                <span class="column__count">{count}</span>
            </header>
            <div class="column__cards">
                <For
                    each=cards
                    key=|(index, card)| (*index, card.id.clone())
                    children=move |(index, card)| view! { <CardTile card=card index=index/> }
                />
            </div>
            <footer class="column__actions">
                <button
                    class="btn btn--small"
                    type="button"
                    aria-expanded=move || popover_open().to_string()
                    on:click=on_toggle
                >
                    "Add task"
                </button>
                <Show when=popover_open>
                    <AddCardForm column=status/>
                </Show>
            </footer>
        </section>
    }
}

/// Finish a drag over `to`, inserting before the card rendered at `position`
/// in the target column (end of column when `None`).
pub(crate) fn drop_card(
    controller: &Controller,
    ui: RwSignal<UiState>,
    ev: &DragEvent,
    to: Status,
    position: Option<usize>,
) {
    ev.prevent_default();
    let dragged = ui.try_update(UiState::finish_drag).flatten();
    #[cfg(feature = "hydrate")]
    let dragged = dragged.or_else(|| crate::util::drag::read_transfer(ev));
    let Some(payload) = dragged else {
        return;
    };

    let controller = controller.clone();
    leptos::task::spawn_local(async move {
        // Failures are already logged and surfaced as notices.
        let _ = controller
            .move_card(&payload.id, payload.from, to, position)
            .await;
    });
}
