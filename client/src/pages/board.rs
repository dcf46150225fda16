//! Board page: three status columns plus the notice stack.

use kanban::Status;
use leptos::prelude::*;

use crate::components::board_column::BoardColumn;
use crate::components::notice_stack::NoticeStack;
use crate::state::board::Controller;

/// Loads the card collection once on mount and renders one column per status.
#[component]
pub fn BoardPage() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let board = controller.state().signal();

    // Effects only run after hydration, so the load happens in the browser.
    Effect::new(move || {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            let _ = controller.load().await;
        });
    });

    let loading = move || board.with(|s| s.loading && !s.loaded);
    let total = move || board.with(|s| s.cards().len());

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1 class="board-page__title">"Trello Page"</h1>
                <span class="board-page__total">{move || format!("{} cards", total())}</span>
            </header>
            <Show when=loading>
                <p class="board-page__loading">"Loading cards..."</p>
            </Show>
            <div class="board-page__columns">
                {Status::ALL
                    .into_iter()
                    .map(|status| view! { <BoardColumn status=status/> })
                    .collect::<Vec<_>>()}
            </div>
            <NoticeStack/>
        </div>
    }
}
