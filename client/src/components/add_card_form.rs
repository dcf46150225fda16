//! "Add task" form bound to one column's draft.

use kanban::{DraftField, Priority, Status};
use leptos::prelude::*;

use crate::state::board::Controller;

/// Form editing the draft of `column`. Submitting validates the draft and
/// creates the card; the draft is cleared only once the store confirms.
#[component]
pub fn AddCardForm(column: Status) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let board = controller.state().signal();

    let value = move |field: DraftField| board.with(|s| s.drafts[column].get(field).to_owned());
    let edit = {
        let controller = controller.clone();
        move |field: DraftField, text: String| controller.edit_draft(column, field, text)
    };
    let edit_title = edit.clone();
    let edit_description = edit.clone();
    let edit_priority = edit.clone();
    let edit_status = edit;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            let _ = controller.create(column).await;
        });
    };

    view! {
        <form class="add-card-form" on:submit=on_submit>
            <label class="add-card-form__field">
                "Title:"
                <input
                    type="text"
                    prop:value=move || value(DraftField::Title)
                    on:input=move |ev| edit_title(DraftField::Title, event_target_value(&ev))
                />
            </label>
            <label class="add-card-form__field">
                "Description:"
                <textarea
                    prop:value=move || value(DraftField::Description)
                    on:input=move |ev| edit_description(DraftField::Description, event_target_value(&ev))
                ></textarea>
            </label>
            <label class="add-card-form__field">
                "Priority:"
                <select
                    prop:value=move || value(DraftField::Priority)
                    on:change=move |ev| edit_priority(DraftField::Priority, event_target_value(&ev))
                >
                    <option value="">"Select priority"</option>
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="add-card-form__field">
                "State:"
                <select
                    prop:value=move || value(DraftField::Status)
                    on:change=move |ev| edit_status(DraftField::Status, event_target_value(&ev))
                >
                    <option value="">{format!("This column ({})", column.title())}</option>
                    {Status::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.title()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || board.with(|s| s.submitting[column])
            >
                "Submit"
            </button>
        </form>
    }
}
