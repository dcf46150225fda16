//! Dismissible toasts for failed board operations.

use kanban::NoticeLevel;
use leptos::prelude::*;

use crate::state::board::Controller;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let controller = expect_context::<Controller>();
    let board = controller.state().signal();
    let notices = move || board.with(|s| s.notices.clone());

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=notices
                key=|notice| notice.id
                children=move |notice| {
                    let controller = controller.clone();
                    let id = notice.id;
                    let class = match notice.level {
                        NoticeLevel::Info => "notice notice--info",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__dismiss"
                                type="button"
                                title="Dismiss"
                                on:click=move |_| controller.dismiss_notice(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
