//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpCardApi;
use crate::pages::board::BoardPage;
use crate::state::board::{BoardStore, Controller};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single board state and provides the controller that mutates it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = BoardStore::new();
    let controller = Controller::new(HttpCardApi::from_build_env(), store);
    let ui = RwSignal::new(UiState::default());

    provide_context(controller);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/trello-board.css"/>
        <Title text="Trello Page"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
                <Route path=StaticSegment("trello") view=BoardPage/>
            </Routes>
        </Router>
    }
}
