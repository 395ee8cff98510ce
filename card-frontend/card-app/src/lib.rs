pub mod components;
pub mod global_state;
pub mod routes;

use crate::components::toast::ToastContainer;
use crate::global_state::toasts::provide_toast_context;
use crate::routes::{not_found::NotFound, showcase::Showcase};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

pub use crate::components::card::{Card, CardDetails};

/// Document shell the server renders around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toast_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/my-card.css" />
        <Title text="my-card" />
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Showcase />
                </Routes>
            </main>
        </Router>
        <ToastContainer />
    }
}
