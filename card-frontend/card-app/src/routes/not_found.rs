use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - my-card" />
        <div class="not-found">
            <h1>"404"</h1>
            <p>"There is no card here."</p>
            <A href="/">"Back to the showcase"</A>
        </div>
    }
}
