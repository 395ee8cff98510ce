use card_types::{ActionRequested, CardAttributes, CardTheme};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    card::{Card, CardDetails},
    toggle::Toggle,
};
use crate::global_state::toasts::use_toast;

/// A few cards side by side, with host controls that drive their attributes.
#[component]
pub fn Showcase() -> impl IntoView {
    let featured_fancy = RwSignal::new(false);
    let emphasize_plain = RwSignal::new(false);
    let plain_title = RwSignal::new("A card without an image".to_string());
    let plain = Signal::derive(move || CardAttributes {
        title: plain_title.get(),
        image: None,
        fancy: emphasize_plain.get(),
        ..Default::default()
    });
    let emphasis_events = RwSignal::new(0usize);
    let on_emphasis_change = move |_fancy: bool| emphasis_events.update(|count| *count += 1);
    let last_action = RwSignal::new(None::<String>);
    let toasts = use_toast();
    let on_action = move |action: ActionRequested| {
        if let Some(toasts) = toasts {
            toasts.success(format!("Old Main card: {}", action.message));
        }
        last_action.set(Some(action.message));
    };
    let old_main_fancy = RwSignal::new(true);
    let old_main = CardAttributes {
        title: "Old Main".to_string(),
        subtitle: "Home of the Penn State administration since 1863.".to_string(),
        details: "Open the details to see the card's emphasis follow the panel.".to_string(),
        ..Default::default()
    };
    let theme = CardTheme {
        header_background: Some("#1e407c".to_string()),
        footer_background: Some("#e4e5e7".to_string()),
        ..Default::default()
    };

    view! {
        <Title text="my-card showcase" />
        <section class="showcase">
            <div class="showcase-item">
                <Card fancy=featured_fancy />
                <div class="host-controls">
                    <Toggle
                        checked=featured_fancy
                        set_checked=featured_fancy.write_only()
                        checked_label="fancy"
                        unchecked_label="plain"
                    />
                </div>
            </div>
            <div class="showcase-item">
                <Card attributes=plain on_emphasis_change />
                <div class="host-controls">
                    <Toggle
                        checked=emphasize_plain
                        set_checked=emphasize_plain.write_only()
                        checked_label="host set fancy"
                        unchecked_label="host cleared fancy"
                    />
                    <input
                        type="text"
                        prop:value=move || plain_title.get()
                        on:input=move |ev| plain_title.set(event_target_value(&ev))
                    />
                </div>
                <p class="host-readout">
                    {move || format!("emphasis changes: {}", emphasis_events.get())}
                </p>
            </div>
            <div class="showcase-item">
                <Card attributes=old_main fancy=old_main_fancy theme on_action>
                    <p class="slot-note">"Rendered from the default slot."</p>
                    <CardDetails slot>
                        <p>"Old Main sits at the head of the mall on the University Park campus."</p>
                    </CardDetails>
                </Card>
                <p class="host-readout">
                    {move || format!("fancy attribute: {}", old_main_fancy.get())}
                </p>
                <p class="host-readout">
                    {move || last_action.get().unwrap_or_else(|| "no action requested yet".to_string())}
                </p>
            </div>
        </section>
    }
}
