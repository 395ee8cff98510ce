use card_types::{
    view::NO_DETAILS_FALLBACK, ActionRequested, Card as CardModel, CardAttributes, CardEvent,
    CardTheme,
};
use leptos::{html::Details, prelude::*};
use log::{debug, info};

use crate::global_state::toasts::{use_toast, Toasts};

/// Content for the card's `details` slot, shown inside the collapsible panel.
#[slot]
pub struct CardDetails {
    children: ChildrenFn,
}

/// Host side receivers of a card's events.
#[derive(Clone, Copy)]
struct CardHooks {
    fancy: Option<RwSignal<bool>>,
    on_emphasis_change: Option<Callback<bool>>,
    on_action: Option<Callback<ActionRequested>>,
    toasts: Option<Toasts>,
}

impl CardHooks {
    fn handle(&self, event: &CardEvent) {
        match event {
            CardEvent::EmphasisChanged(change) => {
                // skipping equal values keeps the host `fancy` effect from re-running
                if let Some(fancy) = self.fancy {
                    if fancy.get_untracked() != change.to {
                        fancy.set(change.to);
                    }
                }
                if let Some(on_emphasis_change) = self.on_emphasis_change {
                    on_emphasis_change.run(change.to);
                }
            }
            CardEvent::PanelReconciled { open } => {
                debug!("details panel reconciled, open: {open}")
            }
            CardEvent::ActionRequested(action) => self.dispatch_action(action),
        }
    }

    /// Without a host hook the notice goes to the toast area, or the log when
    /// the page has none.
    fn dispatch_action(&self, action: &ActionRequested) {
        if let Some(on_action) = self.on_action {
            on_action.run(action.clone());
        } else if let Some(toasts) = self.toasts {
            toasts.info(action.message.clone());
        } else {
            info!("{}", action.message);
        }
    }
}

/// The `my-card` widget.
///
/// `fancy` is the emphasis flag and also decides whether the details panel is
/// open. A host can drive it through `attributes` or the `fancy` signal, a
/// user drives it by opening or closing the panel. Either way the panel is
/// reconciled to the flag in the same update.
#[component]
pub fn Card(
    /// Host attributes. Only fields that change between updates are applied,
    /// so an unchanged `fancy` never overrides the user's toggle.
    #[prop(into, optional)]
    attributes: Option<Signal<CardAttributes>>,
    /// Reflected emphasis, written back whenever the card's emphasis changes.
    #[prop(optional)]
    fancy: Option<RwSignal<bool>>,
    #[prop(optional)] theme: Option<CardTheme>,
    #[prop(into, optional)] on_action: Option<Callback<ActionRequested>>,
    #[prop(into, optional)] on_emphasis_change: Option<Callback<bool>>,
    #[prop(optional)] card_details: Option<CardDetails>,
    /// Default slot, rendered after the details text.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let attributes = attributes.unwrap_or_else(|| Signal::derive(CardAttributes::default));
    let mut initial = attributes.get_untracked();
    if let Some(fancy) = fancy {
        initial.fancy = fancy.get_untracked();
    }

    let hooks = CardHooks {
        fancy,
        on_emphasis_change,
        on_action,
        toasts: use_toast(),
    };
    let mut model = CardModel::from(initial);
    model.subscribe(move |event| hooks.handle(event));
    let card = RwSignal::new(model);

    // the first run sees the snapshot the model was built from
    Effect::new(move |previous: Option<CardAttributes>| {
        let next = attributes.get();
        if let Some(previous) = previous.as_ref() {
            card.maybe_update(|card| card.apply_attributes(Some(previous), &next));
        }
        next
    });
    if let Some(fancy) = fancy {
        Effect::new(move |_| {
            let emphasized = fancy.get();
            card.maybe_update(|card| card.set_emphasized(emphasized));
        });
    }

    let view_model = Memo::new(move |_| card.with(|card| card.render()));
    let details_ref = NodeRef::<Details>::new();
    let style = theme.map(|theme| theme.to_style()).unwrap_or_default();

    let details_content = match card_details {
        Some(details) => (details.children)().into_any(),
        None => view! { <span class="details-fallback">{NO_DETAILS_FALLBACK}</span> }.into_any(),
    };

    view! {
        <article
            class=move || if view_model.with(|v| v.fancy) { "card fancy" } else { "card" }
            data-fancy=move || view_model.with(|v| v.fancy)
            style=style
        >
            {move || {
                view_model
                    .with(|v| v.image.clone())
                    .map(|image| view! { <img src=image.src alt=image.alt /> })
            }}
            <div class="card-header">
                <h1>{move || view_model.with(|v| v.header.title.clone())}</h1>
                <p>{move || view_model.with(|v| v.header.subtitle.clone())}</p>
            </div>
            <div class="card-body">
                <p>{move || view_model.with(|v| v.body.details.clone())}</p>
                {children.map(|children| children())}
                <details
                    open=move || view_model.with(|v| v.body.panel.open)
                    node_ref=details_ref
                    on:toggle=move |_| {
                        if let Some(details) = details_ref.get_untracked() {
                            let open = details.open();
                            card.maybe_update(|card| {
                                let outcome = card.panel_toggled(open);
                                debug!("details toggled, open: {open} {outcome:?}");
                                outcome.changed()
                            });
                        }
                    }
                >
                    <summary>{move || view_model.with(|v| v.body.panel.summary)}</summary>
                    <div>{details_content}</div>
                </details>
            </div>
            <div class="card-footer">
                <button on:click=move |_| {
                    card.with_untracked(|card| {
                        card.request_action();
                    });
                }>{move || view_model.with(|v| v.footer.button_label)}</button>
            </div>
        </article>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<F, V>(view: F) -> String
    where
        F: FnOnce() -> V,
        V: RenderHtml,
    {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn default_card() {
        let html = render(|| view! { <Card /> });
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"alt="PSU Card""#));
        assert!(html.contains(r#"class="card""#));
        assert!(html.contains("Learn More"));
        assert!(html.contains("No additional details provided."));
        assert!(!html.contains("<details open"));
        assert!(!html.contains("data-fancy"));
    }

    #[test]
    fn card_without_image() {
        let attributes = CardAttributes {
            image: None,
            ..Default::default()
        };
        let html = render(move || view! { <Card attributes /> });
        assert!(!html.contains("<img"));
        assert!(html.contains("PSU Card"));
    }

    #[test]
    fn host_emphasis_renders_open() {
        let html = render(|| {
            let fancy = RwSignal::new(true);
            view! { <Card fancy /> }
        });
        assert!(html.contains("<details open"));
        assert!(html.contains(r#"class="card fancy""#));
        assert!(html.contains("data-fancy"));

        let attributes = CardAttributes {
            fancy: true,
            ..Default::default()
        };
        let html = render(move || view! { <Card attributes /> });
        assert!(html.contains("<details open"));
    }

    #[test]
    fn slots() {
        let html = render(|| {
            view! {
                <Card>
                    <p>"Injected after the details"</p>
                    <CardDetails slot>
                        <p>"Built in 1855"</p>
                    </CardDetails>
                </Card>
            }
        });
        assert!(html.contains("Injected after the details"));
        assert!(html.contains("Built in 1855"));
        assert!(!html.contains("No additional details provided."));
    }

    #[test]
    fn theme_variables_are_inlined() {
        let theme = CardTheme {
            header_background: Some("#1e407c".to_string()),
            ..Default::default()
        };
        let html = render(move || view! { <Card theme /> });
        assert!(html.contains("--header-bg-color: #1e407c;"));
    }
}
