use leptos::{prelude::*, reactive::wrappers::write::SignalSetter};

/// Switch used by the host page to drive a card's `fancy` attribute.
#[component]
pub fn Toggle(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] set_checked: SignalSetter<bool>,
    #[prop(into)] checked_label: Oco<'static, str>,
    #[prop(into)] unchecked_label: Oco<'static, str>,
) -> impl IntoView {
    view! {
        <label class="toggle">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| {
                    let checked = checked.get_untracked();
                    set_checked.set(!checked);
                }
            />
            <span class="toggle-label">
                {move || {
                    if checked.get() {
                        checked_label.to_string()
                    } else {
                        unchecked_label.to_string()
                    }
                }}
            </span>
        </label>
    }
}
