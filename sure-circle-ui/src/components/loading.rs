//! Loading Indicators

use leptos::*;

/// Submit button content: spinner and busy label while a simulated call
/// is in flight
#[component]
pub fn ButtonLabel(
    #[prop(into)]
    busy: Signal<bool>,
    busy_label: &'static str,
    label: &'static str,
) -> impl IntoView {
    move || {
        if busy.get() {
            view! {
                <div class="loading-spinner w-5 h-5" />
                <span>{busy_label}</span>
            }
            .into_view()
        } else {
            view! { <span>{label}</span> }.into_view()
        }
    }
}
