//! FAQ Accordion

use leptos::*;

use crate::state::global::GlobalState;

/// Question and answer pairs, in display order
#[component]
pub fn Faq(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    view! {
        <div class="space-y-3">
            {items.iter().enumerate().map(|(index, (question, answer))| {
                let open = move || shell.with(|s| s.faq().is_open(index));
                view! {
                    <div class="faq-item bg-gray-800 rounded-lg border border-gray-700">
                        <button
                            class="faq-question w-full flex items-center justify-between px-5 py-4 text-left font-medium"
                            on:click=move |_| shell.update(|s| s.toggle_faq(index))
                        >
                            <span>{*question}</span>
                            <span class="text-primary-400">{move || if open() { "−" } else { "+" }}</span>
                        </button>
                        <Show when=open>
                            <p class="px-5 pb-4 text-gray-400">{*answer}</p>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
