//! Stat Card

use leptos::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 hover-lift">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="stat-value text-2xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}
