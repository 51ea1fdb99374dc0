//! Tab Bar

use leptos::*;

use sure_circle::router::tabs;
use sure_circle::widgets::TabGroup;

fn tab_label(tab: &str) -> &'static str {
    match tab {
        tabs::AVAILABLE_POOLS => "Available Pools",
        tabs::MY_POOLS => "My Pools",
        tabs::CREATE_POOL => "Create Pool",
        tabs::PENDING_VOTES => "Pending Votes",
        tabs::MY_CLAIMS => "My Claims",
        tabs::FILE_CLAIM => "File Claim",
        _ => "",
    }
}

/// Buttons for a tab group; `on_select` receives the clicked tab id
#[component]
pub fn TabBar<F>(
    #[prop(into)]
    group: Signal<TabGroup>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(&'static str) + Copy + 'static,
{
    let ids = group.with_untracked(|g| g.tabs().to_vec());

    view! {
        <div class="flex space-x-2 border-b border-gray-700 mb-6 overflow-x-auto">
            {ids.into_iter().map(|tab| view! {
                <button
                    data-tab=tab
                    class=move || {
                        let base = "tab px-4 py-2 -mb-px font-medium transition-colors whitespace-nowrap";
                        if group.with(|g| g.is_active(tab)) {
                            format!("{} border-b-2 border-primary-500 text-white", base)
                        } else {
                            format!("{} text-gray-400 hover:text-white", base)
                        }
                    }
                    on:click=move |_| on_select(tab)
                >
                    {tab_label(tab)}
                </button>
            }).collect_view()}
        </div>
    }
}
