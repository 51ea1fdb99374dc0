//! Dashboard Page
//!
//! Trust score, pool statistics, quick actions and recent activity.

use leptos::*;

use sure_circle::dashboard::{activity_feed, DashboardStats};
use sure_circle::router::Page;

use crate::components::{StatCard, TrustGauge};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let layout = state.layout;

    let user = create_memo(move |_| shell.with(|s| s.user().cloned()));
    let score = Signal::derive(move || user.with(|u| u.as_ref().map(|u| u.trust_score).unwrap_or_default()));

    let data = state.data.clone();
    let stats = create_memo(move |_| user.with(|u| DashboardStats::for_member(u.as_ref(), &data)));
    let stat = move |i: usize| Signal::derive(move || stats.with(|s| s.cards()[i].1.clone()));

    let data = state.data.clone();
    let today = state.today;
    let activity = create_memo(move |_| activity_feed(&data, today.get()));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">
                    "Welcome back, "
                    {move || user.with(|u| u.as_ref().map(|u| u.first_name().to_string()).unwrap_or_default())}
                </h1>
                <p class="text-gray-400 mt-1">"Here is how your circles are doing"</p>
            </div>

            <div
                class="dashboard-grid grid gap-6"
                style=move || format!("grid-template-columns: {}", layout.get().dashboard_columns())
            >
                // Trust score
                <section class="bg-gray-800 rounded-xl p-6 hover-lift">
                    <h2 class="text-lg font-semibold mb-4">"Trust Score"</h2>
                    <TrustGauge id="dashboard-gauge" score=score />
                    <p class="text-center text-sm text-gray-400 mt-2">
                        "Score: " <span id="user-trust-score">{move || score.get()}</span>
                    </p>
                </section>

                // Stats
                <section class="grid grid-cols-2 gap-4">
                    <StatCard label="Total Pooled" icon="💰" value=stat(0) />
                    <StatCard label="Active Pools" icon="👥" value=stat(1) />
                    <StatCard label="Active Claims" icon="📄" value=stat(2) />
                    <StatCard label="Monthly Contribution" icon="📅" value=stat(3) />
                </section>

                // Quick actions
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Quick Actions"</h2>
                    <div class="grid grid-cols-1 gap-3">
                        <QuickAction label="Create Pool" icon="➕" page=Page::Pools action="create" />
                        <QuickAction label="Join a Pool" icon="🔍" page=Page::Pools action="join" />
                        <QuickAction label="File Claim" icon="📄" page=Page::Claims action="file" />
                        <QuickAction label="Vote on Claims" icon="🗳️" page=Page::Claims action="vote" />
                    </div>
                </section>

                // Recent activity
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Recent Activity"</h2>
                    <ul class="space-y-3">
                        {move || activity.get().into_iter().map(|item| {
                            let amount_class = if item.credit { "text-green-400" } else { "text-red-400" };
                            view! {
                                <li class="flex items-center justify-between border-b border-gray-700 pb-3">
                                    <div>
                                        <p class="font-medium">{item.title}</p>
                                        <p class="text-sm text-gray-400">{item.detail}</p>
                                        <p class="activity-time text-xs text-gray-500">{item.when}</p>
                                    </div>
                                    <span class=format!("font-semibold {}", amount_class)>{item.amount}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}

/// Button carrying a page and a `data-action`
#[component]
fn QuickAction(
    label: &'static str,
    icon: &'static str,
    page: Page,
    action: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            data-page=page.id()
            data-action=action
            class="action-btn flex items-center space-x-3 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors hover-lift"
            on:click=move |_| state.navigate_with_action(page, action)
        >
            <span>{icon}</span>
            <span>{label}</span>
        </button>
    }
}
