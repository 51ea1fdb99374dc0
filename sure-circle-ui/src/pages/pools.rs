//! Pools Page
//!
//! Available pools with search, the member's pools and the pool creation
//! form.

use leptos::*;

use sure_circle::format::{format_currency, format_date};
use sure_circle::model::{Governance, Pool};
use sure_circle::router::tabs;
use sure_circle::service::CircleService;
use sure_circle::validation::Form;

use crate::components::{ButtonLabel, Reveal, TabBar, TextAreaField, TextField};
use crate::state::global::GlobalState;
use crate::util::debounce;

const SEARCH_DEBOUNCE_MS: u32 = 300;

const DEFAULT_TRUST_THRESHOLD: u16 = 650;

/// Pools page component
#[component]
pub fn Pools() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let group = Signal::derive(move || shell.with(|s| s.pool_tabs().clone()));
    let active = move |tab: &'static str| shell.with(|s| s.pool_tabs().is_active(tab));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Insurance Pools"</h1>
                <p class="text-gray-400 mt-1">"Find a circle or start your own"</p>
            </div>

            <TabBar group=group on_select=move |tab| { shell.update(|s| { s.select_pool_tab(tab); }); } />

            <Show when=move || active(tabs::AVAILABLE_POOLS)>
                <AvailablePools />
            </Show>
            <Show when=move || active(tabs::MY_POOLS)>
                <MyPools />
            </Show>
            <Show when=move || active(tabs::CREATE_POOL)>
                <CreatePool />
            </Show>
        </div>
    }
}

#[component]
fn AvailablePools() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let layout = state.layout;
    let (filter, set_filter) = create_signal(String::new());

    let on_search = debounce(SEARCH_DEBOUNCE_MS, move |term: String| {
        web_sys::console::log_1(&format!("Filtering pools: {}", term).into());
        set_filter.set(term);
    });

    let data = state.data.clone();
    let pools = move || {
        filter.with(|term| data.search_pools(term).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="space-y-4">
            <div class="search-bar">
                <input
                    type="search"
                    placeholder="Search pools by name, category or description"
                    on:input=move |ev| on_search(event_target_value(&ev))
                    class="w-full bg-gray-800 rounded-lg px-4 py-3 text-white border border-gray-700
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div
                class="pools-grid grid gap-6"
                style=move || format!("grid-template-columns: {}", layout.get().pools_columns())
            >
                {move || {
                    let pools = pools();
                    if pools.is_empty() {
                        view! {
                            <p class="text-gray-400">"No pools match your search."</p>
                        }.into_view()
                    } else {
                        pools.into_iter().map(|pool| view! { <PoolCard pool=pool /> }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn MyPools() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let layout = state.layout;
    let pools: Vec<Pool> = state.data.member_pools().into_iter().cloned().collect();

    view! {
        <div
            class="pools-grid grid gap-6"
            style=move || format!("grid-template-columns: {}", layout.get().pools_columns())
        >
            {pools.into_iter().map(|pool| view! { <PoolCard pool=pool /> }).collect_view()}
        </div>
    }
}

#[component]
fn PoolCard(pool: Pool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let threshold = pool.trust_threshold;
    let full = pool.is_full();
    let eligible = move || {
        shell.with(|s| s.user().map(|u| u.trust_score >= threshold).unwrap_or(false))
    };

    view! {
        <Reveal class="pool-card bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="flex items-start justify-between mb-2">
                <h3 class="text-lg font-semibold">{pool.name.clone()}</h3>
                <span class="text-xs px-2 py-1 rounded-full bg-gray-700 text-gray-300">
                    {pool.category.clone()}
                </span>
            </div>
            <p class="text-sm text-gray-400 mb-4">{pool.description.clone()}</p>

            <div class="mb-4">
                <div class="flex justify-between text-sm mb-1">
                    <span>{format!("{}/{} members", pool.members, pool.max_members)}</span>
                    <span>{format!("{}%", pool.fill_percent())}</span>
                </div>
                <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-primary-500"
                        style=format!("width: {}%", pool.fill_percent())
                    />
                </div>
            </div>

            <dl class="grid grid-cols-2 gap-2 text-sm">
                <dt class="text-gray-400">"Monthly"</dt>
                <dd>{format_currency(pool.monthly_contribution)}</dd>
                <dt class="text-gray-400">"Coverage"</dt>
                <dd>{format_currency(pool.coverage_limit)}</dd>
                <dt class="text-gray-400">"Pooled"</dt>
                <dd>{format_currency(pool.total_pooled)}</dd>
                <dt class="text-gray-400">"Governance"</dt>
                <dd>{pool.governance.label()}</dd>
                <dt class="text-gray-400">"Min. trust score"</dt>
                <dd>{pool.trust_threshold}</dd>
                <dt class="text-gray-400">"Since"</dt>
                <dd>{format_date(pool.created_date)}</dd>
            </dl>

            <div class="mt-4 text-sm">
                {move || if full {
                    view! { <span class="text-yellow-400">"Pool is full"</span> }.into_view()
                } else if eligible() {
                    view! { <span class="text-green-400">"✓ You meet the trust requirement"</span> }.into_view()
                } else {
                    view! { <span class="text-red-400">"Trust score too low for this pool"</span> }.into_view()
                }}
            </div>
        </Reveal>
    }
}

#[component]
fn CreatePool() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    let name = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let max_members = create_rw_signal(String::new());
    let contribution = create_rw_signal(String::new());
    let coverage = create_rw_signal(String::new());
    let governance = create_rw_signal(Governance::MajorityVote.value().to_string());
    let trust = create_rw_signal(DEFAULT_TRUST_THRESHOLD.to_string());
    let invalid = create_rw_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = Form::new()
            .required("name", name.get_untracked())
            .required("category", category.get_untracked())
            .required("description", description.get_untracked())
            .required("maxMembers", max_members.get_untracked())
            .required("monthlyContribution", contribution.get_untracked())
            .required("coverageLimit", coverage.get_untracked())
            .required("governance", governance.get_untracked())
            .optional("trustThreshold", trust.get_untracked());

        let mut checked = Ok(());
        shell.update(|s| checked = s.begin_create_pool(&form));
        if let Err(e) = checked {
            invalid.set(e.fields().to_vec());
            return;
        }
        invalid.set(Vec::new());
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = state.service.create_pool(&form).await;
            set_submitting.set(false);
            match result {
                Ok(()) => shell.update(|s| s.pool_created()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Pool creation failed: {}", e).into());
                    state.notify(sure_circle::Notification::error("Pool Not Created", e.to_string()));
                }
            }
        });
    };

    view! {
        <form id="pool-creation-form" on:submit=on_submit novalidate=true class="bg-gray-800 rounded-xl p-6 space-y-4 max-w-2xl">
            <TextField label="Pool Name" name="name" value=name invalid=invalid />
            <TextField label="Category" name="category" value=category invalid=invalid placeholder="e.g. Electronics" />
            <TextAreaField label="Description" name="description" value=description invalid=invalid />

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <TextField label="Max Members" name="maxMembers" input_type="number" value=max_members invalid=invalid />
                <TextField label="Monthly Contribution (₹)" name="monthlyContribution" input_type="number" value=contribution invalid=invalid />
                <TextField label="Coverage Limit (₹)" name="coverageLimit" input_type="number" value=coverage invalid=invalid />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Governance"</label>
                <select
                    name="governance"
                    prop:value=move || governance.get()
                    on:change=move |ev| governance.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    {Governance::ALL.into_iter().map(|g| view! {
                        <option value=g.value()>{g.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Minimum Trust Score: "
                    <span id="trust-value" class="text-white font-medium">{move || trust.get()}</span>
                </label>
                <input
                    id="trust-slider"
                    type="range"
                    min=sure_circle::model::TRUST_SCORE_MIN
                    max=sure_circle::model::TRUST_SCORE_MAX
                    step=10
                    prop:value=move || trust.get()
                    on:input=move |ev| trust.set(event_target_value(&ev))
                    class="w-full"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                <ButtonLabel busy=submitting busy_label="Processing..." label="Create Pool" />
            </button>
        </form>
    }
}
