//! Claims Page
//!
//! Voting on open claims, the member's own claims and the claim form with
//! evidence upload.

use leptos::html::Input;
use leptos::*;
use std::collections::BTreeMap;

use sure_circle::format::{format_currency, format_date, format_file_size};
use sure_circle::model::{Claim, Vote, VoteTally};
use sure_circle::router::tabs;
use sure_circle::service::CircleService;
use sure_circle::staging::StagedFile;
use sure_circle::validation::{cap_claim_amount, Form};
use sure_circle::Notification;

use crate::components::{ButtonLabel, TabBar, TextAreaField, TextField};
use crate::state::global::GlobalState;

/// Claims page component
#[component]
pub fn Claims() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let group = Signal::derive(move || shell.with(|s| s.claim_tabs().clone()));
    let active = move |tab: &'static str| shell.with(|s| s.claim_tabs().is_active(tab));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Claims"</h1>
                    <p class="text-gray-400 mt-1">"Vote on your circle's claims or file your own"</p>
                </div>
                <button
                    id="file-claim-btn"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    on:click=move |_| { shell.update(|s| { s.select_claim_tab(tabs::FILE_CLAIM); }); }
                >
                    "File Claim"
                </button>
            </div>

            <TabBar group=group on_select=move |tab| { shell.update(|s| { s.select_claim_tab(tab); }); } />

            <Show when=move || active(tabs::PENDING_VOTES)>
                <PendingVotes />
            </Show>
            <Show when=move || active(tabs::MY_CLAIMS)>
                <MyClaims />
            </Show>
            <Show when=move || active(tabs::FILE_CLAIM)>
                <FileClaim />
            </Show>
        </div>
    }
}

#[component]
fn PendingVotes() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let claims: Vec<Claim> = state.data.open_claims().cloned().collect();

    view! {
        <div class="space-y-4">
            {claims.into_iter().map(|claim| view! { <VoteCard claim=claim /> }).collect_view()}
        </div>
    }
}

#[component]
fn VoteCard(claim: Claim) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    let tally = create_rw_signal(None::<VoteTally>);
    let (voting, set_voting) = create_signal(None::<Vote>);

    let initial = VoteTally {
        votes_for: claim.votes_for,
        progress_percent: claim.approval_percent(),
    };
    let shown = move || tally.get().unwrap_or(initial);

    let pool_name = state
        .data
        .pool(claim.pool_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown pool".to_string());

    let claim_id = claim.id;
    let stored = store_value(state);
    let cast = move |vote: Vote| {
        set_voting.set(Some(vote));
        let state = stored.get_value();
        spawn_local(async move {
            match state.service.cast_vote(claim_id, vote).await {
                Ok(result) => {
                    tally.set(Some(result));
                    shell.update(|s| s.vote_recorded(vote));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Vote failed: {}", e).into());
                    state.notify(Notification::error("Vote Failed", e.to_string()));
                }
            }
            set_voting.set(None);
        });
    };

    let vote_button = move |vote: Vote, label: &'static str, class: &'static str| {
        let busy = Signal::derive(move || voting.get() == Some(vote));
        view! {
            <button
                class=format!("vote-btn flex-1 py-2 rounded-lg font-medium transition-colors \
                               disabled:opacity-50 disabled:cursor-not-allowed flex items-center \
                               justify-center space-x-2 {}", class)
                disabled=move || voting.get().is_some()
                on:click=move |_| cast(vote)
            >
                <ButtonLabel busy=busy busy_label="Voting..." label=label />
            </button>
        }
    };

    view! {
        <div class="claim-card bg-gray-800 rounded-xl p-6 border border-gray-700 hover-lift">
            <div class="flex items-start justify-between mb-2">
                <div>
                    <h3 class="text-lg font-semibold">{claim.reason.clone()}</h3>
                    <p class="text-sm text-gray-400">
                        {format!("{} · {} · {}", claim.submitted_by, pool_name, format_date(claim.submitted_date))}
                    </p>
                </div>
                <span class="text-xl font-bold">{format_currency(claim.amount)}</span>
            </div>

            <p class="text-sm text-gray-300 mb-4">{claim.description.clone()}</p>

            <div class="flex flex-wrap gap-2 mb-4">
                {claim.evidence.iter().map(|file| view! {
                    <span class="text-xs px-2 py-1 bg-gray-700 rounded">"📎 " {file.clone()}</span>
                }).collect_view()}
            </div>

            <div class="vote-progress mb-4">
                <div class="flex justify-between text-sm mb-1">
                    <span class="votes-for text-green-400">{move || shown().for_label()}</span>
                    <span class="text-gray-400">
                        {format!("{} Against · {} required", claim.votes_against, claim.required_votes)}
                    </span>
                </div>
                <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                    <div
                        class="progress-fill success h-full bg-green-500 transition-all"
                        style=move || format!("width: {}%", shown().progress_percent)
                    />
                </div>
            </div>

            <div class="flex space-x-3">
                {vote_button(Vote::Approve, "Approve", "bg-green-600 hover:bg-green-700")}
                {vote_button(Vote::Reject, "Reject", "bg-red-600 hover:bg-red-700")}
            </div>
        </div>
    }
}

#[component]
fn MyClaims() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let name = state.user().map(|u| u.name).unwrap_or_default();
    let claims: Vec<Claim> = state.data.claims_by(&name).cloned().collect();

    if claims.is_empty() {
        return view! {
            <p class="text-gray-400">"You have not filed any claims yet."</p>
        }
        .into_view();
    }

    view! {
        <div class="space-y-4">
            {claims.into_iter().map(|claim| view! {
                <div class="claim-card bg-gray-800 rounded-xl p-6 border border-gray-700 flex items-center justify-between hover-lift">
                    <div>
                        <h3 class="font-semibold">{claim.reason.clone()}</h3>
                        <p class="text-sm text-gray-400">{format_date(claim.submitted_date)}</p>
                    </div>
                    <div class="text-right">
                        <p class="font-bold">{format_currency(claim.amount)}</p>
                        <span class="text-xs px-2 py-1 rounded-full bg-yellow-700">{claim.status.label()}</span>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
    .into_view()
}

/// Claim form inputs, one signal per field
#[derive(Clone, Copy)]
struct ClaimFields {
    pool: RwSignal<String>,
    amount: RwSignal<String>,
    incident_date: RwSignal<String>,
    reason: RwSignal<String>,
    description: RwSignal<String>,
}

impl ClaimFields {
    fn new() -> Self {
        Self {
            pool: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
            incident_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }

    fn entries(&self) -> [(&'static str, RwSignal<String>); 5] {
        [
            ("pool", self.pool),
            ("amount", self.amount),
            ("incidentDate", self.incident_date),
            ("reason", self.reason),
            ("description", self.description),
        ]
    }

    /// Tracked snapshot, for the submit button state
    fn form(&self) -> Form {
        self.entries()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.required(name, value.get()))
    }

    fn form_untracked(&self) -> Form {
        self.entries()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.required(name, value.get_untracked()))
    }

    fn restore(&self, draft: &BTreeMap<String, String>) {
        for (name, value) in self.entries() {
            if let Some(saved) = draft.get(name) {
                value.set(saved.clone());
            }
        }
    }

    fn reset(&self) {
        for (_, value) in self.entries() {
            value.set(String::new());
        }
    }
}

fn staged_from(files: Option<web_sys::FileList>) -> Vec<StagedFile> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| StagedFile::new(file.name(), file.type_(), file.size() as u64))
        .collect()
}

#[component]
fn FileClaim() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    let fields = ClaimFields::new();
    let invalid = create_rw_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    // Initializer: bring back a saved draft
    match state.persistence.claim_draft() {
        Ok(Some(draft)) => fields.restore(&draft),
        Ok(None) => {}
        Err(e) => web_sys::console::error_1(&format!("Failed to load claim draft: {}", e).into()),
    }

    let can_submit = move || shell.with(|s| s.claim_submit_enabled(&fields.form()));

    let on_amount = move |ev: ev::Event| {
        let input = cap_claim_amount(&event_target_value(&ev));
        if let Some(warning) = input.notification() {
            shell.update(|s| s.notify(warning));
        }
        fields.amount.set(input.value);
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = fields.form_untracked();
        let mut checked = Ok(());
        shell.update(|s| checked = s.begin_claim(&form));
        if let Err(e) = checked {
            invalid.set(e.fields().to_vec());
            return;
        }
        invalid.set(Vec::new());
        set_submitting.set(true);

        let files = shell.with_untracked(|s| s.staged_files());
        let state = state_for_submit.clone();
        spawn_local(async move {
            let result = state.service.submit_claim(&form, &files).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    fields.reset();
                    state.claim_submitted();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Claim submission failed: {}", e).into());
                    state.notify(Notification::error("Submission Failed", e.to_string()));
                }
            }
        });
    };

    let pools: Vec<(u32, String)> = state
        .data
        .pools
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();
    let pool_invalid = move || invalid.with(|f| f.iter().any(|n| n == "pool"));

    view! {
        <form id="claim-form" on:submit=on_submit novalidate=true class="bg-gray-800 rounded-xl p-6 space-y-4 max-w-2xl">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Pool"</label>
                <select
                    name="pool"
                    required=true
                    prop:value=move || fields.pool.get()
                    on:change=move |ev| {
                        fields.pool.set(event_target_value(&ev));
                        invalid.update(|f| f.retain(|n| n != "pool"));
                    }
                    class=move || format!(
                        "w-full bg-gray-700 rounded-lg px-4 py-3 text-white border focus:outline-none {}",
                        if pool_invalid() { "border-red-500" } else { "border-gray-600" }
                    )
                >
                    <option value="">"Select a pool"</option>
                    {pools.into_iter().map(|(id, name)| view! {
                        <option value=id.to_string()>{name}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Amount (₹)"</label>
                    <input
                        type="number"
                        name="amount"
                        min=1
                        required=true
                        prop:value=move || fields.amount.get()
                        on:input=on_amount
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <TextField label="Incident Date" name="incidentDate" input_type="date" value=fields.incident_date invalid=invalid />
            </div>

            <TextField label="Reason" name="reason" value=fields.reason invalid=invalid placeholder="e.g. Screen damage" />
            <TextAreaField label="Description" name="description" value=fields.description invalid=invalid />

            <EvidenceUpload />

            <div class="flex space-x-3">
                <button
                    type="button"
                    id="save-draft-btn"
                    class="flex-1 py-3 border border-gray-600 hover:border-gray-400 rounded-lg font-semibold transition-colors"
                    on:click=move |_| state.save_claim_draft(&fields.form_untracked())
                >
                    "Save Draft"
                </button>
                <button
                    type="submit"
                    id="submit-claim-btn"
                    disabled=move || submitting.get() || !can_submit()
                    class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    <ButtonLabel busy=submitting busy_label="Processing..." label="Submit Claim" />
                </button>
            </div>
        </form>
    }
}

/// Drop zone, hidden file picker and the staged file list
#[component]
fn EvidenceUpload() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let picker = create_node_ref::<Input>();
    let (dragging, set_dragging) = create_signal(false);

    let stage = move |files: Vec<StagedFile>| {
        if !files.is_empty() {
            shell.update(|s| {
                s.stage_files(files);
            });
        }
    };

    let staged = move || shell.with(|s| s.staged_files());

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Supporting Documents"</label>
            <div
                id="file-upload-area"
                class=move || format!(
                    "border-2 border-dashed rounded-lg p-6 text-center cursor-pointer transition-colors {}",
                    if dragging.get() { "border-primary-500 bg-gray-700" } else { "border-gray-600" }
                )
                on:click=move |_| {
                    if let Some(input) = picker.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(false);
                    stage(staged_from(ev.data_transfer().and_then(|dt| dt.files())));
                }
            >
                <div class="text-3xl mb-2">"📤"</div>
                <p>"Drag files here or click to browse"</p>
                <p class="text-xs text-gray-500 mt-1">"JPG, PNG, PDF or Word. Up to 5 files, 10MB each."</p>
            </div>
            <input
                id="file-input"
                type="file"
                multiple=true
                accept=".jpg,.jpeg,.png,.pdf,.doc,.docx"
                class="hidden"
                node_ref=picker
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    stage(staged_from(input.files()));
                    // Allow picking the same file again after removing it
                    input.set_value("");
                }
            />

            <ul id="uploaded-files" class="mt-3 space-y-2">
                {move || staged().into_iter().map(|file| {
                    let name = file.name.clone();
                    view! {
                        <li class="flex items-center justify-between bg-gray-700 rounded-lg px-3 py-2">
                            <div class="flex items-center space-x-3">
                                <span>{if file.is_image() { "🖼️" } else { "📄" }}</span>
                                <span class="text-sm">{file.name.clone()}</span>
                                <span class="text-xs text-gray-400">{format_file_size(file.size)}</span>
                            </div>
                            <button
                                type="button"
                                class="remove-file text-gray-400 hover:text-red-400"
                                aria-label="Remove file"
                                on:click=move |_| {
                                    shell.update(|s| {
                                        s.remove_file(&name);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
