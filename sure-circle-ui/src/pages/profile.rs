//! Profile Page

use leptos::*;

use sure_circle::format::format_date;
use sure_circle::service::CircleService;
use sure_circle::validation::Form;
use sure_circle::Notification;

use crate::components::{ButtonLabel, TextField, TrustGauge};
use crate::state::global::GlobalState;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let user = state.user();

    let score = Signal::derive(move || shell.with(|s| s.user().map(|u| u.trust_score).unwrap_or_default()));

    let (verified, status_label) = user
        .as_ref()
        .map(|u| (u.is_verified(), u.verification_status.label()))
        .unwrap_or((false, "Unverified"));
    let member_since = user
        .as_ref()
        .and_then(|u| u.joined_date)
        .map(format_date)
        .unwrap_or_else(|| "Today".to_string());
    let claims_submitted = user.as_ref().map(|u| u.claims_submitted).unwrap_or_default();
    let votes_participated = user.as_ref().map(|u| u.votes_participated).unwrap_or_default();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Profile"</h1>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Trust Score"</h2>
                    <TrustGauge id="profile-gauge" score=score />
                    <div class="text-sm text-gray-400 space-y-1">
                        <p>"Member since " {member_since}</p>
                        <p>{format!("{} claims submitted", claims_submitted)}</p>
                        <p>{format!("{} votes cast", votes_participated)}</p>
                    </div>
                    <span class=if verified {
                        "inline-block text-xs px-3 py-1 rounded-full bg-green-700"
                    } else {
                        "inline-block text-xs px-3 py-1 rounded-full bg-yellow-700"
                    }>
                        {if verified { "✓ " } else { "" }} {status_label}
                    </span>
                </div>

                <div class="lg:col-span-2 space-y-6">
                    <ProfileForm />
                    <SecuritySettings />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let user = state.user();

    let name = create_rw_signal(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = create_rw_signal(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let phone = create_rw_signal(user.and_then(|u| u.phone).unwrap_or_default());
    let invalid = create_rw_signal(Vec::<String>::new());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = Form::new()
            .required("name", name.get_untracked())
            .required("email", email.get_untracked())
            .optional("phone", phone.get_untracked());
        if let Err(e) = form.validate() {
            invalid.set(e.fields().to_vec());
            shell.update(|s| s.notify(e.notification()));
            return;
        }
        invalid.set(Vec::new());
        set_saving.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = state.service.update_profile(&form).await;
            set_saving.set(false);
            match result {
                Ok(()) => shell.update(|s| s.profile_updated()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Profile update failed: {}", e).into());
                    state.notify(Notification::error("Update Failed", e.to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate=true class="profile-form bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Personal Information"</h2>
            <TextField label="Full Name" name="name" value=name invalid=invalid />
            <TextField label="Email" name="email" input_type="email" value=email invalid=invalid />
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                <input
                    type="tel"
                    name="phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                />
            </div>
            <button
                type="submit"
                disabled=move || saving.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                <ButtonLabel busy=saving busy_label="Processing..." label="Save Changes" />
            </button>
        </form>
    }
}

#[component]
fn SecuritySettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let two_factor = move || shell.with(|s| s.two_factor_enabled());

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Security"</h2>

            <div class="security-item flex items-center justify-between">
                <div>
                    <p class="font-medium">"Two-Factor Authentication"</p>
                    <p class="text-sm text-gray-400">"Add an extra layer of security to your account"</p>
                </div>
                <button
                    class="px-4 py-2 border border-gray-600 hover:border-primary-500 rounded-lg transition-colors"
                    on:click=move |_| {
                        shell.update(|s| {
                            s.toggle_two_factor();
                        });
                    }
                >
                    {move || if two_factor() { "Disable" } else { "Enable" }}
                </button>
            </div>

            <div class="security-item flex items-center justify-between">
                <div>
                    <p class="font-medium">"Password"</p>
                    <p class="text-sm text-gray-400">"Change the password you sign in with"</p>
                </div>
                <button
                    class="px-4 py-2 border border-gray-600 hover:border-primary-500 rounded-lg transition-colors"
                    on:click=move |_| shell.update(|s| s.password_changed())
                >
                    "Change Password"
                </button>
            </div>
        </div>
    }
}
