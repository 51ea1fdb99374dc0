//! Notification Toast
//!
//! Shows the shell's notifications one at a time, oldest first. Success
//! messages clear after 3 s, warnings and errors after 5 s; the next pending
//! one then takes the slot.

use gloo_timers::callback::Timeout;
use leptos::*;

use sure_circle::notify::Level;
use sure_circle::shell::Notice;

use crate::state::global::GlobalState;

const SUCCESS_TIMEOUT_MS: u32 = 3000;
const ERROR_TIMEOUT_MS: u32 = 5000;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let current = create_memo(move |_| shell.with(|s| s.current_notice().cloned()));
    let waiting = move || shell.with(|s| s.notifications().count().saturating_sub(1));

    create_effect(move |_| {
        if let Some(shown) = current.get() {
            let millis = if shown.notification.level == Level::Success {
                SUCCESS_TIMEOUT_MS
            } else {
                ERROR_TIMEOUT_MS
            };
            let id = shown.id;
            Timeout::new(millis, move || {
                if shell.with_untracked(|s| s.current_notice().map(|n| n.id) == Some(id)) {
                    shell.update(|s| {
                        s.dismiss_notice(id);
                    });
                }
            })
            .forget();
        }
    });

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2" id="success-modal">
            {move || current.get().map(|notice| view! { <ToastMessage notice=notice /> })}
            <Show when=move || { waiting() > 0 }>
                <p class="text-xs text-gray-400 text-right">{move || format!("+{} more", waiting())}</p>
            </Show>
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let Notice { id, notification } = notice;

    let (icon, bg_class) = match notification.level {
        Level::Success => ("✓", "bg-green-600"),
        Level::Warning => ("⚠", "bg-yellow-600"),
        Level::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg max-w-sm \
             transform transition-all duration-300 ease-out",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p id="success-title" class="font-semibold">{notification.title}</p>
                <p id="success-message" class="text-sm">{notification.message}</p>
            </div>
            <button
                id="success-ok"
                class="text-white/80 hover:text-white text-sm font-medium"
                on:click=move |_| {
                    shell.update(|s| {
                        s.dismiss_notice(id);
                    });
                }
            >
                "OK"
            </button>
        </div>
    }
}
