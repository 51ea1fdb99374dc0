//! Login / Signup Modal
//!
//! Both forms validate through the shell first; only a complete form
//! reaches the simulated service.

use leptos::*;

use sure_circle::service::CircleService;
use sure_circle::session::AuthMode;
use sure_circle::shell::Modal;
use sure_circle::validation::Form;

use crate::components::{ButtonLabel, TextField};
use crate::state::global::GlobalState;

/// Modal host: renders whichever auth modal the shell has open
#[component]
pub fn AuthModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let modal = create_memo(move |_| shell.with(|s| s.modal()));

    view! {
        {move || modal.get().map(|modal| {
            let mode = match modal {
                Modal::Login => AuthMode::Login,
                Modal::Signup => AuthMode::Signup,
            };
            view! {
                <div
                    class="fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-4"
                    // Backdrop click closes; clicks inside the dialog stop here
                    on:click=move |_| shell.update(|s| s.close_modal())
                >
                    <div
                        id=format!("{}-modal", if mode == AuthMode::Login { "login" } else { "signup" })
                        class="bg-gray-800 rounded-xl p-6 w-full max-w-md shadow-xl relative"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            class="modal-close absolute top-3 right-4 text-gray-400 hover:text-white text-xl"
                            on:click=move |_| shell.update(|s| s.close_modal())
                        >
                            "×"
                        </button>
                        <AuthForm mode=mode />
                    </div>
                </div>
            }
        })}
    }
}

#[component]
fn AuthForm(mode: AuthMode) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let invalid = create_rw_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let build_form = move || match mode {
        AuthMode::Login => Form::new()
            .required("email", email.get_untracked())
            .required("password", password.get_untracked()),
        AuthMode::Signup => Form::new()
            .required("name", name.get_untracked())
            .required("email", email.get_untracked())
            .required("phone", phone.get_untracked())
            .required("password", password.get_untracked()),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = build_form();
        let mut checked = Ok(());
        shell.update(|s| checked = s.begin_auth(&form));
        if let Err(e) = checked {
            invalid.set(e.fields().to_vec());
            return;
        }
        invalid.set(Vec::new());
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = state.service.authenticate(mode, &form).await;
            set_submitting.set(false);
            match result {
                Ok(user) => state.complete_auth(mode, user),
                Err(e) => {
                    web_sys::console::error_1(&format!("Authentication failed: {}", e).into());
                    state.notify(sure_circle::Notification::error("Sign In Failed", e.to_string()));
                }
            }
        });
    };

    let (title, submit_label, switch_prompt, switch_label) = match mode {
        AuthMode::Login => ("Welcome Back", "Login", "Don't have an account?", "Sign up"),
        AuthMode::Signup => ("Join Sure Circle", "Create Account", "Already have an account?", "Log in"),
    };

    view! {
        <h2 class="text-2xl font-bold mb-6">{title}</h2>
        <form
            id=if mode == AuthMode::Login { "login-form" } else { "signup-form" }
            on:submit=on_submit
            novalidate=true
            class="space-y-4"
        >
            {(mode == AuthMode::Signup).then(|| view! {
                <TextField label="Full Name" name="name" value=name invalid=invalid />
            })}
            <TextField label="Email" name="email" input_type="email" value=email invalid=invalid />
            {(mode == AuthMode::Signup).then(|| view! {
                <TextField label="Phone" name="phone" input_type="tel" value=phone invalid=invalid />
            })}
            <TextField label="Password" name="password" input_type="password" value=password invalid=invalid />

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                <ButtonLabel busy=submitting busy_label="Processing..." label=submit_label />
            </button>
        </form>

        <p class="text-sm text-gray-400 mt-4 text-center">
            {switch_prompt}
            " "
            <a
                href="#"
                id=if mode == AuthMode::Login { "switch-to-signup" } else { "switch-to-login" }
                class="text-primary-400 hover:underline"
                on:click=move |ev| {
                    ev.prevent_default();
                    shell.update(|s| s.switch_modal());
                }
            >
                {switch_label}
            </a>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::provide_global_state;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_empty_login_is_checked_by_the_shell() {
        let shell = Rc::new(Cell::new(None));
        let slot = Rc::clone(&shell);
        mount_to_body(move || {
            let state = provide_global_state();
            slot.set(Some(state.shell));
            view! { <AuthForm mode=AuthMode::Login /> }
        });

        let form = document()
            .get_element_by_id("login-form")
            .unwrap()
            .dyn_into::<web_sys::HtmlFormElement>()
            .unwrap();
        assert!(form.has_attribute("novalidate"));

        // Browser constraint validation would swallow this submit
        form.request_submit().unwrap();

        let shell = shell.get().unwrap();
        let title = shell.with_untracked(|s| s.latest_notification().map(|n| n.title.clone()));
        assert_eq!(title.as_deref(), Some("Validation Error"));
        assert!(!shell.with_untracked(|s| s.is_authenticated()));

        let email = form.query_selector("input[name=email]").unwrap().unwrap();
        assert!(email.class_name().contains("border-red-500"));
    }
}
