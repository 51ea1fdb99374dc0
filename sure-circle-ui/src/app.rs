//! App Root Component
//!
//! Global providers, fragment routing and window-level listeners.

use gloo_timers::callback::Interval;
use leptos::*;

use sure_circle::router::{fragment_id, HashSync, Page};
use wasm_bindgen::JsValue;

use crate::components::{AuthModal, Nav, Toast};
use crate::pages::{About, Claims, Dashboard, Home, Pools, Profile};
use crate::state::global::{provide_global_state, today, GlobalState};
use crate::util::debounce;

/// Activity labels are recomputed this often while signed in
const REFRESH_INTERVAL_MS: u32 = 30_000;

const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    init_fragment_routing(&state);
    init_resize(&state);
    init_refresh(&state);

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8">
                <PageSection page=Page::Home><Home /></PageSection>
                <PageSection page=Page::About><About /></PageSection>
                <PageSection page=Page::Dashboard><Dashboard /></PageSection>
                <PageSection page=Page::Pools><Pools /></PageSection>
                <PageSection page=Page::Claims><Claims /></PageSection>
                <PageSection page=Page::Profile><Profile /></PageSection>
            </main>

            <Footer />

            <AuthModal />
            <Toast />
        </div>
    }
}

/// Mounts its page only while the shell shows it, so page initializers
/// run on every visit
#[component]
fn PageSection(page: Page, children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let children = store_value(children);

    view! {
        <Show when=move || state.is_showing(page)>
            <section id=format!("{}-page", page.id()) class="page">
                {children.with_value(|children| children())}
            </section>
        </Show>
    }
}

/// Keep the URL fragment and the shell in step, both directions
fn init_fragment_routing(state: &GlobalState) {
    let shell = state.shell;

    // Initial load
    let hash = window().location().hash().unwrap_or_default();
    shell.update(|s| s.handle_fragment(&hash));

    // Set while the shell handles a hashchange, consumed by the effect
    let from_history = store_value(false);

    // Shell -> fragment
    create_effect(move |_| {
        let fragment = shell.with(|s| s.fragment().to_string());
        let replace = from_history.get_value();
        from_history.set_value(false);

        let current = window().location().hash().unwrap_or_default();
        let result = match HashSync::plan(&fragment, &current, replace) {
            HashSync::Keep => Ok(()),
            HashSync::Push(hash) => window().location().set_hash(&hash),
            HashSync::Replace(hash) => window().history().and_then(|history| {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&hash))
            }),
        };
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
    });

    // Fragment -> shell (back/forward, typed URLs)
    window_event_listener(ev::hashchange, move |_| {
        let hash = window().location().hash().unwrap_or_default();
        let unchanged = shell.with_untracked(|s| s.fragment() == fragment_id(&hash));
        if !unchanged {
            from_history.set_value(true);
            shell.update(|s| s.handle_fragment(&hash));
        }
    });
}

fn init_resize(state: &GlobalState) {
    let shell = state.shell;
    let layout = state.layout;

    let on_resize = debounce(RESIZE_DEBOUNCE_MS, move |width: f64| {
        let mut next = layout.get_untracked();
        shell.update(|s| next = s.resize(width));
        layout.set(next);
    });

    window_event_listener(ev::resize, move |_| {
        if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
            on_resize(width);
        }
    });
}

fn init_refresh(state: &GlobalState) {
    let shell = state.shell;
    let day = state.today;

    Interval::new(REFRESH_INTERVAL_MS, move || {
        if shell.with_untracked(|s| s.is_authenticated()) {
            day.set(today());
        }
    })
    .forget();
}

#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6 px-4">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between text-sm text-gray-400 gap-2">
                <span>"© Sure Circle. Community-powered protection."</span>
                <div class="flex space-x-4">
                    <a href="#about" class="hover:text-white"
                        on:click=move |ev| {
                            ev.prevent_default();
                            state.navigate(Page::About);
                        }
                    >
                        "About"
                    </a>
                    <span>"Demo data only. No real money moves."</span>
                </div>
            </div>
        </footer>
    }
}
