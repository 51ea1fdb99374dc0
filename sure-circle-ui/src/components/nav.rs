//! Navigation Component
//!
//! Public and member navigation bars with the mobile menu toggle.

use leptos::*;

use sure_circle::router::Page;
use sure_circle::session::Navbar;
use sure_circle::shell::Modal;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    let navbar = create_memo(move |_| shell.with(|s| s.session().navbar()));
    let menu_open = create_memo(move |_| shell.with(|s| s.menu_open()));

    view! {
        <nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <NavLink page=Page::Home class="flex items-center space-x-3">
                        <span class="text-2xl">"🛡️"</span>
                        <span class="text-xl font-bold text-white">"Sure Circle"</span>
                    </NavLink>

                    // Mobile menu toggle
                    <button
                        class="md:hidden p-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        aria-label="Toggle menu"
                        on:click=move |_| shell.update(|s| s.toggle_menu())
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>

                    // Navigation links
                    <div class=move || {
                        let base = "md:flex md:items-center md:space-x-1 absolute md:static top-16 left-0 right-0 \
                                    bg-gray-800 md:bg-transparent p-4 md:p-0 space-y-2 md:space-y-0";
                        if menu_open.get() {
                            format!("{} flex flex-col", base)
                        } else {
                            format!("{} hidden", base)
                        }
                    }>
                        {move || match navbar.get() {
                            Navbar::Public => view! { <PublicLinks /> }.into_view(),
                            Navbar::Member => view! { <MemberLinks /> }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn PublicLinks() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    view! {
        <NavLink page=Page::Home class=LINK_CLASS>"Home"</NavLink>
        <NavLink page=Page::About class=LINK_CLASS>"About"</NavLink>
        <button
            id="login-btn"
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white border border-gray-600 hover:border-gray-400 transition-colors"
            on:click=move |_| shell.update(|s| s.open_modal(Modal::Login))
        >
            "Login"
        </button>
        <button
            id="signup-btn"
            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium transition-colors"
            on:click=move |_| shell.update(|s| s.open_modal(Modal::Signup))
        >
            "Sign Up"
        </button>
    }
}

#[component]
fn MemberLinks() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let user = create_memo(move |_| shell.with(|s| s.user().cloned()));

    view! {
        <NavLink page=Page::Dashboard class=LINK_CLASS>"Dashboard"</NavLink>
        <NavLink page=Page::Pools class=LINK_CLASS>"Pools"</NavLink>
        <NavLink page=Page::Claims class=LINK_CLASS>"Claims"</NavLink>
        <NavLink page=Page::Profile class=LINK_CLASS>"Profile"</NavLink>

        {move || user.get().map(|user| view! {
            <div class="flex items-center space-x-2 px-3">
                <img id="user-avatar" src=user.avatar.clone() alt="" class="w-8 h-8 rounded-full" />
                <span id="user-name" class="text-sm">{user.first_name().to_string()}</span>
                <span class="text-xs px-2 py-0.5 rounded-full bg-primary-700 text-white">
                    {user.trust_score}
                </span>
            </div>
        })}

        <button
            id="logout-btn"
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            on:click=move |_| state.logout()
        >
            "Logout"
        </button>
    }
}

const LINK_CLASS: &str =
    "block px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors";

/// `data-page` link: routes through the shell so protected pages prompt
/// for login while anonymous
#[component]
pub fn NavLink(
    page: Page,
    #[prop(into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;
    let active = move || shell.with(|s| s.is_showing(page));

    view! {
        <a
            href=format!("#{}", page.id())
            data-page=page.id()
            class=class
            class:text-white=active
            on:click=move |ev| {
                ev.prevent_default();
                state.navigate(page);
            }
        >
            {children()}
        </a>
    }
}
