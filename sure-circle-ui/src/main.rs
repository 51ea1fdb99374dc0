//! Sure Circle UI
//!
//! Peer-to-peer insurance pool demo built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. All state transitions live in the `sure-circle`
//! core crate's `Shell`; this crate renders it, wires DOM events to it and
//! runs the simulated service calls. Navigation mirrors the active page in
//! the URL fragment, so the static host only has to serve `index.html`.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod util;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
