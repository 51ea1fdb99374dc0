//! Scroll Reveal
//!
//! Fades children in the first time at least 10% of them enters the
//! viewport.

use leptos::html::Div;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const THRESHOLD: f64 = 0.1;

#[component]
pub fn Reveal(
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<Div>();
    let visible = create_rw_signal(false);

    node.on_load(move |el| {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let seen = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if seen {
                    visible.set(true);
                    observer.disconnect();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&THRESHOLD.into());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer.observe(&el),
            // No observer support: show immediately
            Err(_) => visible.set(true),
        }
        callback.forget();
    });

    view! {
        <div
            node_ref=node
            class=format!("reveal hover-lift {}", class)
            class:visible=move || visible.get()
        >
            {children()}
        </div>
    }
}
