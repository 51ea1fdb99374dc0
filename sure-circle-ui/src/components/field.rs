//! Form Fields
//!
//! Labelled inputs bound to a string signal. A field is highlighted while
//! its name is in the `invalid` list and clears itself on the next edit.

use leptos::*;

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white border \
                           focus:border-primary-500 focus:outline-none";

fn border(invalid: RwSignal<Vec<String>>, name: &'static str) -> impl Fn() -> String {
    move || {
        let error = invalid.with(|fields| fields.iter().any(|f| f == name));
        format!(
            "{} {}",
            INPUT_CLASS,
            if error { "border-red-500" } else { "border-gray-600" }
        )
    }
}

fn clear(invalid: RwSignal<Vec<String>>, name: &'static str) {
    if invalid.with_untracked(|fields| fields.iter().any(|f| f == name)) {
        invalid.update(|fields| fields.retain(|f| f != name));
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    invalid: RwSignal<Vec<String>>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                name=name
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    clear(invalid, name);
                }
                class=border(invalid, name)
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    invalid: RwSignal<Vec<String>>,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <textarea
                name=name
                rows=4
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    clear(invalid, name);
                }
                class=border(invalid, name)
            />
        </div>
    }
}
