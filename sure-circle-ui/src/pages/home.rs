//! Home Page
//!
//! Landing hero, how-it-works steps and testimonials.

use leptos::*;

use crate::components::Reveal;
use crate::state::global::GlobalState;

const STEPS: [(&str, &str, &str); 4] = [
    ("👥", "Join a Circle", "Find a pool of people like you: colleagues, classmates or neighbours."),
    ("💰", "Contribute Monthly", "Small monthly contributions build a shared protection fund."),
    ("📄", "File a Claim", "Upload your evidence and request reimbursement when something goes wrong."),
    ("🗳️", "Members Vote", "Your circle reviews and votes on every claim transparently."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "My phone screen cracked two weeks after joining. The circle approved my claim in three days.",
        "Priya S., College Hostel Gadget Protection",
    ),
    (
        "Cheaper than any policy I was offered, and I know exactly where my money goes.",
        "Arjun P., Tech Professionals Mobile Insurance",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let shell = state.shell;

    view! {
        <div class="space-y-16">
            // Hero
            <section class="text-center py-12">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Insurance, the way communities used to do it"
                </h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">
                    "Pool funds with people you trust, cover each other's losses and vote on every claim."
                </p>
                <div class="flex justify-center space-x-4">
                    <button
                        id="get-started-btn"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                        on:click=move |_| shell.update(|s| s.get_started())
                    >
                        "Get Started"
                    </button>
                    <button
                        id="learn-more-btn"
                        class="px-6 py-3 border border-gray-600 hover:border-gray-400 rounded-lg font-semibold transition-colors"
                        on:click=move |_| shell.update(|s| s.learn_more())
                    >
                        "Learn More"
                    </button>
                </div>
            </section>

            // How it works
            <section>
                <h2 class="text-2xl font-bold text-center mb-8">"How It Works"</h2>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    {STEPS.into_iter().map(|(icon, title, text)| view! {
                        <Reveal class="step bg-gray-800 rounded-xl p-6 text-center">
                            <div class="text-4xl mb-3">{icon}</div>
                            <h3 class="font-semibold mb-2">{title}</h3>
                            <p class="text-sm text-gray-400">{text}</p>
                        </Reveal>
                    }).collect_view()}
                </div>
            </section>

            // Testimonials
            <section>
                <h2 class="text-2xl font-bold text-center mb-8">"What Members Say"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {TESTIMONIALS.into_iter().map(|(quote, author)| view! {
                        <Reveal class="testimonial bg-gray-800 rounded-xl p-6">
                            <p class="italic text-gray-300 mb-4">"“" {quote} "”"</p>
                            <p class="text-sm text-gray-500">{author}</p>
                        </Reveal>
                    }).collect_view()}
                </div>
            </section>

            // Call to action
            <section class="bg-gray-800 rounded-xl p-10 text-center">
                <h2 class="text-2xl font-bold mb-4">"Ready to join a circle?"</h2>
                <button
                    id="join-now-btn"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                    on:click=move |_| shell.update(|s| s.join_now())
                >
                    "Join Now"
                </button>
            </section>
        </div>
    }
}
