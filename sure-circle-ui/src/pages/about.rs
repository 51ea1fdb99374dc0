//! About Page

use leptos::*;

use crate::components::Faq;

const FAQ: &[(&str, &str)] = &[
    (
        "How is Sure Circle different from traditional insurance?",
        "Members pool their own money and decide on claims together. There is no insurer taking a margin between you and your cover.",
    ),
    (
        "What is a trust score?",
        "A number between 300 and 900 that reflects your history in the community. Pools can require a minimum score to join.",
    ),
    (
        "How are claims approved?",
        "Each pool chooses a governance mode: majority vote, peer review or external arbitration. Members vote on claims until the required number of votes is reached.",
    ),
    (
        "What happens to unused funds?",
        "Surplus at the end of a cycle is refunded to members in proportion to their contributions.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-10">
            <section>
                <h1 class="text-3xl font-bold mb-4">"About Sure Circle"</h1>
                <p class="text-gray-400">
                    "Sure Circle brings back community-based protection. Small groups of people with shared risks \
                     contribute to a common pool, and the pool pays out when a member has a genuine loss."
                </p>
            </section>

            <section>
                <h2 class="text-2xl font-semibold mb-4">"Frequently Asked Questions"</h2>
                <Faq items=FAQ />
            </section>
        </div>
    }
}
