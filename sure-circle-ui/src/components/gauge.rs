//! Trust Score Gauge
//!
//! Semicircular SVG arc. The fill starts empty and animates to the score
//! one second after mount.

use gloo_timers::callback::Timeout;
use leptos::*;

use sure_circle::format::{gauge_dash_offset, trust_band, GAUGE_DASH_LENGTH};

const ANIMATION_DELAY_MS: u32 = 1000;

#[component]
pub fn TrustGauge(
    /// Element id, e.g. `dashboard-gauge`
    id: &'static str,
    #[prop(into)]
    score: Signal<u16>,
) -> impl IntoView {
    let offset = create_rw_signal(GAUGE_DASH_LENGTH);

    let timer = Timeout::new(ANIMATION_DELAY_MS, move || {
        offset.set(gauge_dash_offset(score.get_untracked()));
    });
    // Unmounting before the delay cancels the animation
    let timer = store_value(Some(timer));
    on_cleanup(move || {
        if let Some(t) = timer.try_update_value(|t| t.take()).flatten() {
            t.cancel();
        }
    });

    view! {
        <div class="flex flex-col items-center">
            <svg viewBox="0 0 200 110" class="w-48">
                <path
                    d="M 20 100 A 80 80 0 0 1 180 100"
                    fill="none"
                    stroke="#374151"
                    stroke-width="14"
                    stroke-linecap="round"
                />
                <path
                    id=id
                    class="gauge-fill"
                    d="M 20 100 A 80 80 0 0 1 180 100"
                    fill="none"
                    stroke="#14b8a6"
                    stroke-width="14"
                    stroke-linecap="round"
                    stroke-dasharray=GAUGE_DASH_LENGTH.to_string()
                    stroke-dashoffset=move || format!("{:.2}", offset.get())
                />
            </svg>
            <div class="-mt-10 text-center">
                <div class="text-3xl font-bold">{move || score.get()}</div>
                <div class="text-sm text-gray-400">{move || trust_band(score.get())}</div>
            </div>
        </div>
    }
}
