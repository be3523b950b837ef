//! Animated skill progress bar.
//!
//! The bar fills once, the first time at least half of it scrolls into view,
//! after a short delay that lets layout settle.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

use leptos::prelude::*;

/// Inline width for a bar: empty until revealed, then `<percent>%`.
pub fn bar_width(percent: u8, revealed: bool) -> String {
    if revealed { format!("{}%", percent.min(100)) } else { "0%".to_owned() }
}

#[component]
pub fn SkillBar(name: &'static str, percent: u8) -> impl IntoView {
    let bar_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);

    #[cfg(feature = "csr")]
    Effect::new(move || {
        use crate::consts::{SKILL_BAR_DELAY_MS, SKILL_BAR_ROOT_MARGIN, SKILL_BAR_THRESHOLD};
        use crate::util::one_shot::{ObserveOptions, observe_once};

        let Some(bar) = bar_ref.get() else {
            return;
        };
        let options = ObserveOptions { threshold: Some(SKILL_BAR_THRESHOLD), root_margin: Some(SKILL_BAR_ROOT_MARGIN) };
        let result = observe_once(&bar, &options, move |_| {
            gloo_timers::callback::Timeout::new(SKILL_BAR_DELAY_MS, move || {
                let _ = revealed.try_set(true);
            })
            .forget();
        });
        if let Err(e) = result {
            leptos::logging::warn!("skill bar observer failed: {e}");
            revealed.set(true);
        }
    });

    view! {
        <div class="skill-item">
            <div class="skill-info">
                <span class="skill-name">{name}</span>
                <span class="skill-percent">{format!("{percent}%")}</span>
            </div>
            <div class="skill-bar">
                <div
                    class="skill-progress"
                    data-width=percent.to_string()
                    style:width=move || bar_width(percent, revealed.get())
                    node_ref=bar_ref
                ></div>
            </div>
        </div>
    }
}
