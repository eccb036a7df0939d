//! Progress Bar Component
//!
//! Visual progress toward the daily goal; switches color and annotates the
//! label once the goal is exceeded.

use leptos::prelude::*;

use crate::models;

#[component]
pub fn ProgressBar(
    /// Percentage of the goal reached (may exceed 100)
    progress: Signal<f64>,
    /// Grams consumed so far
    current: Signal<f64>,
    /// Goal in grams
    total: Signal<u32>,
) -> impl IntoView {
    let over_goal = move || models::is_over_goal(current.get(), total.get());
    // The fill never grows past the track; the label carries the overshoot.
    let display_progress = move || progress.get().min(100.0);
    let over_percent = move || {
        let goal = total.get() as f64;
        ((current.get() - goal) / goal * 100.0).round()
    };

    view! {
        <div class="progress-bar">
            <div class="progress-track">
                <div
                    class=move || if over_goal() { "progress-fill over" } else { "progress-fill" }
                    style:width=move || format!("{}%", display_progress())
                ></div>
            </div>
            <div class="progress-labels">
                <span class=move || if over_goal() { "progress-label over" } else { "progress-label" }>
                    {move || format!("{}% ({}g)", progress.get().round(), current.get())}
                    {move || over_goal().then(|| format!(" (+{}% over goal)", over_percent()))}
                </span>
                <span class="progress-goal">{move || format!("{}g goal", total.get())}</span>
            </div>
        </div>
    }
}
