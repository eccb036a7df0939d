//! Setup Screen Component
//!
//! First-run onboarding: choose the daily protein goal. Shown whenever the
//! goal still holds its zero sentinel.

use leptos::prelude::*;

#[component]
pub fn SetupScreen(#[prop(into)] on_complete: Callback<u32>) -> impl IntoView {
    let (goal, set_goal) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Only a positive integer completes setup; anything else leaves the
        // sentinel in place.
        if let Ok(parsed) = goal.get().parse::<u32>() {
            if parsed > 0 {
                on_complete.run(parsed);
            }
        }
    };

    view! {
        <div class="setup-screen">
            <div class="setup-icon">"🥩"</div>
            <h1 class="setup-title">"Protein Progress"</h1>
            <p class="setup-description">
                "Track your daily protein intake and reach your fitness goals. Set your daily target and start tracking!"
            </p>
            <form class="setup-form" on:submit=submit>
                <label for="protein-goal">"Daily Protein Goal (grams)"</label>
                <input
                    type="number"
                    id="protein-goal"
                    placeholder="Enter your daily goal"
                    min="1"
                    required
                    prop:value=move || goal.get()
                    on:input=move |ev| set_goal.set(event_target_value(&ev))
                />
                <button type="submit">"Get Started"</button>
            </form>
        </div>
    }
}
