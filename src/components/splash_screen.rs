//! Splash Screen Component

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long the splash stays up before the app is revealed.
const SPLASH_DISPLAY_MS: u32 = 2000;

/// Full-screen branding shown while the app starts up. Fires `on_complete`
/// once after a fixed display time.
#[component]
pub fn SplashScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    Timeout::new(SPLASH_DISPLAY_MS, move || on_complete.run(())).forget();

    view! {
        <div class="splash-screen">
            <div class="splash-logo">
                <img src="public/splash-logo.svg" alt="Protein Progress" />
            </div>
            <h1 class="splash-title">"Protein Progress"</h1>
            <div class="splash-loading-bar"></div>
        </div>
    }
}
