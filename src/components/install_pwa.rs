//! PWA Install Prompt Component
//!
//! Captures the browser's `beforeinstallprompt` event, suppresses the
//! default handling, and replays it on demand through an "Install App"
//! button. The retained event is consumed once.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// Non-standard event fired when the app becomes installable; not in
    /// web-sys, so bound by hand.
    #[wasm_bindgen(extends = web_sys::Event)]
    #[derive(Clone)]
    pub type BeforeInstallPromptEvent;

    #[wasm_bindgen(method)]
    fn prompt(this: &BeforeInstallPromptEvent) -> js_sys::Promise;

    #[wasm_bindgen(method, getter, js_name = userChoice)]
    fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}

#[component]
pub fn InstallPwa() -> impl IntoView {
    let (installable, set_installable) = signal(false);
    // JS event handles are not Send; keep them in a local signal.
    let (deferred, set_deferred) = signal_local(None::<BeforeInstallPromptEvent>);

    // Retain the prompt for manual replay instead of letting the browser
    // show it on its own schedule. The listener lives as long as the app.
    if let Some(window) = web_sys::window() {
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            set_deferred.set(Some(ev.unchecked_into()));
            set_installable.set(true);
        });
        let _ = window.add_event_listener_with_callback(
            "beforeinstallprompt",
            handler.as_ref().unchecked_ref(),
        );
        handler.forget();
    }

    let install = move |_| {
        let Some(event) = deferred.get_untracked() else {
            return;
        };
        set_deferred.set(None);
        spawn_local(async move {
            let _ = event.prompt();
            if let Ok(choice) = JsFuture::from(event.user_choice()).await {
                let outcome = js_sys::Reflect::get(&choice, &"outcome".into())
                    .ok()
                    .and_then(|v| v.as_string());
                if outcome.as_deref() == Some("accepted") {
                    set_installable.set(false);
                }
            }
        });
    };

    view! {
        <Show when=move || installable.get()>
            <button class="install-button" aria-label="Install application" on:click=install>
                "Install App"
            </button>
        </Show>
    }
}
