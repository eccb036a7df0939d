//! Protein Progress App
//!
//! Root component: loads persisted state once, wires the theme and the
//! debounced persistence effect, and stages optimistic overlay updates
//! around each mutation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AddEntryForm, EntryList, InstallPwa, ProgressBar, SetupScreen, SplashScreen,
};
use crate::models::{self, FoodEntry};
use crate::storage::{self, BrowserStorage, DebouncedWriter, STATE_KEY, WRITE_DEBOUNCE_MS};
use crate::store::{self, AppState, AppStateStoreFields, AppStore};
use crate::theme::{self, Theme};

/// Pacing delay before an optimistic mutation is folded into the
/// authoritative store.
const SETTLE_DELAY_MS: u32 = 300;

#[component]
pub fn App() -> impl IntoView {
    let backend = BrowserStorage::new();

    // Authoritative state, loaded once. A missing or unreadable record
    // starts the app at the setup sentinel.
    let initial = match &backend {
        Some(port) => storage::load_json(port, STATE_KEY, AppState::default()),
        None => AppState::default(),
    };
    let app_store: AppStore = Store::new(initial);

    let (theme, set_theme) = signal(theme::resolve_initial(backend.as_ref()));

    // Transient overlay masking commit latency after add/delete.
    let (optimistic_entries, set_optimistic_entries) = signal(Vec::<FoodEntry>::new());

    let (show_splash, set_show_splash) = signal(true);

    // Write-behind persistence: every store change reschedules the durable
    // write, so only the last value in a quiet period lands. The first run
    // only subscribes; loading must not immediately rewrite the record.
    if let Some(port) = backend.clone() {
        let writer = DebouncedWriter::new(port, STATE_KEY, WRITE_DEBOUNCE_MS);
        Effect::new(move |prev: Option<()>| {
            let snapshot = store::store_snapshot(&app_store);
            if prev.is_some() {
                match serde_json::to_string(&snapshot) {
                    Ok(json) => writer.schedule(json),
                    Err(e) => storage::log_error(&format!("failed to serialize state: {e}")),
                }
            }
        });
    }

    // Apply and persist the theme on every change, first resolution included.
    {
        let backend = backend.clone();
        Effect::new(move |_| {
            let current = theme.get();
            theme::apply(current);
            if let Some(port) = &backend {
                theme::persist(port, current);
            }
        });
    }

    // Derived values over the effective (overlay-or-committed) entries.
    let effective_entries = Signal::derive(move || {
        models::effective_entries(optimistic_entries.get(), app_store.entries().get())
    });
    let total_protein = Memo::new(move |_| models::total_protein(&effective_entries.get()));
    let daily_goal = Memo::new(move |_| app_store.daily_goal().get());
    let progress =
        Memo::new(move |_| models::progress_percent(total_protein.get(), daily_goal.get()));
    let remaining = Memo::new(move |_| models::remaining(total_protein.get(), daily_goal.get()));
    let over_goal = Memo::new(move |_| models::is_over_goal(total_protein.get(), daily_goal.get()));

    // Stage the prepend immediately, commit after the settle delay. Settle
    // timers are fire-and-forget and never coalesced; two mutations inside
    // one window race on wall-clock order.
    let add_entry = move |(name, protein): (String, f64)| {
        let entry = FoodEntry::new(name, protein, js_sys::Date::now() as u64);
        let mut staged = app_store.entries().get_untracked();
        staged.insert(0, entry.clone());
        set_optimistic_entries.set(staged);
        Timeout::new(SETTLE_DELAY_MS, move || {
            store::store_add_entry(&app_store, entry);
            set_optimistic_entries.set(Vec::new());
        })
        .forget();
    };

    let delete_entry = move |id: String| {
        let staged: Vec<FoodEntry> = app_store
            .entries()
            .get_untracked()
            .into_iter()
            .filter(|e| e.id != id)
            .collect();
        set_optimistic_entries.set(staged);
        Timeout::new(SETTLE_DELAY_MS, move || {
            store::store_remove_entry(&app_store, &id);
            set_optimistic_entries.set(Vec::new());
        })
        .forget();
    };

    let set_goal = move |goal: u32| store::store_set_goal(&app_store, goal);

    // Reset is synchronous: back to the sentinel, no staging left behind.
    let reset = move |_| {
        store::store_reset(&app_store);
        set_optimistic_entries.set(Vec::new());
    };

    let toggle_theme = move |_| set_theme.update(|t| *t = t.toggled());

    view! {
        {move || if show_splash.get() {
            view! {
                <SplashScreen on_complete=move |_: ()| set_show_splash.set(false) />
            }
            .into_any()
        } else if daily_goal.get() == 0 {
            view! { <SetupScreen on_complete=set_goal /> }.into_any()
        } else {
            view! {
                <div class="app-container">
                    <header class="app-header">
                        <div class="header-row">
                            <div class="app-title">
                                <span class="app-icon">"🥩"</span>
                                <h1>"Protein Progress"</h1>
                            </div>
                            <div class="header-controls">
                                <button
                                    class="theme-toggle"
                                    aria-label=move || {
                                        format!("Switch to {} mode", theme.get().toggled().as_str())
                                    }
                                    on:click=toggle_theme
                                >
                                    {move || if theme.get() == Theme::Light { "🌙" } else { "☀" }}
                                </button>
                                <button class="reset-button" on:click=reset>"Reset"</button>
                            </div>
                        </div>
                        <ProgressBar
                            progress=Signal::from(progress)
                            current=Signal::from(total_protein)
                            total=Signal::from(daily_goal)
                        />
                        <div class="goal-status">
                            <div class="goal-status-label">
                                {move || if over_goal.get() { "Over Goal By" } else { "Remaining Today" }}
                            </div>
                            <div class=move || {
                                if over_goal.get() { "goal-status-value over" } else { "goal-status-value" }
                            }>
                                {move || if over_goal.get() {
                                    format!("+{:.1}g", total_protein.get() - daily_goal.get() as f64)
                                } else {
                                    format!("{}g", remaining.get())
                                }}
                            </div>
                        </div>
                    </header>

                    <AddEntryForm on_add=add_entry />

                    <main class="main-content">
                        <EntryList entries=effective_entries on_delete=delete_entry />
                    </main>

                    <InstallPwa />
                </div>
            }
            .into_any()
        }}
    }
}
