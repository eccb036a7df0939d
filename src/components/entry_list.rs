//! Entry List Component
//!
//! Scrollable list of logged entries, newest first. Renders whichever list
//! the parent hands it — overlay or committed.

use leptos::prelude::*;

use crate::format::time_ago;
use crate::models::FoodEntry;

#[component]
pub fn EntryList(
    entries: Signal<Vec<FoodEntry>>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="entry-list">
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! {
                    <div class="entry-list-empty">
                        "No entries yet. Add your first protein source above!"
                    </div>
                }
            >
                <For
                    each=move || entries.get()
                    key=|entry| entry.id.clone()
                    children=move |entry| {
                        let id = entry.id.clone();
                        view! {
                            <div class="entry-card">
                                <div class="entry-info">
                                    <h3 class="entry-name">{entry.name}</h3>
                                    <p class="entry-time">
                                        {time_ago(js_sys::Date::now() as u64, entry.timestamp)}
                                    </p>
                                </div>
                                <div class="entry-actions">
                                    <span class="entry-protein">{format!("{}g", entry.protein)}</span>
                                    <button
                                        class="entry-delete"
                                        aria-label="Delete entry"
                                        on:click=move |_| on_delete.run(id.clone())
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
