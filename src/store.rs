//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the only authoritative copy of tracker state; the optimistic overlay in
//! `app.rs` merely masks it briefly around mutations.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::FoodEntry;

/// Whole-app persistent state with field-level reactivity.
///
/// `daily_goal == 0` is the onboarding sentinel: the UI routes to the
/// setup screen whenever it holds. Serialized camelCase to match the
/// existing localStorage record.
#[derive(Clone, Debug, Default, PartialEq, Store, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Daily protein goal in grams (0 = unset)
    pub daily_goal: u32,
    /// All entries, newest first
    pub entries: Vec<FoodEntry>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Clone the current state out of the store. Reads are tracked, so the
/// persistence effect reruns on any field change.
pub fn store_snapshot(store: &AppStore) -> AppState {
    AppState {
        daily_goal: store.daily_goal().get(),
        entries: store.entries().get(),
    }
}

/// Prepend a committed entry (newest first)
pub fn store_add_entry(store: &AppStore, entry: FoodEntry) {
    store.entries().write().insert(0, entry);
}

/// Remove a committed entry by ID
pub fn store_remove_entry(store: &AppStore, id: &str) {
    store.entries().write().retain(|e| e.id != id);
}

/// Complete setup with a positive goal
pub fn store_set_goal(store: &AppStore, goal: u32) {
    store.daily_goal().set(goal);
}

/// Return to the onboarding sentinel state
pub fn store_reset(store: &AppStore) {
    store.daily_goal().set(0);
    store.entries().set(Vec::new());
}
