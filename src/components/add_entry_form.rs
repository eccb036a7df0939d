//! Add Entry Form Component
//!
//! Form for logging a food item with its protein amount. The protein field
//! filters raw text down to digits and dots as the user types; parsing is
//! parseFloat-lenient on submit.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::format::{filter_protein_input, parse_protein};

/// Delay before focus returns to the name field after a submit.
const REFOCUS_DELAY_MS: u32 = 10;

#[component]
pub fn AddEntryForm(#[prop(into)] on_add: Callback<(String, f64)>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (protein, set_protein) = signal(String::new());
    let name_input: NodeRef<html::Input> = NodeRef::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let food = name.get();
        if food.is_empty() {
            return;
        }
        let Some(grams) = parse_protein(&protein.get()) else {
            return;
        };
        on_add.run((food, grams));
        set_name.set(String::new());
        set_protein.set(String::new());

        // Refocus once the cleared value has rendered, for rapid entry runs.
        Timeout::new(REFOCUS_DELAY_MS, move || {
            if let Some(input) = name_input.get_untracked() {
                let _ = input.focus();
            }
        })
        .forget();
    };

    view! {
        <form class="add-entry-form" on:submit=submit>
            <input
                type="text"
                class="entry-name-input"
                placeholder="Food name"
                autocomplete="off"
                required
                node_ref=name_input
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <div class="protein-input-wrap">
                <input
                    type="text"
                    class="protein-input"
                    inputmode="decimal"
                    placeholder="0"
                    required
                    prop:value=move || protein.get()
                    on:input=move |ev| set_protein.set(filter_protein_input(&event_target_value(&ev)))
                />
                <span class="protein-unit">"g"</span>
            </div>
            <button type="submit">"Add"</button>
        </form>
    }
}
