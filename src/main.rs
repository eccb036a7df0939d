//! Protein Progress Entry Point

mod app;
mod components;
mod format;
mod models;
mod storage;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
