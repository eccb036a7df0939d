//! UI Components
//!
//! Reusable Leptos components.

mod add_entry_form;
mod entry_list;
mod install_pwa;
mod progress_bar;
mod setup_screen;
mod splash_screen;

pub use add_entry_form::AddEntryForm;
pub use entry_list::EntryList;
pub use install_pwa::InstallPwa;
pub use progress_bar::ProgressBar;
pub use setup_screen::SetupScreen;
pub use splash_screen::SplashScreen;
