//! Persistent Storage
//!
//! localStorage access behind a small port trait, plus the debounced
//! write-behind writer that persists the app state record.

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

/// localStorage key for the serialized app state record.
pub const STATE_KEY: &str = "protein-tracker-state";
/// localStorage key for the theme preference string.
pub const THEME_KEY: &str = "theme";

/// Quiet period after the last state change before the durable write fires.
pub const WRITE_DEBOUNCE_MS: u32 = 1000;

/// Key-value durable storage.
///
/// Keeps callers off the `window.localStorage` global so tests can inject
/// an in-memory fake.
pub trait StoragePort {
    fn read(&self, key: &str) -> Result<Option<String>, String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage` backend.
#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// None when no window exists or storage access is denied; the app then
    /// runs in-memory only for the session.
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl StoragePort for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        self.storage.get_item(key).map_err(|e| format!("{e:?}"))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage
            .set_item(key, value)
            .map_err(|e| format!("{e:?}"))
    }
}

/// Read and parse a JSON record, falling back to `default` when the value
/// is missing, malformed, or unreadable. Failures are logged, never
/// surfaced.
pub fn load_json<T: serde::de::DeserializeOwned>(
    port: &impl StoragePort,
    key: &str,
    default: T,
) -> T {
    match port.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log_error(&format!("failed to parse stored {key}: {e}"));
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            log_error(&format!("failed to read {key}: {e}"));
            default
        }
    }
}

pub fn log_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

/// Write-behind writer for a single durable record.
///
/// Every `schedule` replaces the pending payload and restarts the debounce
/// timer, so a burst of updates coalesces into one durable write carrying
/// the final value. Dropping the writer cancels a pending timer without
/// flushing; a teardown inside the debounce window loses that write.
pub struct DebouncedWriter<P> {
    port: P,
    key: &'static str,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    delay_ms: u32,
    pending: Rc<RefCell<Option<String>>>,
    #[cfg(target_arch = "wasm32")]
    timer: RefCell<Option<Timeout>>,
}

impl<P: StoragePort + Clone + 'static> DebouncedWriter<P> {
    pub fn new(port: P, key: &'static str, delay_ms: u32) -> Self {
        Self {
            port,
            key,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            #[cfg(target_arch = "wasm32")]
            timer: RefCell::new(None),
        }
    }

    /// Stage `payload` as the next durable value and restart the timer.
    pub fn schedule(&self, payload: String) {
        *self.pending.borrow_mut() = Some(payload);
        #[cfg(target_arch = "wasm32")]
        {
            let port = self.port.clone();
            let key = self.key;
            let pending = Rc::clone(&self.pending);
            // Replacing the handle drops (cancels) any timer still in flight.
            self.timer.borrow_mut().replace(Timeout::new(
                self.delay_ms,
                move || write_pending(&port, key, &pending),
            ));
        }
    }

    /// Write the staged payload through the port, if any. On wasm the
    /// debounce timer drives this; tests call it directly.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn flush(&self) {
        write_pending(&self.port, self.key, &self.pending);
    }
}

fn write_pending<P: StoragePort>(port: &P, key: &str, pending: &RefCell<Option<String>>) {
    if let Some(payload) = pending.borrow_mut().take() {
        if let Err(e) = port.write(key, &payload) {
            log_error(&format!("failed to write {key}: {e}"));
        }
    }
}
