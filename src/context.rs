//! Application Context
//!
//! Shared state provided via Leptos Context API. Currently this is the
//! toast queue both feature views report through.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Show a transient notification
    pub fn toast(&self, title: &str, message: &str) {
        self.push(title, message, ToastLevel::Info);
    }

    /// Show a transient error notification
    pub fn toast_error(&self, title: &str, message: &str) {
        self.push(title, message, ToastLevel::Error);
    }

    /// Remove a toast before its timer fires
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, title: &str, message: &str, level: ToastLevel) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);

        let toast = Toast {
            id,
            title: title.to_string(),
            message: message.to_string(),
            level,
        };
        self.set_toasts.update(|toasts| toasts.push(toast));

        // Auto-dismiss; a manual dismiss in the meantime is a no-op here
        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_DISMISS_MS, move || {
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}
