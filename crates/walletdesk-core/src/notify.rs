//! Toast notifications shown on top of every page

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4_000);
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub created_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Toasts {
    entries: VecDeque<Toast>,
    duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            duration,
        }
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&mut self, kind: ToastKind, text: String) {
        if self.entries.len() == MAX_TOASTS {
            self.entries.pop_front();
        }
        self.entries.push_back(Toast {
            kind,
            text,
            created_at: Instant::now(),
        });
    }

    /// Drops toasts older than the configured duration.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.entries
            .retain(|t| now.saturating_duration_since(t.created_at) < duration);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.entries.back()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
