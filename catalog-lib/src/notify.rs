//! Transient leveled notifications with auto-dismiss.

use std::time::{Duration, Instant};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Severity level of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id, usable for dismissal.
    pub id: u64,
    /// Severity level.
    pub level: ToastLevel,
    /// Message text.
    pub message: String,
}

struct Entry {
    toast: Toast,
    /// `None` keeps the toast until it is dismissed explicitly.
    deadline: Option<Instant>,
}

/// Collects toasts and drops them when their timeout passes.
///
/// Like the other frame-loop state in this workspace there is no ambient
/// timer: expired entries are pruned whenever [`active`](ToastBus::active)
/// is called, which hosts do once per frame.
#[derive(Default)]
pub struct ToastBus {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ToastBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a toast with an explicit timeout. A zero timeout keeps the
    /// toast until dismissed. Returns the toast id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, timeout: Duration) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let deadline = (!timeout.is_zero()).then(|| Instant::now() + timeout);
        self.entries.push(Entry {
            toast: Toast {
                id,
                level,
                message: message.into(),
            },
            deadline,
        });
        id
    }

    /// Pushes a success toast with the default 3 second timeout.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message, DEFAULT_TIMEOUT)
    }

    /// Pushes an error toast with the default 3 second timeout.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message, DEFAULT_TIMEOUT)
    }

    /// Pushes a warning toast with the default 3 second timeout.
    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Warning, message, DEFAULT_TIMEOUT)
    }

    /// Pushes an info toast with the default 3 second timeout.
    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message, DEFAULT_TIMEOUT)
    }

    /// Removes a toast by id before its timeout.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.toast.id != id);
    }

    /// Prunes expired toasts and returns the ones still visible.
    pub fn active(&mut self) -> Vec<Toast> {
        self.active_at(Instant::now())
    }

    fn active_at(&mut self, now: Instant) -> Vec<Toast> {
        self.entries
            .retain(|e| e.deadline.is_none_or(|deadline| now < deadline));
        self.entries.iter().map(|e| e.toast.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_appear_in_push_order_with_increasing_ids() {
        let mut bus = ToastBus::new();
        bus.success("saved");
        bus.error("failed");

        let active = bus.active();
        assert_eq!(active.len(), 2);
        assert!(active[0].id < active[1].id);
        assert_eq!(active[0].level, ToastLevel::Success);
        assert_eq!(active[1].message, "failed");
    }

    #[test]
    fn dismiss_removes_one_toast() {
        let mut bus = ToastBus::new();
        let keep = bus.info("stays");
        let drop = bus.warning("goes");

        bus.dismiss(drop);

        let active = bus.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, keep);
    }

    #[test]
    fn expired_toasts_are_pruned() {
        let mut bus = ToastBus::new();
        bus.push(ToastLevel::Info, "short lived", Duration::from_secs(3));

        let later = Instant::now() + Duration::from_secs(4);
        assert!(bus.active_at(later).is_empty());
    }

    #[test]
    fn zero_timeout_keeps_the_toast_until_dismissed() {
        let mut bus = ToastBus::new();
        let id = bus.push(ToastLevel::Error, "sticky", Duration::ZERO);

        let later = Instant::now() + Duration::from_secs(3600);
        assert_eq!(bus.active_at(later).len(), 1);

        bus.dismiss(id);
        assert!(bus.active().is_empty());
    }
}
