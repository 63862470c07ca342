// 🔔 Notifications - transient toasts
//
// Intake and navigation report to a `Notifier`; the TUI drains a `ToastQueue`,
// tests just collect into a Vec.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Plain confirmation
    Default,

    /// Something the user asked for is not available
    Info,

    /// Rejected input
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification::new("Success", message, Severity::Default)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification::new("Error", message, Severity::Destructive)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification::new(title, message, Severity::Info)
    }
}

/// Notification surface
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

// ============================================================================
// TOAST QUEUE
// ============================================================================

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    ticks_left: u16,
}

/// FIFO of toasts, each visible for a fixed number of UI ticks
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl_ticks: u16,
}

impl ToastQueue {
    pub const DEFAULT_TTL_TICKS: u16 = 20;

    pub fn new(ttl_ticks: u16) -> Self {
        ToastQueue {
            toasts: VecDeque::new(),
            ttl_ticks: ttl_ticks.max(1),
        }
    }

    /// Toast currently on screen (oldest first)
    pub fn current(&self) -> Option<&Notification> {
        self.toasts.front().map(|toast| &toast.notification)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Age the visible toast; drop it once expired
    pub fn tick(&mut self) {
        if let Some(front) = self.toasts.front_mut() {
            front.ticks_left = front.ticks_left.saturating_sub(1);
            if front.ticks_left == 0 {
                self.toasts.pop_front();
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.toasts.pop_front();
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        ToastQueue::new(Self::DEFAULT_TTL_TICKS)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.toasts.push_back(Toast {
            notification,
            ticks_left: self.ttl_ticks,
        });
    }
}
