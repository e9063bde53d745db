//! Notification Service
//!
//! Transient status messages ("toasts"). The center only tracks which
//! messages are active; the browser adapter schedules their dismissal.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// CSS class on the toast element
    pub fn class_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-times-circle",
            NotificationKind::Info => "fas fa-info-circle",
            NotificationKind::Warning => "fas fa-exclamation-circle",
        }
    }
}

pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    /// How long the toast stays up before it is dismissed
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenter {
    active: Vec<Notification>,
    next_id: NotificationId,
    duration_ms: u32,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOAST_DURATION_MS)
    }
}

impl NotificationCenter {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            active: Vec::new(),
            next_id: 1,
            duration_ms,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Notification {
            id,
            kind,
            message: message.into(),
            duration_ms: self.duration_ms,
        });
        id
    }

    /// Returns false if the toast was already gone
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    /// Active toasts, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}
