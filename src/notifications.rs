//! User-visible notices.
//!
//! Notices are the host's "toast" layer: short messages that expire after a
//! variant-dependent duration. Time is advanced explicitly so the same clock
//! drives notices, deferred tasks and marker animations.

use std::time::Duration;

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            NoticeVariant::Success | NoticeVariant::Info => Duration::from_secs(3),
            NoticeVariant::Warning => Duration::from_secs(4),
            NoticeVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeVariant::Success => "✓",
            NoticeVariant::Info => "ℹ",
            NoticeVariant::Warning => "⚠",
            NoticeVariant::Error => "✗",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub variant: NoticeVariant,
    pub duration: Duration,
    age: Duration,
}

impl Notice {
    fn new(message: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            age: Duration::ZERO,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.duration
    }

    /// Fraction of the display time left, in `[0, 1]`.
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let left = self.duration.saturating_sub(self.age);
        left.as_secs_f32() / self.duration.as_secs_f32()
    }
}

/// Queue of visible notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeCenter {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id assigned to the notice.
    pub fn push(&mut self, mut notice: Notice) -> u64 {
        self.next_id += 1;
        notice.id = self.next_id;
        tracing::debug!(variant = ?notice.variant, message = %notice.message, "Notice");
        self.notices.push(notice);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn count(&self) -> usize {
        self.notices.len()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    /// Age every notice by `elapsed` and drop the expired ones.
    pub fn advance(&mut self, elapsed: Duration) {
        for notice in &mut self.notices {
            notice.age += elapsed;
        }
        self.notices.retain(|n| !n.is_expired());
    }
}
