//! Transient notices
//!
//! Short self-expiring messages such as the "enter content" validation prompt.

use std::time::{Duration, Instant};

use crate::constants;

/// A notice with its own expiry
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: constants::notice::DURATION,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Remaining lifetime as 1.0 (fresh) down to 0.0 (expired)
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / total).max(0.0)
    }
}

/// Queue of notices
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice. A notice with the same message restarts its timer instead
    /// of stacking a duplicate.
    pub fn push(&mut self, notice: Notice) {
        if let Some(existing) = self
            .notices
            .iter_mut()
            .find(|n| n.message == notice.message)
        {
            existing.created_at = notice.created_at;
            return;
        }

        while self.notices.len() >= constants::notice::MAX_VISIBLE {
            self.notices.remove(0);
        }
        self.notices.push(notice);
    }

    /// Remove expired notices, returns true if any were removed
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired_at(now));
        self.notices.len() != before
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Most recent first
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().rev()
    }
}
