//! Transient success/error banners.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: Instant,
}

/// Holds at most one notice; a new one replaces the old.
#[derive(Debug)]
pub struct Notices {
    ttl: Duration,
    current: Option<Notice>,
}

impl Notices {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(NoticeKind::Success, message.into(), now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(NoticeKind::Error, message.into(), now);
    }

    fn show(&mut self, kind: NoticeKind, message: String, now: Instant) {
        self.current = Some(Notice {
            kind,
            message,
            expires_at: now + self.ttl,
        });
    }

    /// The notice still visible at `now`. Expired notices are dropped.
    pub fn active(&mut self, now: Instant) -> Option<&Notice> {
        if self.current.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.current = None;
        }
        self.current.as_ref()
    }

    /// When the visible notice disappears, if there is one.
    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_after_ttl() {
        let start = Instant::now();
        let mut notices = Notices::new(Duration::from_secs(3));
        notices.success("User created successfully!", start);

        let visible = notices.active(start + Duration::from_secs(2)).unwrap();
        assert_eq!(visible.kind, NoticeKind::Success);
        assert!(notices.active(start + Duration::from_secs(3)).is_none());
        assert!(notices.expires_at().is_none());
    }

    #[test]
    fn test_new_notice_replaces_previous() {
        let start = Instant::now();
        let mut notices = Notices::new(Duration::from_secs(3));
        notices.success("saved", start);
        notices.error("failed", start + Duration::from_secs(1));

        let visible = notices.active(start + Duration::from_secs(2)).unwrap();
        assert_eq!(visible.kind, NoticeKind::Error);
        assert_eq!(visible.message, "failed");
        assert_eq!(
            notices.expires_at(),
            Some(start + Duration::from_secs(4))
        );
    }
}
