//! Transient user notifications: toasts overlaid on the window and alert
//! banners shown inline at the top of the page.

use crate::utils::timer::Deadline;

/// How long a toast stays on screen, user interaction or not.
pub const TOAST_SECS: f64 = 3.0;

/// Delay before banners present at startup are dismissed.
pub const BANNER_DISMISS_SECS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    deadline: Deadline,
}

/// Fixed-position notifications that expire [`TOAST_SECS`] after creation.
#[derive(Default)]
pub struct ToastRack {
    toasts: Vec<Toast>,
}

impl ToastRack {
    pub fn push(&mut self, severity: Severity, message: impl Into<String>, now: f64) {
        self.toasts.push(Toast {
            severity,
            message: message.into(),
            deadline: Deadline::after(now, TOAST_SECS),
        });
    }

    /// Drops every toast whose lifetime has elapsed.
    pub fn prune(&mut self, now: f64) {
        self.toasts.retain(|toast| !toast.deadline.expired(now));
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
    deadline: Option<Deadline>,
}

/// Alert banners at the top of the page.
///
/// Banners present when the auto-dismiss schedule runs get a deadline
/// [`BANNER_DISMISS_SECS`] out; banners pushed afterwards stay until closed
/// by hand.
#[derive(Default)]
pub struct BannerRack {
    banners: Vec<Banner>,
    scheduled: bool,
}

impl BannerRack {
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.banners.push(Banner {
            severity,
            message: message.into(),
            deadline: None,
        });
    }

    /// Schedules auto-dismissal for the banners present right now. Runs once;
    /// later calls are no-ops.
    pub fn schedule_initial_dismissal(&mut self, now: f64) {
        if self.scheduled {
            return;
        }
        self.scheduled = true;
        for banner in &mut self.banners {
            banner.deadline = Some(Deadline::after(now, BANNER_DISMISS_SECS));
        }
    }

    pub fn prune(&mut self, now: f64) {
        self.banners
            .retain(|banner| !matches!(&banner.deadline, Some(d) if d.expired(now)));
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.banners.len() {
            self.banners.remove(index);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Banner> {
        self.banners.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_without_manual_dismissal() {
        let mut toasts = ToastRack::default();
        toasts.push(Severity::Success, "saved", 0.0);

        toasts.prune(2.9);
        assert!(!toasts.is_empty());

        toasts.prune(3.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn toast_can_be_dismissed_early() {
        let mut toasts = ToastRack::default();
        toasts.push(Severity::Info, "first", 0.0);
        toasts.push(Severity::Error, "second", 0.0);

        toasts.dismiss(0);
        let remaining: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["second"]);
    }

    #[test]
    fn startup_banners_auto_dismiss_after_delay() {
        let mut banners = BannerRack::default();
        banners.push(Severity::Info, "welcome");

        banners.schedule_initial_dismissal(1.0);
        banners.prune(5.9);
        assert!(!banners.is_empty());

        banners.prune(6.0);
        assert!(banners.is_empty());
    }

    #[test]
    fn late_banners_are_not_auto_dismissed() {
        let mut banners = BannerRack::default();
        banners.schedule_initial_dismissal(0.0);

        banners.push(Severity::Warning, "added after load");
        banners.prune(1000.0);
        assert!(!banners.is_empty());

        // A second schedule call must not adopt them either.
        banners.schedule_initial_dismissal(1000.0);
        banners.prune(2000.0);
        assert!(!banners.is_empty());
    }
}
