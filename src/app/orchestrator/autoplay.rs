// SPDX-License-Identifier: MPL-2.0
//! Carousel auto-play timer handle.
//!
//! The timer itself is an iced subscription derived from the active
//! [`AutoPlayHandle`]. Stopping drops the handle, which both removes the
//! subscription and invalidates any tick already in flight: a tick is only
//! applied if it carries the handle that is currently active.

/// Identifies one run of the auto-play timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoPlayHandle(u64);

#[derive(Debug, Default)]
pub struct AutoPlay {
    active: Option<AutoPlayHandle>,
    issued: u64,
}

impl AutoPlay {
    /// Starts the timer, or keeps the running one.
    pub fn start(&mut self) -> AutoPlayHandle {
        if let Some(handle) = self.active {
            return handle;
        }
        self.issued += 1;
        let handle = AutoPlayHandle(self.issued);
        self.active = Some(handle);
        handle
    }

    /// Cancels the timer. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> Option<AutoPlayHandle> {
        self.active
    }

    /// Whether a tick issued for `handle` may still act.
    #[must_use]
    pub fn accepts(&self, handle: AutoPlayHandle) -> bool {
        self.active == Some(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_twice_keeps_the_same_handle() {
        let mut autoplay = AutoPlay::default();
        let first = autoplay.start();
        assert_eq!(autoplay.start(), first);
    }

    #[test]
    fn restart_issues_a_fresh_handle() {
        let mut autoplay = AutoPlay::default();
        let first = autoplay.start();
        assert!(autoplay.stop());
        let second = autoplay.start();
        assert_ne!(first, second);
        assert!(!autoplay.accepts(first));
        assert!(autoplay.accepts(second));
    }

    #[test]
    fn stopped_timer_accepts_nothing() {
        let mut autoplay = AutoPlay::default();
        let handle = autoplay.start();
        autoplay.stop();
        assert!(!autoplay.is_playing());
        assert!(!autoplay.accepts(handle));
        assert!(!autoplay.stop());
    }
}
