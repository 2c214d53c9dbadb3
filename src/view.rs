//! Two-variant view routing with staged page transitions.
//!
//! The router owns which top-level page is active (main listing or a single
//! post) and a small transition state machine: the outgoing page fades out
//! first, then the incoming page is mounted and fades in while sliding up a
//! row. The phases are mutually exclusive, so at most one page is ever
//! entering or exiting and only the settled page is interactive.

use std::time::{Duration, Instant};

/// How long the outgoing page stays visible (dimmed) before the swap.
pub const EXIT_DURATION: Duration = Duration::from_millis(250);
/// How long the incoming page fades in after the swap.
pub const ENTER_DURATION: Duration = Duration::from_millis(500);

/// Which top-level page is active. `Post` holds the id of the selected post;
/// callers only ever pass ids of catalog members (documented precondition,
/// not validated here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Main,
    Post(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Outgoing page fading out; the target is not mounted yet.
    Exiting { to: ViewState, since: Instant },
    /// Incoming page fading in and sliding up.
    Entering { since: Instant },
}

pub struct ViewRouter {
    current: ViewState,
    phase: Phase,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            current: ViewState::Main,
            phase: Phase::Idle,
        }
    }

    /// The page currently mounted. During an exit phase this is still the
    /// outgoing page; the target mounts when the exit completes.
    pub fn current(&self) -> ViewState {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// The page the router is heading towards (the transition target if one
    /// is in flight, otherwise the current page).
    fn destination(&self) -> ViewState {
        match self.phase {
            Phase::Exiting { to, .. } => to,
            _ => self.current,
        }
    }

    /// Navigate to a post. Selecting the post already displayed (or already
    /// being navigated to) is a no-op, so re-clicking the open article never
    /// triggers a redundant transition.
    ///
    /// Returns true when a navigation actually started.
    pub fn select_post(&mut self, post_id: u64, now: Instant) -> bool {
        self.navigate(ViewState::Post(post_id), now)
    }

    /// Navigate back to the main page. Not gated on which post is open, but
    /// still a no-op when the main page is already the destination.
    pub fn go_home(&mut self, now: Instant) -> bool {
        self.navigate(ViewState::Main, now)
    }

    fn navigate(&mut self, target: ViewState, now: Instant) -> bool {
        if self.destination() == target {
            return false;
        }
        match self.phase {
            // A page is already on its way out: redirect the pending swap
            // instead of mounting a second entrant.
            Phase::Exiting { since, .. } => {
                self.phase = Phase::Exiting { to: target, since };
            }
            _ => {
                self.phase = Phase::Exiting {
                    to: target,
                    since: now,
                };
            }
        }
        true
    }

    /// Advance the transition clock. Returns the newly mounted page when the
    /// exit phase just completed, so the caller can reset scroll state (the
    /// viewport-origin reset accompanies every navigation).
    pub fn tick(&mut self, now: Instant) -> Option<ViewState> {
        match self.phase {
            Phase::Exiting { to, since } => {
                if now.duration_since(since) >= EXIT_DURATION {
                    self.current = to;
                    self.phase = Phase::Entering { since: now };
                    Some(to)
                } else {
                    None
                }
            }
            Phase::Entering { since } => {
                if now.duration_since(since) >= ENTER_DURATION {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Idle => None,
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}
