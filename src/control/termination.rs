//! Termination policies - when a follow invocation should keep running
//!
//! The follow controller polls its policy once per cycle, before issuing the
//! next command. Policies never touch hardware; adding a new stopping
//! condition means implementing [`TerminationPolicy`], not modifying the
//! controller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait TerminationPolicy {
    fn should_continue(&mut self) -> bool;
}

/// Never terminates on its own; the invocation ends only through a fault.
pub struct Forever;

impl TerminationPolicy for Forever {
    fn should_continue(&mut self) -> bool {
        true
    }
}

/// Continue while wall-clock time since the first poll is strictly below
/// the bound. The clock starts on the first cycle of the invocation, not at
/// construction.
pub struct BoundedDuration {
    duration: Duration,
    started: Option<Instant>,
}

impl BoundedDuration {
    pub fn new(duration: Duration) -> Self {
        Self { duration, started: None }
    }

    pub fn from_ms(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl TerminationPolicy for BoundedDuration {
    fn should_continue(&mut self) -> bool {
        let started = self.started.get_or_insert_with(Instant::now);
        started.elapsed() < self.duration
    }
}

/// Continue until an external party raises the shared flag. The flag can be
/// set from another thread, e.g. an operator abort button.
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl TerminationPolicy for CancelFlag {
    fn should_continue(&mut self) -> bool {
        !self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forever_always_continues() {
        let mut policy = Forever;
        for _ in 0..1000 {
            assert!(policy.should_continue());
        }
    }

    #[test]
    fn zero_bound_stops_immediately() {
        let mut policy = BoundedDuration::new(Duration::ZERO);
        assert!(!policy.should_continue());
    }

    #[test]
    fn bound_expires_after_elapsed_time() {
        let mut policy = BoundedDuration::from_ms(30);
        assert!(policy.should_continue(), "fresh policy should continue");

        std::thread::sleep(Duration::from_millis(40));
        assert!(!policy.should_continue(), "expired policy should stop");
    }

    #[test]
    fn clock_starts_at_first_poll() {
        let mut policy = BoundedDuration::from_ms(50);
        // Construction time must not count toward the bound
        std::thread::sleep(Duration::from_millis(60));
        assert!(policy.should_continue());
    }

    #[test]
    fn cancel_flag_stops_when_raised() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut policy = CancelFlag::new(flag.clone());

        assert!(policy.should_continue());
        flag.store(true, Ordering::Relaxed);
        assert!(!policy.should_continue());
    }
}
