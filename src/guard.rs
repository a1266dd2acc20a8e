use std::sync::atomic::{AtomicBool, Ordering};

/// Single-flight flag for trip generation.
///
/// At most one submission may hold the guard at a time. Release happens in
/// `Drop`, so the flag clears on every exit path of the holding call.
#[derive(Debug, Default)]
pub struct RequestGuard {
    in_flight: AtomicBool,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission currently holds the guard.
    pub fn is_set(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the guard. Returns `None` while another submission is in flight.
    pub fn try_acquire(&self) -> Option<GuardRelease<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GuardRelease { guard: self })
    }
}

/// Clears the guard when dropped.
#[must_use = "dropping the release immediately would clear the guard at once"]
pub struct GuardRelease<'a> {
    guard: &'a RequestGuard,
}

impl Drop for GuardRelease<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}
