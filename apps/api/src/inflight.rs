use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Admits one simulated-latency operation at a time. There is no queue: a
/// caller that finds the slot taken is turned away.
#[derive(Debug, Default)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
}

/// Releases the slot when dropped, including on early return or panic.
/// Owned, so it can move into a spawned task with the work it guards.
#[derive(Debug)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| InFlightGuard {
                busy: self.busy.clone(),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
