//! Simulated payment-processor round trips. A real integration would call
//! the external processor's create/get/cancel APIs and a webhook receiver;
//! here the delay and the response are mocked. Each round trip runs as an
//! explicit task that honors cancellation if the caller tears it down
//! before completion.

use crate::models::subscription::{SubscriptionState, SubscriptionStatus};
use chrono::{DateTime, Local, Months};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// An in-flight round trip to the mocked processor.
pub struct PendingCheckout {
    cancel: Arc<AtomicBool>,
    rx: Receiver<SubscriptionStatus>,
    handle: JoinHandle<()>,
}

impl PendingCheckout {
    /// Request cancellation; the task exits without producing a result.
    pub fn abort(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Wait for the round trip to settle. None when it was aborted first.
    pub fn finish(self) -> Option<SubscriptionStatus> {
        let _ = self.handle.join();
        self.rx.try_recv().ok()
    }
}

/// Create-subscription: on success the account becomes active for one
/// month from "now".
pub fn subscribe(delay: Duration, now: DateTime<Local>) -> PendingCheckout {
    let period_end = now.checked_add_months(Months::new(1));
    run_task(delay, move || SubscriptionStatus {
        is_subscribed: true,
        status: Some(SubscriptionState::Active),
        current_period_end: period_end,
        cancel_at_period_end: false,
    })
}

/// Cancel-subscription: access continues until the period end.
pub fn cancel_at_period_end(current: SubscriptionStatus, delay: Duration) -> PendingCheckout {
    run_task(delay, move || SubscriptionStatus {
        cancel_at_period_end: true,
        ..current
    })
}

/// Undo a pending cancellation.
pub fn reactivate(current: SubscriptionStatus, delay: Duration) -> PendingCheckout {
    run_task(delay, move || SubscriptionStatus {
        cancel_at_period_end: false,
        ..current
    })
}

fn run_task<F>(delay: Duration, respond: F) -> PendingCheckout
where
    F: FnOnce() -> SubscriptionStatus + Send + 'static,
{
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        // sleep in short slices so cancellation stays responsive
        let slice = Duration::from_millis(25);
        let mut slept = Duration::ZERO;
        while slept < delay {
            if flag.load(Ordering::Relaxed) {
                return;
            }
            thread::sleep(slice.min(delay - slept));
            slept += slice;
        }

        if flag.load(Ordering::Relaxed) {
            return;
        }
        let _ = tx.send(respond());
    });

    PendingCheckout { cancel, rx, handle }
}
