//! Periodic re-synchronization. Peers on the same network converge by
//! polling, not push: listings every 5s, requests every 4-5s depending on
//! the mounted screen, liveness every 3s.
//!
//! Each timer runs its work inside one task loop, so at most one tick is
//! ever in flight per timer; a slow remote call delays the next tick
//! instead of overlapping it. There is no global timer registry: leakage is
//! prevented entirely by scoped teardown, which is why dropping a handle
//! aborts its task.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sharebite_models::{FoodListing, FoodRequest};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::sync::SyncCoordinator;

pub const LISTINGS_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const REQUESTS_POLL_INTERVAL: Duration = Duration::from_secs(4);
pub const EXPLORE_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const LIVENESS_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Handle to one recurring timer. Start on mount/login, stop on
/// unmount/logout.
pub struct PollHandle {
    handle: JoinHandle<()>,
}

impl PollHandle {
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run `tick` immediately and then every `period`. The tick future is
/// awaited before the next tick is scheduled.
pub fn start_poll<F, Fut>(period: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let handle = tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tick().await;
        }
    });
    PollHandle { handle }
}

/// A polled value republished to observers over a watch channel.
pub struct Feed<T> {
    rx: watch::Receiver<T>,
    handle: PollHandle,
}

impl<T: Clone> Feed<T> {
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }

    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }
}

/// Shared feed of the listings collection for the explore screen.
pub fn listings_feed(sync: Arc<SyncCoordinator>, period: Duration) -> Feed<Vec<FoodListing>> {
    let (tx, rx) = watch::channel(Vec::new());
    let handle = start_poll(period, move || {
        let sync = sync.clone();
        let tx = tx.clone();
        async move {
            match sync.list_listings().await {
                Ok(synced) => {
                    let _ = tx.send(synced.value);
                }
                Err(err) => tracing::warn!(error = %err, "listings poll tick failed"),
            }
        }
    });
    Feed { rx, handle }
}

/// Shared feed of the requests collection for the dashboard/explore screens.
pub fn requests_feed(sync: Arc<SyncCoordinator>, period: Duration) -> Feed<Vec<FoodRequest>> {
    let (tx, rx) = watch::channel(Vec::new());
    let handle = start_poll(period, move || {
        let sync = sync.clone();
        let tx = tx.clone();
        async move {
            match sync.list_requests().await {
                Ok(synced) => {
                    let _ = tx.send(synced.value);
                }
                Err(err) => tracing::warn!(error = %err, "requests poll tick failed"),
            }
        }
    });
    Feed { rx, handle }
}

/// Online/offline badge feed; advisory only.
pub fn liveness_feed(sync: Arc<SyncCoordinator>, period: Duration) -> Feed<bool> {
    let (tx, rx) = watch::channel(false);
    let handle = start_poll(period, move || {
        let sync = sync.clone();
        let tx = tx.clone();
        async move {
            let _ = tx.send(sync.liveness().await);
        }
    });
    Feed { rx, handle }
}
