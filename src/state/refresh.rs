//! Refresh epoch bus
//!
//! A process-wide publish/invalidate channel: successful mutations bump a
//! monotonically increasing epoch, and any interested view re-fetches when it
//! observes a value it has not seen. Views subscribe and unsubscribe on their
//! own lifecycle by holding or dropping a listener.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Publisher side of the refresh epoch
#[derive(Debug, Clone)]
pub struct RefreshBus {
    tx: Arc<watch::Sender<u64>>,
}

impl RefreshBus {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    /// Current epoch value
    pub fn epoch(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Publish a new epoch, waking every subscribed listener once
    pub fn trigger(&self) -> u64 {
        self.tx.send_modify(|epoch| *epoch += 1);
        let epoch = self.epoch();
        debug!(epoch = epoch, "Refresh triggered");
        epoch
    }

    pub fn subscribe(&self) -> RefreshListener {
        RefreshListener {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscriber side; dropping it unsubscribes
#[derive(Debug, Clone)]
pub struct RefreshListener {
    rx: watch::Receiver<u64>,
}

impl RefreshListener {
    /// Epoch most recently published, whether or not it has been seen
    pub fn epoch(&self) -> u64 {
        *self.rx.borrow()
    }

    /// Wait for an epoch this listener has not seen yet.
    ///
    /// Resolves only on genuinely new values, never on re-observation of the
    /// current one. Returns `None` once every publisher is gone.
    pub async fn changed(&mut self) -> Option<u64> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Mark the current epoch as seen without fetching
    pub fn mark_seen(&mut self) {
        self.rx.borrow_and_update();
    }
}
