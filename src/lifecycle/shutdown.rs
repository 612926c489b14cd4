//! Programmatic stop handle for running echo servers.
//!
//! `EchoServer::run` drains on whichever comes first: an OS signal or this
//! handle firing. Tests and embedders use the handle; the binary only keeps
//! one alive so its server has a receiver to wait on.

use tokio::sync::broadcast;

/// Stop handle shared by every server started from it.
///
/// Take a receiver with `subscribe` before calling `EchoServer::run`; one
/// `trigger` then stops all of them. Cloned handles share the same channel.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `EchoServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to drain. A no-op when none is running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
