// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Background pollers that react to what the player does to a panel.
//!
//! Every watchdog runs on its own task: sleep, act, repeat. A watchdog
//! stops when it reports itself terminated or when its cancellation token
//! fires. A memory error skips the tick; the next tick tries again.

pub mod bridge;
pub mod jungle;
pub mod power;
pub mod symbols;

pub use bridge::BridgeWatchdog;
pub use jungle::JungleWatchdog;
pub use power::{PowerWatchdog, Trigger};
pub use symbols::{PanelState, SymbolWatchdog};

use crate::memory::MemoryError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub trait Watchdog: Send {
    /// One poll of the host process.
    fn action(&mut self) -> Result<(), MemoryError>;

    /// How long to sleep before the next poll.
    fn sleep_time(&self) -> Duration;

    fn is_terminated(&self) -> bool;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Poll `watchdog` until it terminates or `token` is cancelled.
pub async fn run(mut watchdog: Box<dyn Watchdog>, token: CancellationToken) {
    let name = watchdog.name().to_string();
    info!(watchdog = %name, "watchdog started");
    while !watchdog.is_terminated() {
        tokio::select! {
            _ = token.cancelled() => {
                debug!(watchdog = %name, "cancelled");
                break;
            }
            _ = tokio::time::sleep(watchdog.sleep_time()) => {
                if let Err(error) = watchdog.action() {
                    warn!(watchdog = %name, %error, "skipping tick");
                }
            }
        }
    }
    info!(watchdog = %name, "watchdog stopped");
}

/// Start `watchdog` on its own task.
pub fn spawn(watchdog: Box<dyn Watchdog>, token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(run(watchdog, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fails every other tick and stops itself after `limit` ticks.
    struct Countdown {
        ticks: Arc<AtomicUsize>,
        limit: usize,
    }

    impl Watchdog for Countdown {
        fn action(&mut self) -> Result<(), MemoryError> {
            let ticks = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;
            if ticks % 2 == 0 {
                Err(MemoryError::Poisoned)
            } else {
                Ok(())
            }
        }

        fn sleep_time(&self) -> Duration {
            Duration::from_millis(1)
        }

        fn is_terminated(&self) -> bool {
            self.ticks.load(Ordering::SeqCst) >= self.limit
        }
    }

    #[tokio::test]
    async fn test_runs_until_self_terminated() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let watchdog = Countdown {
            ticks: ticks.clone(),
            limit: 5,
        };
        spawn(Box::new(watchdog), CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(ticks.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_cancel_stops_the_loop() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let watchdog = Countdown {
            ticks: ticks.clone(),
            limit: usize::MAX,
        };
        let token = CancellationToken::new();
        let handle = spawn(Box::new(watchdog), token.clone());
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
        handle.await.unwrap();
        let stopped_at = ticks.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), stopped_at);
    }

    #[test]
    fn test_default_name_is_type_name() {
        let watchdog = Countdown {
            ticks: Arc::new(AtomicUsize::new(0)),
            limit: 0,
        };
        assert!(watchdog.name().ends_with("Countdown"));
    }
}
