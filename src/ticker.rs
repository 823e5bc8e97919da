use std::future::Future;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

pub struct Ticker {
    shutdown_tx: broadcast::Sender<()>,
    task_handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F, Fut>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        let task_handle = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            // first tick one period out; ticks missed during a slow callback are dropped
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = timer.tick() => on_tick().await,
                    _ = shutdown_rx.recv() => {
                        debug!("ticker received shutdown signal");
                        break;
                    }
                }
            }
        });

        info!("started ticker with {}ms period", period.as_millis());
        Self {
            shutdown_tx,
            task_handle: Some(task_handle),
        }
    }

    pub async fn stop(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.task_handle.take() {
            if let Err(err) = handle.await {
                tracing::error!("ticker task failed: {err}");
            }
        }
        info!("ticker stopped");
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}
