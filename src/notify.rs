use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, task::JoinHandle, time::sleep};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "var(--toast-bg)",
            Severity::Error => "var(--delete-button-bg)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Toast {
    pub message: String,
    pub visible: bool,
    pub background: Option<&'static str>,
}

#[derive(Default)]
struct Slot {
    toast: Toast,
    generation: u64,
    pending_hide: Option<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            duration,
        }
    }

    pub async fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.notify_for(message, severity, self.duration).await;
    }

    pub async fn notify_for(&self, message: impl Into<String>, severity: Severity, duration: Duration) {
        let mut slot = self.slot.lock().await;
        if let Some(pending) = slot.pending_hide.take() {
            pending.abort();
        }

        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;
        slot.toast = Toast {
            message: message.into(),
            visible: true,
            background: Some(severity.background()),
        };

        let shared = Arc::clone(&self.slot);
        slot.pending_hide = Some(tokio::spawn(async move {
            sleep(duration).await;
            let mut slot = shared.lock().await;
            // a newer toast owns the slot once the generation moves on
            if slot.generation == generation {
                slot.toast.visible = false;
                slot.toast.background = None;
                slot.pending_hide = None;
            }
        }));
    }

    pub async fn current(&self) -> Toast {
        self.slot.lock().await.toast.clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
