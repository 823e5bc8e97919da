use crate::dashboard::Dashboard;
use crate::errors::AppError;
use crate::notify::Notifier;
use crate::storage::{persist_store, LocalStore};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub dashboard: Arc<Mutex<Dashboard>>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(data_path: PathBuf, dashboard: Dashboard, notifier: Notifier) -> Self {
        Self {
            data_path,
            dashboard: Arc::new(Mutex::new(dashboard)),
            notifier,
        }
    }

    pub async fn persist(&self, store: &mut LocalStore) -> Result<(), AppError> {
        if !store.is_dirty() {
            return Ok(());
        }
        persist_store(&self.data_path, store).await?;
        store.mark_clean();
        Ok(())
    }
}
