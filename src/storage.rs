use crate::errors::AppError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalStore {
    items: BTreeMap<String, String>,
    #[serde(skip)]
    dirty: bool,
}

impl PartialEq for LocalStore {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.get_item(key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return default,
        };

        match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse stored value for key \"{key}\": {err}");
                default
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_item(key, raw),
            Err(err) => error!("failed to serialize value for key \"{key}\": {err}"),
        }
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

pub async fn load_store(path: &Path) -> LocalStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                LocalStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            LocalStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &LocalStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
