pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ticker;
pub mod tips;
pub mod ui;

pub use app::{router, spawn_background_progress};
pub use config::AppConfig;
pub use dashboard::Dashboard;
pub use state::AppState;
pub use storage::{load_store, resolve_data_path};
