use crate::handlers;
use crate::state::AppState;
use crate::ticker::Ticker;
use axum::{routing::{get, post}, Router};
use std::time::Duration;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add/steps", post(handlers::add_steps))
        .route("/add/water", post(handlers::add_water))
        .route("/theme/toggle", post(handlers::toggle_theme_form))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/metrics", post(handlers::add_metric))
        .route("/api/theme", post(handlers::toggle_theme))
        .route("/api/navigate", post(handlers::navigate))
        .route("/api/scroll", post(handlers::record_scroll))
        .with_state(state)
}

pub fn spawn_background_progress(state: AppState, period: Duration) -> Ticker {
    Ticker::spawn(period, move || {
        let state = state.clone();
        async move { handlers::background_tick(&state).await }
    })
}
