use crate::errors::AppError;
use crate::models::{AddMetricRequest, DashboardSnapshot, NavigateRequest, ScrollRequest};
use crate::notify::Severity;
use crate::state::AppState;
use crate::storage::LocalStore;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tracing::{error, warn};

const SAVE_FAILED_MESSAGE: &str = "Could not save your progress.";

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = snapshot(&state).await?;
    Ok(Html(render_index(&snapshot)))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardSnapshot>, AppError> {
    Ok(Json(snapshot(&state).await?))
}

pub async fn add_metric(
    State(state): State<AppState>,
    Json(payload): Json<AddMetricRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let kind = payload.kind.trim();
    if kind.is_empty() {
        return Err(AppError::bad_request("kind must not be empty"));
    }

    apply_add(&state, kind).await?;
    Ok(Json(snapshot(&state).await?))
}

pub async fn add_steps(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_add(&state, "steps").await?;
    Ok(Redirect::to("/"))
}

pub async fn add_water(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_add(&state, "water").await?;
    Ok(Redirect::to("/"))
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<DashboardSnapshot>, AppError> {
    apply_toggle(&state).await?;
    Ok(Json(snapshot(&state).await?))
}

pub async fn toggle_theme_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_toggle(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let section = payload.section.trim().trim_start_matches('#');
    if section.is_empty() {
        return Err(AppError::bad_request("section must not be empty"));
    }

    state.dashboard.lock().await.navigate(section);
    Ok(Json(snapshot(&state).await?))
}

pub async fn record_scroll(
    State(state): State<AppState>,
    Json(payload): Json<ScrollRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    state.dashboard.lock().await.record_scroll(payload.offset);
    Ok(Json(snapshot(&state).await?))
}

pub async fn background_tick(state: &AppState) {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.tick();
    if let Err(err) = state.persist(dashboard.store_mut()).await {
        error!("failed to persist background progress: {err}");
    }
}

async fn apply_add(state: &AppState, kind: &str) -> Result<(), AppError> {
    let message = {
        let mut dashboard = state.dashboard.lock().await;
        let message = dashboard.add(kind);
        persist_or_notify(state, dashboard.store_mut()).await?;
        message
    };

    match message {
        Some(message) => state.notifier.notify(message, Severity::Success).await,
        None => warn!("ignoring unknown metric kind \"{kind}\""),
    }
    Ok(())
}

async fn apply_toggle(state: &AppState) -> Result<(), AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.toggle_theme();
    persist_or_notify(state, dashboard.store_mut()).await
}

async fn persist_or_notify(state: &AppState, store: &mut LocalStore) -> Result<(), AppError> {
    if let Err(err) = state.persist(store).await {
        error!("failed to persist dashboard: {err}");
        state.notifier.notify(SAVE_FAILED_MESSAGE, Severity::Error).await;
        return Err(err);
    }
    Ok(())
}

async fn snapshot(state: &AppState) -> Result<DashboardSnapshot, AppError> {
    let toast = state.notifier.current().await;
    let mut dashboard = state.dashboard.lock().await;
    let snapshot = dashboard.snapshot(toast);
    state.persist(dashboard.store_mut()).await?;
    Ok(snapshot)
}
