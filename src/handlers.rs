use crate::clock::parse_key;
use crate::errors::AppError;
use crate::models::{ClickAction, ClickRequest, StatsResponse, TodayResponse};
use crate::state::AppState;
use crate::stats::build_stats_at;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = state.controller.lock().await.snapshot();
    Html(render_index(&today, &state.font))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    Json(state.controller.lock().await.snapshot())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let controller = state.controller.lock().await;
    let today = parse_key(controller.today_key()).unwrap_or_else(|| Local::now().date_naive());
    Json(build_stats_at(today, controller.store().counts()))
}

pub async fn click(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let action = ClickAction::parse(&payload.action)
        .ok_or_else(|| AppError::bad_request("action must be 'add' or 'sub'"))?;

    Ok(Json(apply_click(&state, action).await))
}

pub async fn increase(State(state): State<AppState>) -> Json<TodayResponse> {
    Json(apply_click(&state, ClickAction::Increase).await)
}

pub async fn decrease(State(state): State<AppState>) -> Json<TodayResponse> {
    Json(apply_click(&state, ClickAction::Decrease).await)
}

pub async fn click_add(State(state): State<AppState>) -> Redirect {
    apply_click(&state, ClickAction::Increase).await;
    Redirect::to("/")
}

pub async fn click_sub(State(state): State<AppState>) -> Redirect {
    apply_click(&state, ClickAction::Decrease).await;
    Redirect::to("/")
}

pub async fn exit(State(state): State<AppState>) -> StatusCode {
    info!("exit requested");
    state.exit.notify_one();
    StatusCode::ACCEPTED
}

async fn apply_click(state: &AppState, action: ClickAction) -> TodayResponse {
    let mut controller = state.controller.lock().await;
    controller.apply(action).await;
    controller.snapshot()
}
