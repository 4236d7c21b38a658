use crate::calories::{estimation_prompt, extract};
use crate::errors::AppError;
use crate::gateway::Provider;
use crate::models::{
    AskRequest, GenerateRequest, HistoryQuery, HistoryResponse, LogWorkoutRequest, TextResponse,
    WorkoutEntry,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

pub const PROVIDER_HEADER: &str = "x-ai-provider";
const RAW_GENERATE_MODEL: &str = "llama3";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(
        state.config.default_provider.unwrap_or(Provider::Local),
    ))
}

pub async fn ask_ai(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, AppError> {
    let prompt = payload
        .ok()
        .and_then(|Json(body)| body.prompt)
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| AppError::bad_request("Prompt is required"))?;

    let provider = request_provider(&state, &headers);
    let response = state.gateway.generate(&prompt, provider).await?;
    Ok(Json(TextResponse { response }))
}

pub async fn calculate_calories(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LogWorkoutRequest>, JsonRejection>,
) -> Result<Json<WorkoutEntry>, AppError> {
    let missing = || AppError::bad_request("Owner, activity and duration are required");
    let Json(body) = payload.map_err(|_| missing())?;
    let owner = body.owner.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let activity_name = body.activity_name.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let duration_minutes = body
        .duration_minutes
        .filter(|d| !d.is_blank())
        .ok_or_else(missing)?;

    let provider = request_provider(&state, &headers);
    let prompt = estimation_prompt(&activity_name, &duration_minutes.to_string());
    let text = state.gateway.generate(&prompt, provider).await?;

    let entry = WorkoutEntry {
        owner,
        activity_name,
        duration_minutes,
        calories_estimate: extract(&text),
        logged_at: Utc::now().timestamp_millis(),
    };
    state.store.append(&entry).await?;

    info!(
        owner = %entry.owner,
        activity = %entry.activity_name,
        provider = provider.as_str(),
        "workout logged"
    );
    Ok(Json(entry))
}

pub async fn raw_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, AppError> {
    let (prompt, model) = match payload {
        Ok(Json(GenerateRequest {
            prompt: Some(prompt),
            model,
        })) if !prompt.is_empty() => (prompt, model.filter(|m| !m.is_empty())),
        _ => return Err(AppError::bad_request("Prompt is required")),
    };

    let model = model.as_deref().unwrap_or(RAW_GENERATE_MODEL);
    let response = state
        .gateway
        .local()
        .generate(&prompt, Some(model))
        .await
        .inspect_err(|err| {
            warn!(model, error = %err, details = err.details(), "raw generation failed");
        })?;
    Ok(Json(TextResponse { response }))
}

pub async fn workout_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, AppError> {
    let owner = query
        .ok()
        .and_then(|Query(q)| q.owner)
        .filter(|owner| !owner.is_empty())
        .ok_or_else(|| AppError::bad_request("Owner is required"))?;

    let history = state.store.list_by_owner(&owner).await;
    Ok(Json(HistoryResponse { history }))
}

pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

fn request_provider(state: &AppState, headers: &HeaderMap) -> Provider {
    let header = headers
        .get(PROVIDER_HEADER)
        .and_then(|value| value.to_str().ok());
    Provider::resolve(header, state.config.default_provider)
}
