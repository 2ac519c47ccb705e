use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    generations::{self, models::generation_result::GenerationResult},
    params::dtos::edit_params_dto::EditParamsDto,
    AppState,
};

use super::{
    dtos::{paste_dto::PasteDto, stroke_dto::StrokeDto},
    models::pane_view::PaneView,
    service,
};

pub async fn get_panes(State(state): State<AppState>) -> Json<Vec<PaneView>> {
    Json(service::get_panes(&state).await)
}

pub async fn add_pane(State(state): State<AppState>) -> (StatusCode, Json<PaneView>) {
    (StatusCode::CREATED, Json(service::add_pane(&state).await))
}

pub async fn get_pane_by_id(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PaneView>, ApiError> {
    match service::get_pane_by_id(id, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

pub async fn edit_params_by_id(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonFromRequest(dto): JsonFromRequest<EditParamsDto>,
) -> Result<Json<PaneView>, ApiError> {
    match service::edit_params_by_id(id, &dto, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

pub async fn begin_stroke(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonFromRequest(dto): JsonFromRequest<StrokeDto>,
) -> Result<Json<PaneView>, ApiError> {
    validate_stroke(&dto)?;

    match service::begin_stroke(id, &dto, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

pub async fn extend_stroke(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonFromRequest(dto): JsonFromRequest<StrokeDto>,
) -> Result<Json<PaneView>, ApiError> {
    validate_stroke(&dto)?;

    match service::extend_stroke(id, &dto, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

pub async fn end_stroke(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PaneView>, ApiError> {
    match service::end_stroke(id, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

pub async fn clear(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PaneView>, ApiError> {
    match service::clear(id, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

pub async fn get_sketch(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Response, ApiError> {
    let png = service::get_sketch_png(id, &state).await?;

    Ok((
        [(header::CONTENT_TYPE, mime::IMAGE_PNG.as_ref())],
        Bytes::from(png),
    )
        .into_response())
}

pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<GenerationResult>, ApiError> {
    match generations::service::generate_for_pane(id, &state).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err(e),
    }
}

pub async fn generate_all(State(state): State<AppState>) -> (StatusCode, Json<Vec<u32>>) {
    let tasks = generations::service::generate_all(&state).await;
    let ids = tasks.iter().map(|task| task.pane_id).collect();
    tokio::spawn(generations::service::log_outcomes(tasks));

    (StatusCode::ACCEPTED, Json(ids))
}

pub async fn copy(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    service::copy(id, &state).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn paste(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    dto: Result<JsonFromRequest<PasteDto>, ApiError>,
) -> Result<Response, ApiError> {
    let dto = paste_body(dto)?;

    match service::paste(id, &dto, &state).await? {
        Some(pane) => Ok(Json(pane).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

pub async fn paste_into_focused(
    State(state): State<AppState>,
    dto: Result<JsonFromRequest<PasteDto>, ApiError>,
) -> Result<Response, ApiError> {
    let dto = paste_body(dto)?;

    match service::paste_into_focused(&dto, &state).await? {
        Some(pane) => Ok(Json(pane).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

pub async fn focus(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PaneView>, ApiError> {
    match service::focus(id, &state).await {
        Ok(pane) => Ok(Json(pane)),
        Err(e) => Err(e),
    }
}

fn validate_stroke(dto: &StrokeDto) -> Result<(), ApiError> {
    match dto.validate() {
        Ok(_) => Ok(()),
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

/// A paste without a JSON body falls back to the clipboard slot. Any other
/// body rejection, such as an oversized image, is returned as is.
fn paste_body(dto: Result<JsonFromRequest<PasteDto>, ApiError>) -> Result<PasteDto, ApiError> {
    match dto {
        Ok(JsonFromRequest(dto)) => Ok(dto),
        Err(e) if e.code == StatusCode::UNSUPPORTED_MEDIA_TYPE => Ok(PasteDto::default()),
        Err(e) => Err(e),
    }
}
