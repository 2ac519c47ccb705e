use crate::{
    app::models::api_error::ApiError, params::dtos::edit_params_dto::EditParamsDto,
    sketches::models::sketch::Sketch, AppState,
};

use super::{
    dtos::{paste_dto::PasteDto, stroke_dto::StrokeDto},
    models::pane_view::PaneView,
};

pub async fn get_panes(state: &AppState) -> Vec<PaneView> {
    state.panes.read().await.views()
}

pub async fn add_pane(state: &AppState) -> PaneView {
    let mut panes = state.panes.write().await;
    let view = panes.add_pane().view(false);
    tracing::debug!("added pane {}", view.id);

    view
}

pub async fn get_pane_by_id(id: u32, state: &AppState) -> Result<PaneView, ApiError> {
    state.panes.read().await.view(id)
}

pub async fn edit_params_by_id(
    id: u32,
    dto: &EditParamsDto,
    state: &AppState,
) -> Result<PaneView, ApiError> {
    let mut panes = state.panes.write().await;
    panes.pane_mut(id)?.edit_params(dto);

    panes.view(id)
}

pub async fn begin_stroke(
    id: u32,
    dto: &StrokeDto,
    state: &AppState,
) -> Result<PaneView, ApiError> {
    let mut panes = state.panes.write().await;
    panes
        .pane_mut(id)?
        .surface
        .begin_stroke(dto.point(), dto.display_size());

    panes.view(id)
}

pub async fn extend_stroke(
    id: u32,
    dto: &StrokeDto,
    state: &AppState,
) -> Result<PaneView, ApiError> {
    let mut panes = state.panes.write().await;
    let drew = panes
        .pane_mut(id)?
        .surface
        .extend_stroke(dto.point(), dto.display_size());

    if !drew {
        tracing::debug!("ignored stroke extension on pane {} without an active stroke", id);
    }

    panes.view(id)
}

pub async fn end_stroke(id: u32, state: &AppState) -> Result<PaneView, ApiError> {
    let mut panes = state.panes.write().await;
    panes.pane_mut(id)?.surface.end_stroke();

    panes.view(id)
}

pub async fn clear(id: u32, state: &AppState) -> Result<PaneView, ApiError> {
    let mut panes = state.panes.write().await;
    panes.pane_mut(id)?.surface.clear();

    panes.view(id)
}

pub async fn get_sketch_png(id: u32, state: &AppState) -> Result<Vec<u8>, ApiError> {
    let sketch = state.panes.read().await.pane(id)?.surface.snapshot();

    sketch.to_png()
}

pub async fn copy(id: u32, state: &AppState) -> Result<(), ApiError> {
    state.panes.write().await.copy(id)?;
    tracing::debug!("copied pane {} to the clipboard", id);

    Ok(())
}

/// Returns the pane's view when something was pasted, `None` when there was
/// nothing to paste.
pub async fn paste(
    id: u32,
    dto: &PasteDto,
    state: &AppState,
) -> Result<Option<PaneView>, ApiError> {
    let external = match &dto.image {
        Some(image) => Some(Sketch::from_encoded(image)?),
        None => None,
    };

    let mut panes = state.panes.write().await;
    if !panes.paste(id, external)? {
        tracing::debug!("nothing to paste into pane {}: clipboard is empty", id);
        return Ok(None);
    }

    Ok(Some(panes.view(id)?))
}

/// Paste into whichever pane was last focused.
pub async fn paste_into_focused(
    dto: &PasteDto,
    state: &AppState,
) -> Result<Option<PaneView>, ApiError> {
    let focused = state.panes.read().await.focused();

    match focused {
        Some(id) => paste(id, dto, state).await,
        None => {
            tracing::debug!("paste ignored: no pane is focused");
            Ok(None)
        }
    }
}

pub async fn focus(id: u32, state: &AppState) -> Result<PaneView, ApiError> {
    let mut panes = state.panes.write().await;
    panes.focus(id)?;

    panes.view(id)
}
