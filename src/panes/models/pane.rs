use crate::{
    generations::models::{
        generation_request::GenerationRequest, generation_result::GenerationResult,
    },
    params::{dtos::edit_params_dto::EditParamsDto, models::generation_params::GenerationParams},
    sketches::models::drawing_surface::DrawingSurface,
};

use super::pane_view::PaneView;

/// One drawing surface with its parameter panel and latest result.
#[derive(Debug, Clone)]
pub struct Pane {
    pub id: u32,
    pub surface: DrawingSurface,
    pub params: GenerationParams,
    pub result: Option<GenerationResult>,
}

impl Pane {
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        let params = GenerationParams::default();
        let mut surface = DrawingSurface::new(width, height);
        surface.set_brush(params.brush_size, params.eraser);

        Self {
            id,
            surface,
            params,
            result: None,
        }
    }

    pub fn edit_params(&mut self, dto: &EditParamsDto) {
        self.params.apply(dto);
        self.surface.set_brush(self.params.brush_size, self.params.eraser);
    }

    pub fn build_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.id, &self.params, self.surface.snapshot())
    }

    pub fn view(&self, focused: bool) -> PaneView {
        PaneView {
            id: self.id,
            width: self.surface.width(),
            height: self.surface.height(),
            params: self.params.clone(),
            stroke_active: self.surface.is_stroke_active(),
            focused,
            result: self.result.clone(),
        }
    }
}
