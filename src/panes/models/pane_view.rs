use serde::Serialize;

use crate::{
    generations::models::generation_result::GenerationResult,
    params::models::generation_params::GenerationParams,
};

#[derive(Debug, Clone, Serialize)]
pub struct PaneView {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub params: GenerationParams,
    pub stroke_active: bool,
    pub focused: bool,
    pub result: Option<GenerationResult>,
}
