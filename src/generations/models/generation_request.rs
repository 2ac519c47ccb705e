use uuid::Uuid;

use crate::{
    app::util::time, params::models::generation_params::GenerationParams,
    sketches::models::sketch::Sketch,
};

/// Everything sent to the generator for one generate action.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub id: String,
    pub pane_id: u32,
    pub prompt: String,
    pub seed: i64,
    pub steps: u32,
    pub cfg: f64,
    pub denoise: f64,
    pub strength: f64,
    pub image: Sketch,
    pub created_at: i64,
}

impl GenerationRequest {
    pub fn new(pane_id: u32, params: &GenerationParams, image: Sketch) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pane_id,
            prompt: params.prompt.to_string(),
            seed: params.seed,
            steps: params.steps,
            cfg: params.cfg,
            denoise: params.denoise,
            strength: params.strength,
            image,
            created_at: time::current_time_in_secs(),
        }
    }
}
