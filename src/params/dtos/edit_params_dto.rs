use serde::{Deserialize, Serialize};

/// Partial update of a pane's parameter panel. Numeric values outside a
/// slider's bounds are clamped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditParamsDto {
    pub prompt: Option<String>,
    pub seed: Option<i64>,
    pub steps: Option<i64>,
    pub cfg: Option<f64>,
    pub denoise: Option<f64>,
    pub strength: Option<f64>,
    pub brush_size: Option<i64>,
    pub eraser: Option<bool>,
}
