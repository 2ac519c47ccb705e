use serde::Serialize;

pub const BATCH_SIZE: u8 = 1;

/// Input of the sketch comfy workflow, keyed by workflow node.
#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub cliptextencode_text: String,
    pub ksampler_seed: i64,
    pub ksampler_steps: u32,
    pub ksampler_cfg: f64,
    pub ksampler_denoise: f64,
    pub loadimagefromurl_fal_url: String,
    pub controlnetapplyadvanced_strength: f64,
    pub emptylatentimage_batch_size: u8,
}
