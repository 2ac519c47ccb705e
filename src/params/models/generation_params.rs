use serde::Serialize;

use crate::{
    params::dtos::edit_params_dto::EditParamsDto,
    sketches::models::brush::{DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE},
};

pub const DEFAULT_PROMPT: &str = "fairy";

pub const MIN_STEPS: u32 = 1;
pub const MAX_STEPS: u32 = 100;
pub const DEFAULT_STEPS: u32 = 25;

pub const CFG_SLIDER: Slider = Slider {
    min: 1.0,
    max: 20.0,
    decimals: 1,
};
pub const DEFAULT_CFG: f64 = 7.0;

pub const UNIT_SLIDER: Slider = Slider {
    min: 0.0,
    max: 1.0,
    decimals: 2,
};
pub const DEFAULT_DENOISE: f64 = 1.0;
pub const DEFAULT_STRENGTH: f64 = 0.8;

/// A bounded float slider that moves in steps of `10^-decimals`.
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub decimals: i32,
}

impl Slider {
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }

        let factor = 10f64.powi(self.decimals);
        let stepped = (value.clamp(self.min, self.max) * factor).round() / factor;

        stepped.clamp(self.min, self.max)
    }
}

/// Form state of one pane's parameter panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub prompt: String,
    pub seed: i64,
    pub steps: u32,
    pub cfg: f64,
    pub denoise: f64,
    pub strength: f64,
    pub brush_size: u32,
    pub eraser: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            seed: 0,
            steps: DEFAULT_STEPS,
            cfg: DEFAULT_CFG,
            denoise: DEFAULT_DENOISE,
            strength: DEFAULT_STRENGTH,
            brush_size: DEFAULT_BRUSH_SIZE,
            eraser: false,
        }
    }
}

impl GenerationParams {
    pub fn set_steps(&mut self, steps: i64) {
        self.steps = steps.clamp(MIN_STEPS as i64, MAX_STEPS as i64) as u32;
    }

    pub fn set_cfg(&mut self, cfg: f64) {
        self.cfg = CFG_SLIDER.snap(cfg);
    }

    pub fn set_denoise(&mut self, denoise: f64) {
        self.denoise = UNIT_SLIDER.snap(denoise);
    }

    pub fn set_strength(&mut self, strength: f64) {
        self.strength = UNIT_SLIDER.snap(strength);
    }

    pub fn set_brush_size(&mut self, brush_size: i64) {
        self.brush_size = brush_size.clamp(MIN_BRUSH_SIZE as i64, MAX_BRUSH_SIZE as i64) as u32;
    }

    pub fn apply(&mut self, dto: &EditParamsDto) {
        if let Some(prompt) = &dto.prompt {
            self.prompt = prompt.to_string();
        }
        if let Some(seed) = dto.seed {
            self.seed = seed;
        }
        if let Some(steps) = dto.steps {
            self.set_steps(steps);
        }
        if let Some(cfg) = dto.cfg {
            self.set_cfg(cfg);
        }
        if let Some(denoise) = dto.denoise {
            self.set_denoise(denoise);
        }
        if let Some(strength) = dto.strength {
            self.set_strength(strength);
        }
        if let Some(brush_size) = dto.brush_size {
            self.set_brush_size(brush_size);
        }
        if let Some(eraser) = dto.eraser {
            self.eraser = eraser;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_panel() {
        let params = GenerationParams::default();

        assert_eq!(params.prompt, "fairy");
        assert_eq!(params.seed, 0);
        assert_eq!(params.steps, 25);
        assert_eq!(params.cfg, 7.0);
        assert_eq!(params.denoise, 1.0);
        assert_eq!(params.strength, 0.8);
        assert_eq!(params.brush_size, 5);
        assert!(!params.eraser);
    }

    #[test]
    fn sliders_clamp_to_their_bounds() {
        let mut params = GenerationParams::default();

        params.set_steps(0);
        assert_eq!(params.steps, 1);
        params.set_steps(1000);
        assert_eq!(params.steps, 100);

        params.set_cfg(0.2);
        assert_eq!(params.cfg, 1.0);
        params.set_cfg(35.0);
        assert_eq!(params.cfg, 20.0);

        params.set_denoise(-0.5);
        assert_eq!(params.denoise, 0.0);
        params.set_strength(1.7);
        assert_eq!(params.strength, 1.0);

        params.set_brush_size(-3);
        assert_eq!(params.brush_size, 1);
        params.set_brush_size(11);
        assert_eq!(params.brush_size, 10);
    }

    #[test]
    fn float_sliders_snap_to_step() {
        let mut params = GenerationParams::default();

        params.set_cfg(7.46);
        assert_eq!(params.cfg, 7.5);
        params.set_strength(0.333);
        assert_eq!(params.strength, 0.33);
        params.set_denoise(f64::NAN);
        assert_eq!(params.denoise, 0.0);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut params = GenerationParams::default();
        params.apply(&EditParamsDto {
            prompt: Some("castle".to_string()),
            steps: Some(300),
            eraser: Some(true),
            ..Default::default()
        });

        assert_eq!(params.prompt, "castle");
        assert_eq!(params.steps, 100);
        assert!(params.eraser);
        assert_eq!(params.seed, 0);
        assert_eq!(params.strength, 0.8);
    }
}
