use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::sketches::models::drawing_surface::{DisplaySize, StrokePoint};

/// A pointer position in display space. When the client renders the canvas
/// at a different size than the buffer it sends that size along.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_display_size", skip_on_field_errors = false))]
pub struct StrokeDto {
    pub x: f64,
    pub y: f64,
    #[validate(range(min = 1.0, message = "display_width must be at least 1."))]
    pub display_width: Option<f64>,
    #[validate(range(min = 1.0, message = "display_height must be at least 1."))]
    pub display_height: Option<f64>,
}

impl StrokeDto {
    pub fn point(&self) -> StrokePoint {
        StrokePoint {
            x: self.x as f32,
            y: self.y as f32,
        }
    }

    pub fn display_size(&self) -> Option<DisplaySize> {
        match (self.display_width, self.display_height) {
            (Some(width), Some(height)) => Some(DisplaySize {
                width: width as f32,
                height: height as f32,
            }),
            _ => None,
        }
    }
}

/// Width and height are only meaningful together.
fn validate_display_size(dto: &StrokeDto) -> Result<(), ValidationError> {
    if dto.display_width.is_some() != dto.display_height.is_some() {
        let mut error = ValidationError::new("validate_display_size");
        error.message = Some("display_width and display_height must be sent together.".into());
        return Err(error);
    }

    Ok(())
}
