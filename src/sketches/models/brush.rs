use serde::Serialize;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 10;
pub const DEFAULT_BRUSH_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brush {
    pub size: u32,
    pub eraser: bool,
}

impl Brush {
    pub fn new(size: u32, eraser: bool) -> Self {
        Self {
            size: size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            eraser,
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_SIZE, false)
    }
}
