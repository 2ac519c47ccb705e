use image::{imageops, RgbaImage};
use serde::Deserialize;

use crate::sketches::util::raster;

use super::{
    brush::Brush,
    sketch::{Sketch, BACKGROUND_COLOR, INK_COLOR},
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,
}

/// Size the buffer is rendered at on the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

/// A pane's raster buffer plus the stroke currently being drawn on it.
///
/// Strokes paint into the live buffer as they are extended, but only become
/// visible to [`DrawingSurface::snapshot`] once [`DrawingSurface::end_stroke`]
/// commits them.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    buffer: RgbaImage,
    brush: Brush,
    // last buffer-space point of the active stroke
    cursor: Option<(f32, f32)>,
    committed: Option<Sketch>,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, BACKGROUND_COLOR),
            brush: Brush::default(),
            cursor: None,
            committed: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn is_stroke_active(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn set_brush(&mut self, size: u32, is_eraser: bool) {
        self.brush = Brush::new(size, is_eraser);
    }

    pub fn to_buffer_space(&self, point: StrokePoint, display: Option<DisplaySize>) -> (f32, f32) {
        let Some(display) = display else {
            return (point.x, point.y);
        };

        let scale_x = match display.width > 0.0 {
            true => self.width() as f32 / display.width,
            false => 1.0,
        };
        let scale_y = match display.height > 0.0 {
            true => self.height() as f32 / display.height,
            false => 1.0,
        };

        (point.x * scale_x, point.y * scale_y)
    }

    pub fn begin_stroke(&mut self, point: StrokePoint, display: Option<DisplaySize>) {
        self.cursor = Some(self.to_buffer_space(point, display));
    }

    /// Draws from the previous point to `point`. Returns false when no stroke
    /// is active.
    pub fn extend_stroke(&mut self, point: StrokePoint, display: Option<DisplaySize>) -> bool {
        let Some(from) = self.cursor else {
            return false;
        };

        let to = self.to_buffer_space(point, display);
        let color = match self.brush.eraser {
            true => BACKGROUND_COLOR,
            false => INK_COLOR,
        };

        raster::draw_segment(&mut self.buffer, from, to, self.brush.size as f32, color);
        self.cursor = Some(to);

        true
    }

    pub fn end_stroke(&mut self) -> bool {
        if self.cursor.take().is_none() {
            return false;
        }

        self.committed = Some(Sketch::from_image(self.buffer.clone()));
        true
    }

    pub fn clear(&mut self) {
        self.buffer = RgbaImage::from_pixel(self.width(), self.height(), BACKGROUND_COLOR);
        self.cursor = None;
        self.committed = None;
    }

    pub fn snapshot(&self) -> Sketch {
        match &self.committed {
            Some(sketch) => sketch.clone(),
            None => Sketch::blank(self.width(), self.height()),
        }
    }

    /// Replaces the buffer with `sketch` drawn at the origin. Anything outside
    /// the buffer is cropped; uncovered area stays background.
    pub fn load_snapshot(&mut self, sketch: &Sketch) {
        let mut buffer = RgbaImage::from_pixel(self.width(), self.height(), BACKGROUND_COLOR);
        imageops::overlay(&mut buffer, sketch.image(), 0, 0);

        self.buffer = buffer;
        self.cursor = None;
        self.committed = Some(Sketch::from_image(self.buffer.clone()));
    }
}
