use crate::sketches::models::sketch::Sketch;

/// The last copied sketch, shared by every pane of a collection.
#[derive(Debug, Default)]
pub struct ClipboardSlot {
    sketch: Option<Sketch>,
}

impl ClipboardSlot {
    pub fn store(&mut self, sketch: Sketch) {
        self.sketch = Some(sketch);
    }

    pub fn peek(&self) -> Option<&Sketch> {
        self.sketch.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.sketch.is_none()
    }
}
