use crate::{
    app::models::api_error::ApiError, panes::errors::PanesApiError,
    sketches::models::sketch::Sketch,
};

use super::{clipboard_slot::ClipboardSlot, pane::Pane, pane_view::PaneView};

/// The ordered grid of panes with its shared clipboard and paste target.
#[derive(Debug)]
pub struct PaneCollection {
    panes: Vec<Pane>,
    next_id: u32,
    width: u32,
    height: u32,
    clipboard: ClipboardSlot,
    focused: Option<u32>,
}

impl PaneCollection {
    /// Starts with a single default pane.
    pub fn new(width: u32, height: u32) -> Self {
        let mut collection = Self {
            panes: Vec::new(),
            next_id: 1,
            width,
            height,
            clipboard: ClipboardSlot::default(),
            focused: None,
        };
        collection.add_pane();

        collection
    }

    pub fn add_pane(&mut self) -> &Pane {
        let pane = Pane::new(self.next_id, self.width, self.height);
        self.next_id += 1;
        self.panes.push(pane);

        &self.panes[self.panes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.panes.iter().map(|pane| pane.id).collect()
    }

    pub fn pane(&self, id: u32) -> Result<&Pane, ApiError> {
        self.panes
            .iter()
            .find(|pane| pane.id == id)
            .ok_or_else(|| PanesApiError::PaneNotFound.value())
    }

    pub fn pane_mut(&mut self, id: u32) -> Result<&mut Pane, ApiError> {
        self.panes
            .iter_mut()
            .find(|pane| pane.id == id)
            .ok_or_else(|| PanesApiError::PaneNotFound.value())
    }

    pub fn view(&self, id: u32) -> Result<PaneView, ApiError> {
        let pane = self.pane(id)?;
        Ok(pane.view(self.focused == Some(id)))
    }

    pub fn views(&self) -> Vec<PaneView> {
        self.panes
            .iter()
            .map(|pane| pane.view(self.focused == Some(pane.id)))
            .collect()
    }

    pub fn focused(&self) -> Option<u32> {
        self.focused
    }

    pub fn focus(&mut self, id: u32) -> Result<(), ApiError> {
        self.pane(id)?;
        self.focused = Some(id);

        Ok(())
    }

    pub fn clipboard(&self) -> &ClipboardSlot {
        &self.clipboard
    }

    /// Copies the pane's committed sketch into the shared slot, replacing
    /// whatever was there.
    pub fn copy(&mut self, id: u32) -> Result<(), ApiError> {
        let sketch = self.pane(id)?.surface.snapshot();
        self.clipboard.store(sketch);

        Ok(())
    }

    /// Loads `external` into the pane, or the clipboard slot when no external
    /// image is given. Returns false when there was nothing to paste.
    pub fn paste(&mut self, id: u32, external: Option<Sketch>) -> Result<bool, ApiError> {
        self.pane(id)?;

        let sketch = match external {
            Some(sketch) => sketch,
            None => match self.clipboard.peek() {
                Some(sketch) => sketch.clone(),
                None => return Ok(false),
            },
        };

        self.pane_mut(id)?.surface.load_snapshot(&sketch);

        Ok(true)
    }
}
