use egui::Pos2;

use crate::drawable::Drawable;

/// The drawing command log: committed drawables in paint order, plus the
/// buffer of undone ones.
///
/// The last element of `history` is the only drawable that may still be
/// mutated, and only until `seal` is called. A seal flag guards `grow_active`
/// so growing with nothing active is a defined no-op rather than a panic or
/// a blind index into the wrong element.
pub struct Sketch {
    history: Vec<Drawable>,
    redo_buffer: Vec<Drawable>,
    sealed: bool,
    dirty: bool,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            redo_buffer: Vec::new(),
            sealed: true,
            dirty: false,
        }
    }

    /// Commit a new drawable. It becomes the active one until `seal`.
    /// New input invalidates any pending redo state.
    pub fn append(&mut self, drawable: Drawable) {
        self.history.push(drawable);
        self.redo_buffer.clear();
        self.sealed = false;
        self.dirty = true;
    }

    /// Grow the active drawable: append a point to the stroke being drawn,
    /// or reposition the sticker being dragged. Silent no-op when nothing is
    /// active.
    pub fn grow_active(&mut self, point: Pos2) {
        if self.sealed {
            log::trace!("grow_active with no active drawable; ignoring");
            return;
        }
        let Some(active) = self.history.last_mut() else {
            return;
        };
        match active {
            Drawable::Stroke(stroke) => stroke.grow(point),
            Drawable::Sticker(sticker) => sticker.move_to(point),
        }
        self.dirty = true;
    }

    /// Mark the active drawable complete. `grow_active` is rejected until
    /// the next `append`.
    pub fn seal(&mut self) {
        self.sealed = true;
        self.dirty = true;
    }

    /// Move the most recent drawable to the redo buffer. Returns `false`
    /// (and changes nothing) when the history is empty.
    pub fn undo(&mut self) -> bool {
        self.sealed = true;
        match self.history.pop() {
            Some(drawable) => {
                self.redo_buffer.push(drawable);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back onto the history. Returns
    /// `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.sealed = true;
        match self.redo_buffer.pop() {
            Some(drawable) => {
                self.history.push(drawable);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Empty the history. The redo buffer is deliberately left untouched:
    /// clearing the canvas does not forget what undo had set aside.
    pub fn clear(&mut self) {
        self.sealed = true;
        if !self.history.is_empty() {
            self.dirty = true;
        }
        self.history.clear();
    }

    /// Committed drawables, in paint order.
    pub fn history(&self) -> &[Drawable] {
        &self.history
    }

    /// Undone drawables, most recently undone last.
    pub fn redo_buffer(&self) -> &[Drawable] {
        &self.redo_buffer
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    /// True while a drawable is being grown (pointer held down).
    pub fn has_active(&self) -> bool {
        !self.sealed
    }

    /// Take the change flag, arming the next repaint.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
