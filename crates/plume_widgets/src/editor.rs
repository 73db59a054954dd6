//! Single-line text editor state
//!
//! Positions are character indices, not byte offsets.

use plume_core::events::event_types::*;
use plume_core::{Event, EventData, KeyCode, Modifiers};

use crate::interaction::{Observation, Tracker};
use crate::trackers::{Clickable, PointerState};

/// Text buffer with caret, selection and focus
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    text: String,
    caret: usize,
    /// Selection anchor; the selection spans anchor..caret
    anchor: Option<usize>,
    focused: bool,
    pointer: Clickable,
    max_length: usize,
    changed: bool,
    submitted: bool,
}

impl Editor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self {
            text,
            caret,
            ..Self::default()
        }
    }

    /// Limit the number of characters (0 means unlimited)
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer, caret at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.len();
        self.anchor = None;
        self.changed = true;
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.anchor = None;
        }
    }

    /// Selected character range, if non-empty
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        let (start, end) = (anchor.min(self.caret), anchor.max(self.caret));
        (start != end).then_some((start, end))
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection()
            .map(|(start, end)| &self.text[self.byte_at(start)..self.byte_at(end)])
    }

    /// Check if the text changed and clear the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Check if enter was pressed and clear the flag
    pub fn take_submitted(&mut self) -> bool {
        std::mem::take(&mut self.submitted)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert at the caret, replacing the selection
    pub fn insert(&mut self, text: &str) {
        self.delete_selection();

        let mut insert: String = text.chars().filter(|c| !c.is_control()).collect();
        if self.max_length > 0 {
            let room = self.max_length.saturating_sub(self.len());
            insert = insert.chars().take(room).collect();
        }
        if insert.is_empty() {
            return;
        }

        let at = self.byte_at(self.caret);
        self.text.insert_str(at, &insert);
        self.caret += insert.chars().count();
        self.changed = true;
    }

    /// Backspace
    pub fn delete_backward(&mut self) {
        if self.delete_selection() || self.caret == 0 {
            return;
        }
        self.remove(self.caret - 1, self.caret);
        self.caret -= 1;
    }

    /// Delete key
    pub fn delete_forward(&mut self) {
        if self.delete_selection() || self.caret >= self.len() {
            return;
        }
        self.remove(self.caret, self.caret + 1);
    }

    /// Move the caret one character left; collapses a selection to its start
    pub fn move_left(&mut self, select: bool) {
        match (select, self.selection()) {
            (false, Some((start, _))) => self.collapse(start),
            _ => self.move_to(self.caret.saturating_sub(1), select),
        }
    }

    /// Move the caret one character right; collapses a selection to its end
    pub fn move_right(&mut self, select: bool) {
        match (select, self.selection()) {
            (false, Some((_, end))) => self.collapse(end),
            _ => self.move_to((self.caret + 1).min(self.len()), select),
        }
    }

    pub fn move_to_start(&mut self, select: bool) {
        self.move_to(0, select);
    }

    pub fn move_to_end(&mut self, select: bool) {
        self.move_to(self.len(), select);
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.caret = self.len();
    }

    fn move_to(&mut self, caret: usize, select: bool) {
        if select {
            self.anchor.get_or_insert(self.caret);
        } else {
            self.anchor = None;
        }
        self.caret = caret;
    }

    fn collapse(&mut self, caret: usize) {
        self.anchor = None;
        self.caret = caret;
    }

    /// Remove the selection; true if there was one
    fn delete_selection(&mut self) -> bool {
        let selection = self.selection();
        self.anchor = None;
        match selection {
            Some((start, end)) => {
                self.remove(start, end);
                self.caret = start;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, start: usize, end: usize) {
        let range = self.byte_at(start)..self.byte_at(end);
        self.text.replace_range(range, "");
        self.changed = true;
    }

    fn byte_at(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn snapshot(&self) -> (usize, usize, Option<usize>, bool, bool, PointerState) {
        (
            self.text.len(),
            self.caret,
            self.anchor,
            self.focused,
            self.submitted,
            self.pointer.state(),
        )
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: Modifiers) {
        let select = modifiers.shift();
        let command = modifiers.command();

        match key {
            KeyCode::BACKSPACE if command => {
                self.move_to_start(true);
                self.delete_selection();
            }
            KeyCode::BACKSPACE => self.delete_backward(),
            KeyCode::DELETE if command => {
                self.move_to_end(true);
                self.delete_selection();
            }
            KeyCode::DELETE => self.delete_forward(),
            KeyCode::LEFT if command => self.move_to_start(select),
            KeyCode::LEFT => self.move_left(select),
            KeyCode::RIGHT if command => self.move_to_end(select),
            KeyCode::RIGHT => self.move_right(select),
            KeyCode::HOME => self.move_to_start(select),
            KeyCode::END => self.move_to_end(select),
            KeyCode::A if command => self.select_all(),
            KeyCode::ENTER => self.submitted = true,
            KeyCode::ESCAPE => self.set_focused(false),
            _ => {}
        }
    }
}

impl Tracker for Editor {
    fn handle_event(&mut self, event: &Event) -> bool {
        let before = self.snapshot();

        match (event.event_type, &event.data) {
            (FOCUS, _) => self.set_focused(true),
            (BLUR, _) => self.set_focused(false),
            (POINTER_DOWN, _) => {
                self.pointer.handle_event(event);
                self.focused = true;
            }
            (TEXT_INPUT, EventData::TextInput { text }) if self.focused => self.insert(text),
            (KEY_DOWN, EventData::Key { key, modifiers }) if self.focused => {
                self.handle_key(*key, *modifiers);
            }
            _ => {
                self.pointer.handle_event(event);
            }
        }

        // Pointer clicks carry no meaning for an editor beyond focus
        self.pointer.take_clicks();

        let changed = before != self.snapshot();
        if changed {
            tracing::debug!(caret = self.caret, focused = self.focused, "editor update");
        }
        changed
    }

    fn observe(&self) -> Observation {
        Observation {
            hovered: self.pointer.hovered(),
            pressed: self.pointer.pressed(),
            focused: self.focused,
            active: self.focused,
            ..Observation::default()
        }
    }
}
