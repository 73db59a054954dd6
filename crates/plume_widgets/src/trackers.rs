//! Pointer-driven trackers: clickable, toggle, radio group and drag
//!
//! Each tracker is a small state machine fed with [`Event`]s between
//! passes. Positions in pointer events are local to the widget.

use rustc_hash::FxHashMap;

use plume_core::events::event_types::*;
use plume_core::{Event, EventType};

use crate::interaction::{Observation, Tracker};

// ─────────────────────────────────────────────────────────────────────────────
// Pointer state machine
// ─────────────────────────────────────────────────────────────────────────────

/// Pointer interaction states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl PointerState {
    /// Transition for an event type, if any
    pub fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (PointerState::Idle, POINTER_ENTER) => Some(PointerState::Hovered),
            (PointerState::Hovered, POINTER_LEAVE) => Some(PointerState::Idle),

            // Touch input can press without hovering first
            (PointerState::Idle | PointerState::Hovered, POINTER_DOWN) => {
                Some(PointerState::Pressed)
            }

            (PointerState::Pressed, POINTER_UP) => Some(PointerState::Hovered),
            (PointerState::Pressed, POINTER_LEAVE) => Some(PointerState::Idle),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clickable
// ─────────────────────────────────────────────────────────────────────────────

/// Hover/press tracking with a count of completed clicks
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clickable {
    state: PointerState,
    clicks: u32,
}

impl Clickable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Pointer is over the widget (pressing counts)
    pub fn hovered(&self) -> bool {
        self.state != PointerState::Idle
    }

    pub fn pressed(&self) -> bool {
        self.state == PointerState::Pressed
    }

    /// Consume one pending click
    pub fn clicked(&mut self) -> bool {
        if self.clicks > 0 {
            self.clicks -= 1;
            true
        } else {
            false
        }
    }

    /// Consume every pending click, returning how many there were
    pub fn take_clicks(&mut self) -> u32 {
        std::mem::take(&mut self.clicks)
    }
}

impl Tracker for Clickable {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Some(next) = self.state.on_event(event.event_type) else {
            return false;
        };
        if self.state == PointerState::Pressed && event.event_type == POINTER_UP {
            self.clicks += 1;
        }
        tracing::debug!(from = ?self.state, to = ?next, "clickable transition");
        self.state = next;
        true
    }

    fn observe(&self) -> Observation {
        Observation {
            hovered: self.hovered(),
            pressed: self.pressed(),
            ..Observation::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toggle
// ─────────────────────────────────────────────────────────────────────────────

/// Boolean value flipped by each click
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    clickable: Clickable,
    value: bool,
    changed: bool,
}

impl Toggle {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    pub fn clickable(&self) -> &Clickable {
        &self.clickable
    }

    /// Check if the value changed and clear the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Tracker for Toggle {
    fn handle_event(&mut self, event: &Event) -> bool {
        let mut changed = self.clickable.handle_event(event);
        while self.clickable.clicked() {
            self.value = !self.value;
            self.changed = true;
            changed = true;
            tracing::debug!(value = self.value, "toggle flipped");
        }
        changed
    }

    fn observe(&self) -> Observation {
        Observation {
            active: self.value,
            ..self.clickable.observe()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Radio group
// ─────────────────────────────────────────────────────────────────────────────

/// Mutually exclusive selection among keyed options
#[derive(Clone, Debug, Default)]
pub struct RadioGroup {
    value: Option<String>,
    clickables: FxHashMap<String, Clickable>,
    changed: bool,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group with `key` initially selected
    pub fn with_value(key: impl Into<String>) -> Self {
        Self {
            value: Some(key.into()),
            ..Self::default()
        }
    }

    /// Selected key
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, key: Option<String>) {
        self.value = key;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.value.as_deref() == Some(key)
    }

    /// Check if the selection changed and clear the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Feed an event aimed at the option `key`
    pub fn handle_event(&mut self, key: &str, event: &Event) -> bool {
        let clickable = self.clickables.entry(key.to_string()).or_default();
        let mut changed = clickable.handle_event(event);
        let mut clicked = false;
        while clickable.clicked() {
            clicked = true;
        }
        if clicked && !self.is_selected(key) {
            tracing::debug!(key, "radio selected");
            self.value = Some(key.to_string());
            self.changed = true;
            changed = true;
        }
        changed
    }

    /// Snapshot for the option `key`
    pub fn observe(&self, key: &str) -> Observation {
        let pointer = self
            .clickables
            .get(key)
            .map(Tracker::observe)
            .unwrap_or_default();
        Observation {
            active: self.is_selected(key),
            ..pointer
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Drag
// ─────────────────────────────────────────────────────────────────────────────

/// A continuous value in `[min, max]` set by dragging along a horizontal track
///
/// Pointer x positions are measured from the start of the track. The track
/// length is supplied by the widget during layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Drag {
    value: f32,
    min: f32,
    max: f32,
    length: f32,
    hovered: bool,
    dragging: bool,
    changed: bool,
}

impl Default for Drag {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Drag {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            value: min,
            min,
            max,
            length: 0.0,
            hovered: false,
            dragging: false,
            changed: false,
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        let (lo, hi) = self.bounds();
        self.value = value.clamp(lo, hi);
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Track length in local units, updated by layout
    pub fn set_length(&mut self, length: f32) {
        self.length = length.max(0.0);
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Position of the value along the track
    pub fn position(&self) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0) * self.length
    }

    /// Check if the value changed and clear the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn bounds(&self) -> (f32, f32) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    fn drag_to(&mut self, x: f32) {
        if self.length <= 0.0 {
            return;
        }
        let t = (x / self.length).clamp(0.0, 1.0);
        let value = self.min + t * (self.max - self.min);
        if value != self.value {
            self.value = value;
            self.changed = true;
        }
    }
}

impl Tracker for Drag {
    fn handle_event(&mut self, event: &Event) -> bool {
        let before = (self.value, self.hovered, self.dragging);
        match event.event_type {
            POINTER_ENTER => self.hovered = true,
            POINTER_LEAVE => self.hovered = false,
            POINTER_DOWN => {
                self.dragging = true;
                if let Some((x, _)) = event.position() {
                    self.drag_to(x);
                }
            }
            POINTER_MOVE if self.dragging => {
                if let Some((x, _)) = event.position() {
                    self.drag_to(x);
                }
            }
            POINTER_UP => self.dragging = false,
            _ => {}
        }
        let changed = before != (self.value, self.hovered, self.dragging);
        if changed {
            tracing::debug!(value = self.value, dragging = self.dragging, "drag update");
        }
        changed
    }

    fn observe(&self) -> Observation {
        Observation {
            hovered: self.hovered,
            dragging: self.dragging,
            active: self.dragging,
            ..Observation::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(event_type: EventType) -> Event {
        Event::pointer(event_type, 0.0, 0.0)
    }

    #[test]
    fn test_clickable_click_cycle() {
        let mut clickable = Clickable::new();

        assert!(clickable.handle_event(&make_event(POINTER_ENTER)));
        assert!(clickable.hovered());
        assert!(!clickable.pressed());

        clickable.handle_event(&make_event(POINTER_DOWN));
        assert!(clickable.pressed());
        assert!(clickable.observe().pressed);

        clickable.handle_event(&make_event(POINTER_UP));
        assert_eq!(clickable.state(), PointerState::Hovered);
        assert!(clickable.clicked());
        assert!(!clickable.clicked());
    }

    #[test]
    fn test_clickable_leave_while_pressed_cancels() {
        let mut clickable = Clickable::new();
        clickable.handle_event(&make_event(POINTER_DOWN));
        clickable.handle_event(&make_event(POINTER_LEAVE));
        clickable.handle_event(&make_event(POINTER_UP));
        assert_eq!(clickable.take_clicks(), 0);
        assert_eq!(clickable.state(), PointerState::Idle);
    }

    #[test]
    fn test_unhandled_event_is_ignored() {
        let mut clickable = Clickable::new();
        assert!(!clickable.handle_event(&make_event(POINTER_UP)));
        assert!(!clickable.handle_event(&Event::text("x")));
    }

    #[test]
    fn test_toggle_flips_on_click() {
        let mut toggle = Toggle::new(false);
        for event_type in [POINTER_ENTER, POINTER_DOWN, POINTER_UP] {
            toggle.handle_event(&make_event(event_type));
        }
        assert!(toggle.value());
        assert!(toggle.take_changed());
        assert!(!toggle.take_changed());

        let obs = toggle.observe();
        assert!(obs.active);
        assert!(obs.hovered);
        assert!(!obs.pressed);
    }

    #[test]
    fn test_radio_group_selects_clicked_key() {
        let mut group = RadioGroup::with_value("a");
        assert!(group.observe("a").active);
        assert!(!group.observe("b").active);

        group.handle_event("b", &make_event(POINTER_ENTER));
        assert!(group.observe("b").hovered);
        group.handle_event("b", &make_event(POINTER_DOWN));
        group.handle_event("b", &make_event(POINTER_UP));

        assert_eq!(group.value(), Some("b"));
        assert!(group.take_changed());
        assert!(!group.observe("a").active);
    }

    #[test]
    fn test_radio_group_reselect_is_not_a_change() {
        let mut group = RadioGroup::with_value("a");
        group.handle_event("a", &make_event(POINTER_DOWN));
        group.handle_event("a", &make_event(POINTER_UP));
        assert!(!group.take_changed());
    }

    #[test]
    fn test_drag_maps_pointer_to_value() {
        let mut drag = Drag::new(0.0, 10.0);
        drag.set_length(200.0);

        drag.handle_event(&Event::pointer(POINTER_DOWN, 50.0, 4.0));
        assert!(drag.dragging());
        assert_eq!(drag.value(), 2.5);

        drag.handle_event(&Event::pointer(POINTER_MOVE, 500.0, 4.0));
        assert_eq!(drag.value(), 10.0);
        assert_eq!(drag.position(), 200.0);

        drag.handle_event(&Event::pointer(POINTER_UP, 500.0, 4.0));
        assert!(!drag.dragging());
        drag.handle_event(&Event::pointer(POINTER_MOVE, 0.0, 4.0));
        assert_eq!(drag.value(), 10.0);
        assert!(drag.take_changed());
    }

    #[test]
    fn test_drag_without_length_keeps_value() {
        let mut drag = Drag::new(0.0, 1.0).with_value(0.5);
        drag.handle_event(&Event::pointer(POINTER_DOWN, 10.0, 0.0));
        assert_eq!(drag.value(), 0.5);
        assert!(drag.observe().active);
    }
}
