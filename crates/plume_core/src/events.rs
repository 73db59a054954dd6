//! Input events handed to interaction trackers
//!
//! Plume has no platform input model of its own. Hosts translate whatever
//! their windowing layer produces into these plain `Event` values and feed
//! them to trackers between passes. The `EventQueue` handle passed to a pass
//! doubles as the routing signal: a pass without a queue cannot receive
//! input, so its widgets render disabled.

use std::collections::VecDeque;

/// Event type identifiers
pub type EventType = u32;

/// Well-known event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_ENTER: EventType = 1;
    pub const POINTER_LEAVE: EventType = 2;
    pub const POINTER_DOWN: EventType = 3;
    pub const POINTER_UP: EventType = 4;
    pub const POINTER_MOVE: EventType = 5;

    pub const KEY_DOWN: EventType = 10;
    pub const KEY_UP: EventType = 11;
    pub const TEXT_INPUT: EventType = 12;

    pub const FOCUS: EventType = 20;
    pub const BLUR: EventType = 21;
}

/// Virtual key code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const END: KeyCode = KeyCode(35);
    pub const HOME: KeyCode = KeyCode(36);
    pub const LEFT: KeyCode = KeyCode(37);
    pub const UP: KeyCode = KeyCode(38);
    pub const RIGHT: KeyCode = KeyCode(39);
    pub const DOWN: KeyCode = KeyCode(40);
    pub const DELETE: KeyCode = KeyCode(46);
    pub const A: KeyCode = KeyCode(65);
}

/// Keyboard modifier bit set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const META: Modifiers = Modifiers(1 << 3);

    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    pub fn ctrl(&self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    pub fn alt(&self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    pub fn meta(&self) -> bool {
        self.0 & Self::META.0 != 0
    }

    /// Platform command key (ctrl or meta)
    pub fn command(&self) -> bool {
        self.ctrl() || self.meta()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// Event payload
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer { x: f32, y: f32, button: u8 },
    Key { key: KeyCode, modifiers: Modifiers },
    TextInput { text: String },
    None,
}

/// An input event, in the receiving widget's local coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub timestamp: u64,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self {
            event_type,
            data,
            timestamp: 0,
        }
    }

    /// Pointer event at a local position, primary button
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self::new(event_type, EventData::Pointer { x, y, button: 0 })
    }

    pub fn key(key: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(event_types::KEY_DOWN, EventData::Key { key, modifiers })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(event_types::TEXT_INPUT, EventData::TextInput { text: text.into() })
    }

    pub fn focus() -> Self {
        Self::new(event_types::FOCUS, EventData::None)
    }

    pub fn blur() -> Self {
        Self::new(event_types::BLUR, EventData::None)
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Pointer position, if this is a pointer event
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

/// FIFO of pending events owned by the host
///
/// A pass receives `Option<&EventQueue>`; `None` means input routing is
/// unavailable for that pass.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Remove every pending event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        let mods = Modifiers::SHIFT | Modifiers::META;
        assert!(mods.shift());
        assert!(mods.command());
        assert!(!mods.alt());
        assert!(!Modifiers::NONE.command());
    }

    #[test]
    fn test_event_queue_fifo() {
        let mut queue = EventQueue::new();
        queue.push(Event::pointer(event_types::POINTER_ENTER, 1.0, 2.0));
        queue.push(Event::pointer(event_types::POINTER_DOWN, 1.0, 2.0));

        let types: Vec<_> = queue.drain().map(|e| e.event_type).collect();
        assert_eq!(types, vec![event_types::POINTER_ENTER, event_types::POINTER_DOWN]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_position() {
        assert_eq!(
            Event::pointer(event_types::POINTER_MOVE, 3.0, 4.0).position(),
            Some((3.0, 4.0))
        );
        assert_eq!(Event::text("a").position(), None);
    }
}
