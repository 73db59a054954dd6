//! Interaction state resolution
//!
//! Trackers (clickables, toggles, drags, editors) live across passes and
//! consume input events. During a pass a widget only reads an
//! [`Observation`] from its tracker and turns it into an [`Interaction`]
//! with [`resolve`]. Whether the widget is disabled is never stored: it is
//! decided per pass from the [`Routing`] handle.

use plume_core::{Event, EventQueue};

/// Whether input reaches the current pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routing {
    Available,
    Unavailable,
}

impl Routing {
    /// A pass with an event queue can receive input; one without cannot
    pub fn from_queue(queue: Option<&EventQueue>) -> Self {
        match queue {
            Some(_) => Routing::Available,
            None => Routing::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Routing::Available)
    }
}

/// Read-only snapshot of a tracker, taken during a pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    pub hovered: bool,
    pub pressed: bool,
    pub dragging: bool,
    pub focused: bool,
    /// Toggled on, selected, focused or dragging, depending on the tracker
    pub active: bool,
}

/// Visual interaction state of a widget for one pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Disabled,
    #[default]
    Idle,
    Hovered,
    Pressed,
    Active,
}

/// Resolved interaction: the state plus the orthogonal `active` flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub state: InteractionState,
    pub active: bool,
}

impl Interaction {
    pub fn is_disabled(&self) -> bool {
        self.state == InteractionState::Disabled
    }
}

/// Resolve the interaction for one pass
///
/// Disabled wins over everything, then press, then drag/focus, then hover.
/// `active` is reported in every state, disabled included.
pub fn resolve(observation: Observation, routing: Routing) -> Interaction {
    let state = if !routing.is_available() {
        InteractionState::Disabled
    } else if observation.pressed {
        InteractionState::Pressed
    } else if observation.dragging || observation.focused {
        InteractionState::Active
    } else if observation.hovered {
        InteractionState::Hovered
    } else {
        InteractionState::Idle
    };

    Interaction {
        state,
        active: observation.active,
    }
}

/// Caller-owned interaction state that persists across passes
pub trait Tracker {
    /// Feed one input event; returns true if the observable state changed
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Snapshot for the current pass
    fn observe(&self) -> Observation;

    /// Feed every pending event from `queue`
    fn drain(&mut self, queue: &mut EventQueue) -> bool {
        let mut changed = false;
        for event in queue.drain() {
            changed |= self.handle_event(&event);
        }
        changed
    }
}
