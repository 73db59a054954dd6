//! Deferred operation buffer
//!
//! A recording captures every command issued to a [`PaintContext`] between
//! `begin_recording` and `stop_recording` instead of emitting it. The result
//! is a [`CallOp`]: an immutable, cheaply clonable command list that can be
//! replayed into any [`DrawContext`] later, any number of times.
//!
//! This is what lets a widget measure its content before drawing whatever
//! sits underneath it.
//!
//! [`PaintContext`]: crate::PaintContext

use std::sync::Arc;

use plume_core::{DrawCommand, DrawContext, RegionState};

/// A replayable list of recorded draw commands
///
/// Offsets and clips issued while recording are baked into the list; replay
/// applies them relative to whatever transform and clip the target context
/// has at that moment.
#[derive(Clone, Debug, PartialEq)]
pub struct CallOp {
    commands: Arc<[DrawCommand]>,
}

impl CallOp {
    pub(crate) fn new(commands: Vec<DrawCommand>) -> Self {
        Self {
            commands: commands.into(),
        }
    }

    /// An op that emits nothing
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Emit the recorded commands into `ctx`
    pub fn add(&self, ctx: &mut dyn DrawContext) {
        for command in self.commands.iter() {
            command.apply(ctx);
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CallOp {
    fn default() -> Self {
        Self::empty()
    }
}

/// Token for an open recording, returned by `PaintContext::begin_recording`
///
/// Must be handed back to `stop_recording`; recordings close innermost first.
#[must_use = "an open recording captures all drawing until it is stopped"]
#[derive(Debug)]
pub struct Recording {
    pub(crate) id: u64,
    pub(crate) start: usize,
    /// Region stacks when the recording began
    pub(crate) state: RegionState,
}

/// Output of a scoped recording: the op plus whatever the closure returned
///
/// With `T = Size` this is the measured content, ready to be emitted later.
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded<T> {
    pub op: CallOp,
    pub value: T,
}

impl<T> Recorded<T> {
    /// Split into op and value
    pub fn into_parts(self) -> (CallOp, T) {
        (self.op, self.value)
    }
}
