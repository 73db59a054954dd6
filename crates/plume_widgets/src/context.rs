//! Per-pass layout context
//!
//! Everything a widget needs for one layout pass: the paint context it
//! draws into, the constraints it must satisfy, the host's event queue
//! handle (whose absence means the pass is disabled), and the text shaper.

use plume_core::{EventQueue, Vec2};
use plume_paint::{CallOp, PaintContext, Recorded, Region};

use crate::interaction::Routing;
use crate::layout::Constraints;
use crate::text::TextShaper;

/// State for a single layout pass
pub struct LayoutContext<'a> {
    /// Drawing surface for this pass
    pub paint: &'a mut PaintContext,
    /// Bounds the current widget must satisfy
    pub constraints: Constraints,
    queue: Option<&'a EventQueue>,
    shaper: &'a dyn TextShaper,
}

impl<'a> LayoutContext<'a> {
    pub fn new(
        paint: &'a mut PaintContext,
        constraints: Constraints,
        queue: Option<&'a EventQueue>,
        shaper: &'a dyn TextShaper,
    ) -> Self {
        Self {
            paint,
            constraints,
            queue,
            shaper,
        }
    }

    /// Whether input reaches this pass
    pub fn routing(&self) -> Routing {
        Routing::from_queue(self.queue)
    }

    pub fn queue(&self) -> Option<&'a EventQueue> {
        self.queue
    }

    pub fn shaper(&self) -> &'a dyn TextShaper {
        self.shaper
    }

    /// Run `f` with input routing removed, so every widget inside draws disabled
    pub fn disabled<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut LayoutContext<'_>) -> R,
    {
        let mut child = LayoutContext {
            paint: &mut *self.paint,
            constraints: self.constraints,
            queue: None,
            shaper: self.shaper,
        };
        f(&mut child)
    }

    /// Run `f` under different constraints
    pub fn with_constraints<R, F>(&mut self, constraints: Constraints, f: F) -> R
    where
        F: FnOnce(&mut LayoutContext<'_>) -> R,
    {
        let mut child = LayoutContext {
            paint: &mut *self.paint,
            constraints,
            queue: self.queue,
            shaper: self.shaper,
        };
        f(&mut child)
    }

    /// Lay out `f` under `constraints` into a recording instead of emitting it
    pub fn record<T, F>(&mut self, constraints: Constraints, f: F) -> Recorded<T>
    where
        F: FnOnce(&mut LayoutContext<'_>) -> T,
    {
        let recording = self.paint.begin_recording();
        let value = self.with_constraints(constraints, f);
        let op = self.paint.stop_recording(recording);
        Recorded { op, value }
    }

    /// Run `f` inside a region that is released when `f` returns
    pub fn scoped<R, F>(&mut self, region: Region, f: F) -> R
    where
        F: FnOnce(&mut LayoutContext<'_>) -> R,
    {
        let mut guard = self.paint.push_region(region);
        let mut child = LayoutContext {
            paint: &mut *guard,
            constraints: self.constraints,
            queue: self.queue,
            shaper: self.shaper,
        };
        f(&mut child)
    }

    /// Emit a recorded op at the current position
    pub fn replay(&mut self, op: &CallOp) {
        self.paint.replay(op);
    }

    /// Emit a recorded op shifted by `offset`
    pub fn replay_at(&mut self, offset: Vec2, op: &CallOp) {
        if offset.is_zero() {
            self.paint.replay(op);
        } else {
            let mut shifted = self.paint.push_offset(offset);
            shifted.replay(op);
        }
    }
}
