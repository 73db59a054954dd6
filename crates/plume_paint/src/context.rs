//! Paint context - the recording surface widgets draw into
//!
//! PaintContext wraps a RecordingContext and layers the deferred-emission
//! API on top of it: recordings that cut a slice of commands out of the
//! stream, replay of those slices, and scoped regions.

use smallvec::SmallVec;

use plume_core::{
    Brush, ClipShape, CornerRadius, DrawCommand, DrawContext, Path, Rect, RecordingContext,
    RegionState, Size, Stroke, Transform, Vec2,
};

use crate::paint_op::PaintOp;
use crate::record::{CallOp, Recorded, Recording};
use crate::region::{push_region, Region, RegionGuard};

/// The paint context used for widget drawing
pub struct PaintContext {
    recording: RecordingContext,
    /// Ids of open recordings, innermost last
    open: SmallVec<[u64; 4]>,
    next_recording: u64,
}

impl PaintContext {
    /// Create a new paint context with the given viewport size
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_size(Size::new(width, height))
    }

    /// Create from a Size
    pub fn from_size(size: Size) -> Self {
        Self {
            recording: RecordingContext::new(size),
            open: SmallVec::new(),
            next_recording: 0,
        }
    }

    /// Get all emitted commands
    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// Take ownership of emitted commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.recording.take_commands()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Deferred emission
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start capturing commands instead of emitting them
    pub fn begin_recording(&mut self) -> Recording {
        let id = self.next_recording;
        self.next_recording += 1;
        self.open.push(id);
        tracing::trace!(id, depth = self.open.len(), "begin_recording");
        Recording {
            id,
            start: self.recording.len(),
            state: self.recording.region_state(),
        }
    }

    /// Stop capturing and return the captured commands as an op
    ///
    /// # Panics
    ///
    /// Panics if `recording` is not the innermost open recording. Debug
    /// builds also panic if the region stacks differ from when it began.
    pub fn stop_recording(&mut self, recording: Recording) -> CallOp {
        match self.open.last() {
            Some(&id) if id == recording.id => {
                self.open.pop();
            }
            _ => panic!(
                "recording {} stopped out of order (open: {:?})",
                recording.id, self.open
            ),
        }

        let state = self.recording.region_state();
        if state != recording.state {
            tracing::warn!(
                id = recording.id,
                "recording stopped with unbalanced regions"
            );
        }
        debug_assert_eq!(
            state, recording.state,
            "recording {} stopped with unbalanced regions",
            recording.id
        );

        let commands = self.recording.split_off(recording.start);
        tracing::trace!(
            id = recording.id,
            commands = commands.len(),
            "stop_recording"
        );
        CallOp::new(commands)
    }

    /// Record everything `f` draws, returning the op and `f`'s result
    pub fn record<T, F>(&mut self, f: F) -> Recorded<T>
    where
        F: FnOnce(&mut Self) -> T,
    {
        let recording = self.begin_recording();
        let value = f(self);
        let op = self.stop_recording(recording);
        Recorded { op, value }
    }

    /// Number of recordings currently open
    pub fn recording_depth(&self) -> usize {
        self.open.len()
    }

    /// Emit a recorded op at the current transform and clip
    pub fn replay(&mut self, op: &CallOp) {
        op.add(self);
    }

    /// Emit any paint op into the current clip
    pub fn paint_with(&mut self, op: &dyn PaintOp) {
        op.paint(self);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Scoped regions
    // ═══════════════════════════════════════════════════════════════════════════

    /// Push an offset and/or clip, popped when the guard drops
    pub fn push_region(&mut self, region: Region) -> RegionGuard<'_, Self> {
        push_region(self, region)
    }

    /// Push a clip, popped when the guard drops
    pub fn push_clip_scope(&mut self, shape: ClipShape) -> RegionGuard<'_, Self> {
        push_region(self, Region::clip(shape))
    }

    /// Push a translation, popped when the guard drops
    pub fn push_offset_scope(&mut self, dx: f32, dy: f32) -> RegionGuard<'_, Self> {
        push_region(self, Region::offset(dx, dy))
    }

    /// Push a translation by a vector, popped when the guard drops
    pub fn push_offset(&mut self, offset: Vec2) -> RegionGuard<'_, Self> {
        push_region(
            self,
            Region {
                offset: Some(offset),
                clip: None,
            },
        )
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DrawContext Implementation - delegates to RecordingContext
// ═══════════════════════════════════════════════════════════════════════════════

impl DrawContext for PaintContext {
    fn push_transform(&mut self, transform: Transform) {
        self.recording.push_transform(transform);
    }

    fn pop_transform(&mut self) {
        self.recording.pop_transform();
    }

    fn current_transform(&self) -> Transform {
        self.recording.current_transform()
    }

    fn push_clip(&mut self, shape: ClipShape) {
        self.recording.push_clip(shape);
    }

    fn pop_clip(&mut self) {
        self.recording.pop_clip();
    }

    fn region_state(&self) -> RegionState {
        self.recording.region_state()
    }

    fn paint(&mut self, brush: Brush) {
        self.recording.paint(brush);
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.recording.fill_path(path, brush);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.recording.stroke_path(path, stroke, brush);
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.recording.fill_rect(rect, corner_radius, brush);
    }

    fn viewport_size(&self) -> Size {
        self.recording.viewport_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::{Color, DrawContextExt};

    #[test]
    fn test_paint_context_creation() {
        let ctx = PaintContext::new(800.0, 600.0);
        assert_eq!(ctx.viewport_size(), Size::new(800.0, 600.0));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_recording_captures_instead_of_emitting() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        ctx.paint(Color::RED.into());

        let rec = ctx.begin_recording();
        ctx.paint(Color::GREEN.into());
        let op = ctx.stop_recording(rec);

        assert_eq!(ctx.commands(), &[DrawCommand::Paint(Color::RED.into())]);
        assert_eq!(op.commands(), &[DrawCommand::Paint(Color::GREEN.into())]);
    }

    #[test]
    fn test_record_and_measure() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        let content = ctx.record(|ctx| {
            ctx.fill_shape(ClipShape::rect(Rect::new(0.0, 0.0, 30.0, 12.0)), Color::BLUE);
            Size::new(30.0, 12.0)
        });

        assert_eq!(content.value, Size::new(30.0, 12.0));
        assert_eq!(content.op.len(), 3);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_nested_recordings() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        let outer = ctx.begin_recording();
        ctx.paint(Color::RED.into());
        let inner = ctx.record(|ctx| ctx.paint(Color::GREEN.into()));
        ctx.replay(&inner.op);
        let outer = ctx.stop_recording(outer);

        assert_eq!(ctx.recording_depth(), 0);
        assert_eq!(
            outer.commands(),
            &[
                DrawCommand::Paint(Color::RED.into()),
                DrawCommand::Paint(Color::GREEN.into()),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_out_of_order_stop_panics() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        let outer = ctx.begin_recording();
        let _inner = ctx.begin_recording();
        let _ = ctx.stop_recording(outer);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unbalanced regions")]
    fn test_stop_outside_begin_region_panics() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        let recording = {
            let mut clip = ctx.push_clip_scope(ClipShape::rect(Rect::new(0.0, 0.0, 5.0, 5.0)));
            let recording = clip.begin_recording();
            clip.paint(Color::RED.into());
            recording
        };
        let _ = ctx.stop_recording(recording);
    }

    #[test]
    fn test_replay_is_relative_to_current_transform() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        let op = ctx
            .record(|ctx| {
                let mut scope = ctx.push_offset_scope(2.0, 0.0);
                scope.paint(Color::RED.into());
            })
            .op;

        ctx.replay(&op);
        {
            let mut shifted = ctx.push_offset_scope(10.0, 10.0);
            shifted.replay(&op);
        }

        let commands = ctx.commands();
        assert_eq!(&commands[..3], op.commands());
        assert_eq!(&commands[4..7], op.commands());
        assert_eq!(commands[3], DrawCommand::PushTransform(Transform::translate(10.0, 10.0)));
    }

    #[test]
    fn test_scopes_restore_state() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        let before = ctx.region_state();
        {
            let mut clip = ctx.push_clip_scope(ClipShape::uniform_rrect(Size::new(10.0, 10.0), 2.0));
            let mut offset = clip.push_offset(Vec2::new(1.0, 1.0));
            offset.fill_color(Color::BLACK);
        }
        assert_eq!(ctx.region_state(), before);
    }
}
