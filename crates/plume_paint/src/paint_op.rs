//! Paint operations
//!
//! A paint op is anything that can be replayed into a draw context: a solid
//! color, a brush, a recorded [`CallOp`] or a closure. Widgets never care
//! which; they push a clip and ask the op to paint inside it.

use std::fmt;
use std::sync::Arc;

use plume_core::{Brush, Color, DrawContext, LinearGradient};

use crate::record::CallOp;

/// A value that can be replayed into a drawing context
///
/// Replay must not mutate the op; the same op is emitted every pass.
pub trait PaintOp: fmt::Debug + Send + Sync {
    fn paint(&self, ctx: &mut dyn DrawContext);
}

/// Shared handle to a paint op
pub type PaintRef = Arc<dyn PaintOp>;

impl PaintOp for Color {
    fn paint(&self, ctx: &mut dyn DrawContext) {
        ctx.paint(Brush::Solid(*self));
    }
}

impl PaintOp for Brush {
    fn paint(&self, ctx: &mut dyn DrawContext) {
        ctx.paint(self.clone());
    }
}

impl PaintOp for LinearGradient {
    fn paint(&self, ctx: &mut dyn DrawContext) {
        ctx.paint(Brush::Linear(self.clone()));
    }
}

impl PaintOp for CallOp {
    fn paint(&self, ctx: &mut dyn DrawContext) {
        self.add(ctx);
    }
}

/// Paint op backed by a closure
pub struct PaintFn<F> {
    f: F,
}

impl<F> PaintOp for PaintFn<F>
where
    F: Fn(&mut dyn DrawContext) + Send + Sync,
{
    fn paint(&self, ctx: &mut dyn DrawContext) {
        (self.f)(ctx);
    }
}

impl<F> fmt::Debug for PaintFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintFn").finish_non_exhaustive()
    }
}

/// Wrap a closure as a shared paint op
pub fn paint_fn<F>(f: F) -> PaintRef
where
    F: Fn(&mut dyn DrawContext) + Send + Sync + 'static,
{
    Arc::new(PaintFn { f })
}

/// Shared solid-color paint op
pub fn solid(color: Color) -> PaintRef {
    Arc::new(color)
}

/// Share any paint op
pub fn paint_ref(op: impl PaintOp + 'static) -> PaintRef {
    Arc::new(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::{ClipShape, DrawCommand, DrawContextExt, Point, RecordingContext, Rect, Size};

    #[test]
    fn test_color_paints_current_clip() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        solid(Color::RED).paint(&mut ctx);
        assert_eq!(ctx.commands(), &[DrawCommand::Paint(Color::RED.into())]);
    }

    #[test]
    fn test_gradient_paint_op() {
        let gradient =
            LinearGradient::new(Point::ZERO, Point::new(10.0, 0.0), Color::BLACK, Color::WHITE);
        let op = paint_ref(gradient.clone());
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        op.paint(&mut ctx);
        assert_eq!(ctx.commands(), &[DrawCommand::Paint(Brush::Linear(gradient))]);
    }

    #[test]
    fn test_paint_fn() {
        let op = paint_fn(|ctx| {
            ctx.fill_shape(ClipShape::rect(Rect::new(0.0, 0.0, 2.0, 2.0)), Color::BLUE);
        });
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        op.paint(&mut ctx);
        op.paint(&mut ctx);
        assert_eq!(ctx.len(), 6);
        assert!(format!("{op:?}").contains("PaintFn"));
    }
}
