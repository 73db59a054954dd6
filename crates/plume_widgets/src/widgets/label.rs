//! Single-line text label

use plume_core::{ClipShape, Rect, Size, TextRun, TextStyle};
use plume_paint::PaintOp;

use crate::context::LayoutContext;

/// Paint `text` on one line with `paint`, returning the measured size
///
/// The text is turned into a glyph clip and filled with the paint op, so any
/// op (solid, gradient, recording) can color it. With no paint op the text
/// is measured but nothing is drawn.
pub fn paint_text(
    ctx: &mut LayoutContext<'_>,
    text: &str,
    style: &TextStyle,
    paint: Option<&dyn PaintOp>,
) -> Size {
    let measured = ctx
        .shaper()
        .measure(text, style, ctx.constraints.max.width);
    let size = ctx.constraints.constrain(measured);

    if let Some(op) = paint.filter(|_| !text.is_empty()) {
        let run = TextRun::new(text, Rect::from(measured), style.clone());
        let mut clip = ctx.paint.push_clip_scope(ClipShape::Text(run));
        op.paint(&mut *clip);
    }
    size
}

/// Text label with a fixed style
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
}

impl Label {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn layout(&self, ctx: &mut LayoutContext<'_>, paint: Option<&dyn PaintOp>) -> Size {
        tracing::trace!(text = %self.text, "label layout");
        paint_text(ctx, &self.text, &self.style, paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Constraints;
    use crate::text::MonospaceShaper;
    use plume_core::{Brush, Color, DrawCommand};
    use plume_paint::PaintContext;

    #[test]
    fn test_label_clips_text_and_paints() {
        let mut paint = PaintContext::new(200.0, 50.0);
        let shaper = MonospaceShaper::default();
        let mut ctx = LayoutContext::new(
            &mut paint,
            Constraints::loose(Size::new(200.0, 50.0)),
            None,
            &shaper,
        );

        let label = Label::new("Press", TextStyle::new(10.0));
        let size = label.layout(&mut ctx, Some(&Color::BLACK));
        assert_eq!(size.width, 25.0);

        let commands = paint.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            DrawCommand::PushClip(ClipShape::Text(run)) if run.text == "Press"
        ));
        assert_eq!(commands[1], DrawCommand::Paint(Brush::Solid(Color::BLACK)));
    }

    #[test]
    fn test_label_without_paint_only_measures() {
        let mut paint = PaintContext::new(200.0, 50.0);
        let shaper = MonospaceShaper::default();
        let mut ctx = LayoutContext::new(
            &mut paint,
            Constraints::loose(Size::new(200.0, 50.0)),
            None,
            &shaper,
        );

        let size = Label::new("Hint", TextStyle::new(10.0)).layout(&mut ctx, None);
        assert_eq!(size.width, 20.0);
        assert!(paint.commands().is_empty());
    }
}
