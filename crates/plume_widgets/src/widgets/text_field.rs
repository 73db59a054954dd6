//! Single-line text field
//!
//! Draws a framed [`Editor`]: a drop shadow (or a focus outline while
//! focused), a rounded background with a border, optional leading and
//! trailing content, and the text itself with selection and caret. An empty
//! editor shows the hint instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use plume_core::error::{ConfigError, Result};
use plume_core::{ClipShape, Color, Rect, Size, TextStyle, Vec2};
use plume_paint::{solid, DropShadow, PaintRef};

use crate::context::LayoutContext;
use crate::editor::Editor;
use crate::interaction::{resolve, Interaction, Tracker};
use crate::layers::{select, LayerSet, RolePaint, Selection};
use crate::layout::{stack, Alignment, Constraints, Inset};
use crate::widgets::label::paint_text;

/// Extra content laid out beside the text, e.g. an icon or a button
pub type Content = Box<dyn Fn(&mut LayoutContext<'_>) -> Size + Send + Sync>;

/// Text field appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldConfig {
    pub background: Color,
    pub background_disabled: Color,
    pub border: Color,
    pub border_disabled: Color,
    pub text: Color,
    pub text_disabled: Color,
    pub hint: Color,
    pub hint_disabled: Color,
    pub selection: Color,
    /// Drawn around the frame while focused, replacing the shadow
    pub focus_outline: Color,
    pub hover: Color,
    pub shadow: DropShadow,
    pub border_width: f32,
    pub border_radius: f32,
    pub outline_width: f32,
    pub inset: Inset,
    /// Gap between the text and leading/trailing content
    pub spacing: f32,
    pub font_size: f32,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            background_disabled: Color::rgba(0.96, 0.96, 0.96, 1.0),
            border: Color::BLACK.with_alpha(0.2),
            border_disabled: Color::BLACK.with_alpha(0.1),
            text: Color::rgba(0.1, 0.1, 0.1, 1.0),
            text_disabled: Color::BLACK.with_alpha(0.4),
            hint: Color::BLACK.with_alpha(0.4),
            hint_disabled: Color::BLACK.with_alpha(0.2),
            selection: Color::rgba(0.2, 0.5, 0.9, 0.3),
            focus_outline: Color::rgba(0.2, 0.5, 0.9, 1.0),
            hover: Color::BLACK.with_alpha(0.02),
            shadow: DropShadow::none(),
            border_width: 1.0,
            border_radius: 6.0,
            outline_width: 1.0,
            inset: Inset::symmetric(6.0, 8.0),
            spacing: 6.0,
            font_size: 13.0,
        }
    }
}

impl TextFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    pub fn focus_outline(mut self, color: Color) -> Self {
        self.focus_outline = color;
        self
    }

    pub fn shadow(mut self, shadow: DropShadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn inset(mut self, inset: Inset) -> Self {
        self.inset = inset;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ConfigError::non_negative("text_field.border_width", self.border_width)?;
        ConfigError::non_negative("text_field.border_radius", self.border_radius)?;
        ConfigError::non_negative("text_field.outline_width", self.outline_width)?;
        ConfigError::non_negative("text_field.spacing", self.spacing)?;
        ConfigError::non_negative("text_field.font_size", self.font_size)?;
        Ok(())
    }

    /// Background, border (outline role) and text (foreground role)
    pub fn layers(&self) -> LayerSet {
        LayerSet::new()
            .background(RolePaint::new(
                solid(self.background),
                solid(self.background_disabled),
            ))
            .outline(RolePaint::new(solid(self.border), solid(self.border_disabled)))
            .foreground(RolePaint::new(solid(self.text), solid(self.text_disabled)))
            .hover(solid(self.hover))
    }
}

/// Framed single-line editor
pub struct TextField {
    pub layers: LayerSet,
    pub hint_paint: RolePaint,
    pub selection_paint: RolePaint,
    pub focus_outline: Option<PaintRef>,
    pub shadow: DropShadow,
    pub border_width: f32,
    pub border_radius: f32,
    pub outline_width: f32,
    pub inset: Inset,
    pub spacing: f32,
    pub style: TextStyle,
    /// Shown while the editor is empty
    pub hint: String,
    leading: Option<Content>,
    trailing: Option<Content>,
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("hint", &self.hint)
            .field("style", &self.style)
            .field("inset", &self.inset)
            .field("leading", &self.leading.is_some())
            .field("trailing", &self.trailing.is_some())
            .finish_non_exhaustive()
    }
}

impl TextField {
    pub fn new(hint: impl Into<String>) -> Self {
        Self::with_config(hint, &TextFieldConfig::default())
    }

    pub fn with_config(hint: impl Into<String>, config: &TextFieldConfig) -> Self {
        Self {
            layers: config.layers(),
            hint_paint: RolePaint::new(solid(config.hint), solid(config.hint_disabled)),
            selection_paint: RolePaint::enabled_only(solid(config.selection)),
            focus_outline: Some(solid(config.focus_outline)),
            shadow: config.shadow.clone(),
            border_width: config.border_width,
            border_radius: config.border_radius,
            outline_width: config.outline_width,
            inset: config.inset,
            spacing: config.spacing,
            style: TextStyle::new(config.font_size),
            hint: hint.into(),
            leading: None,
            trailing: None,
        }
    }

    pub fn layers(mut self, layers: LayerSet) -> Self {
        self.layers = layers;
        self
    }

    /// Content before the text
    pub fn leading<F>(mut self, content: F) -> Self
    where
        F: Fn(&mut LayoutContext<'_>) -> Size + Send + Sync + 'static,
    {
        self.leading = Some(Box::new(content));
        self
    }

    /// Content after the text
    pub fn trailing<F>(mut self, content: F) -> Self
    where
        F: Fn(&mut LayoutContext<'_>) -> Size + Send + Sync + 'static,
    {
        self.trailing = Some(Box::new(content));
        self
    }

    pub fn layout(&self, ctx: &mut LayoutContext<'_>, editor: &Editor) -> Size {
        let interaction = resolve(editor.observe(), ctx.routing());
        let selection = select(interaction, &self.layers);
        tracing::trace!(
            state = ?interaction.state,
            focused = interaction.active,
            empty = editor.is_empty(),
            "text field layout"
        );

        stack(
            ctx,
            Alignment::TopLeft,
            |ctx| self.layout_frame(ctx, interaction, &selection),
            |ctx| {
                self.inset
                    .layout(ctx, |ctx| self.layout_row(ctx, editor, interaction, &selection))
            },
        )
    }

    fn layout_frame(
        &self,
        ctx: &mut LayoutContext<'_>,
        interaction: Interaction,
        selection: &Selection,
    ) -> Size {
        let size = ctx.constraints.min;
        let bounds = Rect::from(size);
        let frame_shape = ClipShape::rounded_rect(bounds, self.border_radius);
        let outline = frame_shape.to_path();
        let disabled = interaction.is_disabled();

        match &self.focus_outline {
            // Stroked at double width; the outer half lands outside the frame
            Some(focus) if interaction.active && !disabled => {
                let shape = ClipShape::stroke(outline.clone(), self.outline_width * 2.0);
                let mut clip = ctx.paint.push_clip_scope(shape);
                focus.paint(&mut *clip);
            }
            _ if disabled => self.shadow.disabled().render(&mut *ctx.paint, &outline),
            _ => self.shadow.render(&mut *ctx.paint, &outline),
        }

        let mut frame = ctx.paint.push_clip_scope(frame_shape);
        for op in [&selection.background, &selection.overlay].into_iter().flatten() {
            op.paint(&mut *frame);
        }
        // Only the inner half of the border stroke survives the frame clip
        if let Some(border) = &selection.outline {
            let shape = ClipShape::stroke(outline, self.border_width * 2.0);
            let mut clip = frame.push_clip_scope(shape);
            border.paint(&mut *clip);
        }
        size
    }

    fn layout_row(
        &self,
        ctx: &mut LayoutContext<'_>,
        editor: &Editor,
        interaction: Interaction,
        selection: &Selection,
    ) -> Size {
        let max = ctx.constraints.max;
        let loose = Constraints::loose(max);

        let leading = self.leading.as_ref().map(|f| ctx.record(loose, |ctx| f(ctx)));
        let trailing = self.trailing.as_ref().map(|f| ctx.record(loose, |ctx| f(ctx)));

        let side = |content: Option<&Size>| content.map_or(0.0, |s| s.width + self.spacing);
        let reserved = side(leading.as_ref().map(|r| &r.value))
            + side(trailing.as_ref().map(|r| &r.value));
        let text_width = (max.width - reserved).max(0.0);

        let text_constraints = Constraints::new(
            Size::new(text_width, 0.0),
            Size::new(text_width, max.height),
        );
        let text = ctx.record(text_constraints, |ctx| {
            self.layout_text(ctx, editor, interaction, selection)
        });

        let height = [
            leading.as_ref().map_or(0.0, |r| r.value.height),
            trailing.as_ref().map_or(0.0, |r| r.value.height),
            text.value.height,
        ]
        .into_iter()
        .fold(0.0_f32, f32::max);

        let mut x = 0.0;
        if let Some(leading) = &leading {
            let y = (height - leading.value.height) / 2.0;
            ctx.replay_at(Vec2::new(x, y), &leading.op);
            x += leading.value.width + self.spacing;
        }
        ctx.replay_at(Vec2::new(x, (height - text.value.height) / 2.0), &text.op);
        x += text_width;
        if let Some(trailing) = &trailing {
            x += self.spacing;
            let y = (height - trailing.value.height) / 2.0;
            ctx.replay_at(Vec2::new(x, y), &trailing.op);
            x += trailing.value.width;
        }

        Size::new(x, height)
    }

    fn layout_text(
        &self,
        ctx: &mut LayoutContext<'_>,
        editor: &Editor,
        interaction: Interaction,
        selection: &Selection,
    ) -> Size {
        let shaper = ctx.shaper();
        let disabled = interaction.is_disabled();
        let line = shaper.line_height(&self.style);
        let size = Size::new(ctx.constraints.max.width, line);
        let text = editor.text();

        if editor.is_empty() {
            let hint = self.hint_paint.variant(disabled);
            paint_text(ctx, &self.hint, &self.style, hint.as_deref());
        } else {
            let highlight = editor.selection().zip(self.selection_paint.variant(disabled));
            if let Some(((start, end), op)) = highlight {
                let x0 = shaper.caret_offset(text, &self.style, start);
                let x1 = shaper.caret_offset(text, &self.style, end);
                let rect = Rect::new(x0, 0.0, x1 - x0, line);
                let mut clip = ctx.paint.push_clip_scope(ClipShape::rect(rect));
                op.paint(&mut *clip);
            }
            paint_text(ctx, text, &self.style, selection.foreground.as_deref());
        }

        let show_caret = interaction.active && !disabled && editor.selection().is_none();
        if let Some(op) = selection.foreground.as_ref().filter(|_| show_caret) {
            let x = shaper.caret_offset(text, &self.style, editor.caret());
            let caret = Rect::new(x, 0.0, 1.0, line);
            let mut clip = ctx.paint.push_clip_scope(ClipShape::rect(caret));
            op.paint(&mut *clip);
        }

        size
    }
}
