//! Push button: rounded background with hover/press overlays and a label

use serde::{Deserialize, Serialize};

use plume_core::error::{ConfigError, Result};
use plume_core::{ClipShape, Color, Size, TextStyle};
use plume_paint::solid;

use crate::context::LayoutContext;
use crate::interaction::{resolve, Tracker};
use crate::layers::{select, LayerSet, RolePaint};
use crate::layout::{stack, Alignment, Inset};
use crate::trackers::Clickable;
use crate::widgets::label::Label;

/// Push button appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushButtonConfig {
    pub background: Color,
    pub background_disabled: Color,
    pub foreground: Color,
    pub foreground_disabled: Color,
    /// Drawn over the background while hovered
    pub hover: Color,
    /// Drawn over the background while pressed
    pub press: Color,
    pub corner_radius: f32,
    /// Margin between the label and the edges
    pub inset: Inset,
    pub font_size: f32,
}

impl Default for PushButtonConfig {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.2, 0.5, 0.9, 1.0),
            background_disabled: Color::BLACK.with_alpha(0.06),
            foreground: Color::WHITE,
            foreground_disabled: Color::BLACK.with_alpha(0.06),
            hover: Color::BLACK.with_alpha(0.03),
            press: Color::BLACK.with_alpha(0.06),
            corner_radius: 12.0,
            inset: Inset::symmetric(8.0, 12.0),
            font_size: 13.0,
        }
    }
}

impl PushButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
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
        ConfigError::non_negative("button.corner_radius", self.corner_radius)?;
        ConfigError::non_negative("button.font_size", self.font_size)?;
        Ok(())
    }

    /// Paint layers for these colors
    pub fn layers(&self) -> LayerSet {
        LayerSet::new()
            .background(RolePaint::new(
                solid(self.background),
                solid(self.background_disabled),
            ))
            .foreground(RolePaint::new(
                solid(self.foreground),
                solid(self.foreground_disabled),
            ))
            .hover(solid(self.hover))
            .press(solid(self.press))
    }
}

/// A button with a text label
#[derive(Clone, Debug)]
pub struct PushButton {
    pub label: Label,
    pub layers: LayerSet,
    pub corner_radius: f32,
    pub inset: Inset,
}

impl PushButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(label, &PushButtonConfig::default())
    }

    pub fn with_config(label: impl Into<String>, config: &PushButtonConfig) -> Self {
        Self {
            label: Label::new(label, TextStyle::new(config.font_size)),
            layers: config.layers(),
            corner_radius: config.corner_radius,
            inset: config.inset,
        }
    }

    /// Replace the paint layers, e.g. with gradients or recorded ops
    pub fn layers(mut self, layers: LayerSet) -> Self {
        self.layers = layers;
        self
    }

    pub fn layout(&self, ctx: &mut LayoutContext<'_>, clickable: &Clickable) -> Size {
        let interaction = resolve(clickable.observe(), ctx.routing());
        let selection = select(interaction, &self.layers);
        tracing::trace!(state = ?interaction.state, label = %self.label.text, "push button layout");

        let min = ctx.constraints.min;
        stack(
            ctx,
            Alignment::Center,
            |ctx| {
                let size = ctx.constraints.min;
                let shape = ClipShape::uniform_rrect(size, self.corner_radius);
                let mut clip = ctx.paint.push_clip_scope(shape);
                for op in [&selection.background, &selection.overlay].into_iter().flatten() {
                    op.paint(&mut *clip);
                }
                size
            },
            |ctx| {
                ctx.constraints.min = min;
                Alignment::Center.layout(ctx, |ctx| {
                    self.inset.layout(ctx, |ctx| {
                        self.label.layout(ctx, selection.foreground.as_deref())
                    })
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Constraints;
    use crate::text::MonospaceShaper;
    use plume_core::events::event_types::*;
    use plume_core::{Brush, DrawCommand, Event, EventQueue};
    use plume_paint::PaintContext;

    fn painted(commands: &[DrawCommand]) -> Vec<Brush> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Paint(brush) => Some(brush.clone()),
                _ => None,
            })
            .collect()
    }

    fn run(button: &PushButton, clickable: &Clickable, enabled: bool) -> (Size, Vec<DrawCommand>) {
        let mut paint = PaintContext::new(400.0, 100.0);
        let shaper = MonospaceShaper::default();
        let queue = EventQueue::new();
        let mut ctx = LayoutContext::new(
            &mut paint,
            Constraints::loose(Size::new(400.0, 100.0)),
            enabled.then_some(&queue),
            &shaper,
        );
        let size = button.layout(&mut ctx, clickable);
        (size, paint.take_commands())
    }

    #[test]
    fn test_button_size_wraps_label_and_inset() {
        let button = PushButton::new("OK");
        let (size, commands) = run(&button, &Clickable::new(), true);

        // "OK" at 13px with 0.5 advance, plus 12px horizontal inset per side
        assert_eq!(size.width, 13.0 + 24.0);
        assert!(size.height > 16.0);

        let config = PushButtonConfig::default();
        assert_eq!(
            painted(&commands),
            vec![Brush::from(config.background), Brush::from(config.foreground)]
        );
    }

    #[test]
    fn test_button_press_overlay() {
        let config = PushButtonConfig::default();
        let button = PushButton::with_config("Go", &config);
        let mut clickable = Clickable::new();
        clickable.handle_event(&Event::pointer(POINTER_ENTER, 1.0, 1.0));
        let (_, hovered) = run(&button, &clickable, true);
        assert_eq!(painted(&hovered)[1], Brush::from(config.hover));

        clickable.handle_event(&Event::pointer(POINTER_DOWN, 1.0, 1.0));
        let (_, pressed) = run(&button, &clickable, true);
        assert_eq!(painted(&pressed)[1], Brush::from(config.press));
    }

    #[test]
    fn test_button_disabled_without_routing() {
        let config = PushButtonConfig::default();
        let button = PushButton::with_config("Go", &config);
        let mut clickable = Clickable::new();
        clickable.handle_event(&Event::pointer(POINTER_DOWN, 1.0, 1.0));

        let (_, commands) = run(&button, &clickable, false);
        assert_eq!(
            painted(&commands),
            vec![
                Brush::from(config.background_disabled),
                Brush::from(config.foreground_disabled)
            ]
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(PushButtonConfig::new().validate().is_ok());
        assert!(PushButtonConfig::new()
            .corner_radius(-1.0)
            .validate()
            .is_err());
    }
}
