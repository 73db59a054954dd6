//! Radio button: circular background with an outline and a knob when selected

use serde::{Deserialize, Serialize};

use plume_core::error::{ConfigError, Result};
use plume_core::{ClipShape, Color, Rect, Size};
use plume_paint::solid;

use crate::context::LayoutContext;
use crate::interaction::resolve;
use crate::layers::{select, KnobVisibility, LayerSet, RolePaint};
use crate::layout::{stack, Alignment, Inset};
use crate::trackers::RadioGroup;

/// Radio button appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioButtonConfig {
    pub background: Color,
    pub background_disabled: Color,
    /// Fill while selected
    pub tint: Color,
    pub outline: Color,
    pub outline_disabled: Color,
    pub knob: Color,
    pub knob_disabled: Color,
    pub hover: Color,
    pub press: Color,
    pub outline_width: f32,
    /// Gap between the knob and the outline
    pub inset: f32,
    pub knob_size: f32,
}

impl Default for RadioButtonConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            background_disabled: Color::BLACK.with_alpha(0.06),
            tint: Color::rgba(0.2, 0.5, 0.9, 1.0),
            outline: Color::BLACK.with_alpha(0.3),
            outline_disabled: Color::BLACK.with_alpha(0.1),
            knob: Color::WHITE,
            knob_disabled: Color::BLACK.with_alpha(0.2),
            hover: Color::BLACK.with_alpha(0.03),
            press: Color::BLACK.with_alpha(0.06),
            outline_width: 1.0,
            inset: 6.0,
            knob_size: 8.0,
        }
    }
}

impl RadioButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    pub fn knob_size(mut self, size: f32) -> Self {
        self.knob_size = size;
        self
    }

    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn outline_width(mut self, width: f32) -> Self {
        self.outline_width = width;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ConfigError::non_negative("radio.outline_width", self.outline_width)?;
        ConfigError::non_negative("radio.inset", self.inset)?;
        ConfigError::non_negative("radio.knob_size", self.knob_size)?;
        Ok(())
    }

    pub fn layers(&self) -> LayerSet {
        LayerSet::new()
            .background(RolePaint::new(
                solid(self.background),
                solid(self.background_disabled),
            ))
            .tint(RolePaint::enabled_only(solid(self.tint)))
            .outline(RolePaint::new(
                solid(self.outline),
                solid(self.outline_disabled),
            ))
            .knob(RolePaint::new(solid(self.knob), solid(self.knob_disabled)))
            .hover(solid(self.hover))
            .press(solid(self.press))
            .knob_visibility(KnobVisibility::WhenActive)
    }
}

/// One option of a [`RadioGroup`]
#[derive(Clone, Debug)]
pub struct RadioButton {
    /// Key of this option within its group
    pub key: String,
    pub layers: LayerSet,
    pub outline_width: f32,
    pub inset: f32,
    pub knob_size: f32,
}

impl RadioButton {
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_config(key, &RadioButtonConfig::default())
    }

    pub fn with_config(key: impl Into<String>, config: &RadioButtonConfig) -> Self {
        Self {
            key: key.into(),
            layers: config.layers(),
            outline_width: config.outline_width,
            inset: config.inset,
            knob_size: config.knob_size,
        }
    }

    pub fn layers(mut self, layers: LayerSet) -> Self {
        self.layers = layers;
        self
    }

    /// Outer diameter
    pub fn diameter(&self) -> f32 {
        self.knob_size + self.inset * 2.0
    }

    pub fn layout(&self, ctx: &mut LayoutContext<'_>, group: &RadioGroup) -> Size {
        let interaction = resolve(group.observe(&self.key), ctx.routing());
        let selection = select(interaction, &self.layers);
        tracing::trace!(
            key = %self.key,
            state = ?interaction.state,
            active = interaction.active,
            "radio button layout"
        );

        stack(
            ctx,
            Alignment::Center,
            |ctx| {
                let size = ctx.constraints.min;
                let shape = ClipShape::ellipse_in(Rect::from(size));
                let outline_path = shape.to_path();
                {
                    let mut clip = ctx.paint.push_clip_scope(shape);
                    for op in [&selection.background, &selection.overlay, &selection.tint]
                        .into_iter()
                        .flatten()
                    {
                        op.paint(&mut *clip);
                    }
                }
                if let Some(outline) = &selection.outline {
                    let mut clip = ctx
                        .paint
                        .push_clip_scope(ClipShape::stroke(outline_path, self.outline_width));
                    outline.paint(&mut *clip);
                }
                size
            },
            |ctx| {
                Inset::uniform(self.inset).layout(ctx, |ctx| {
                    let knob = Size::square(self.knob_size);
                    if let Some(op) = &selection.knob {
                        let mut clip = ctx
                            .paint
                            .push_clip_scope(ClipShape::ellipse_in(Rect::from(knob)));
                        op.paint(&mut *clip);
                    }
                    knob
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

    fn run(radio: &RadioButton, group: &RadioGroup, enabled: bool) -> (Size, Vec<DrawCommand>) {
        let mut paint = PaintContext::new(100.0, 100.0);
        let shaper = MonospaceShaper::default();
        let queue = EventQueue::new();
        let mut ctx = LayoutContext::new(
            &mut paint,
            Constraints::loose(Size::new(100.0, 100.0)),
            enabled.then_some(&queue),
            &shaper,
        );
        let size = radio.layout(&mut ctx, group);
        (size, paint.take_commands())
    }

    fn painted(commands: &[DrawCommand]) -> Vec<Brush> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Paint(brush) => Some(brush.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_unselected_radio_has_no_knob() {
        let config = RadioButtonConfig::default();
        let radio = RadioButton::with_config("a", &config);
        let (size, commands) = run(&radio, &RadioGroup::with_value("b"), true);

        assert_eq!(size, Size::square(radio.diameter()));
        assert_eq!(
            painted(&commands),
            vec![Brush::from(config.background), Brush::from(config.outline)]
        );
    }

    #[test]
    fn test_selected_radio_tints_and_shows_knob() {
        let config = RadioButtonConfig::default();
        let radio = RadioButton::with_config("a", &config);
        let (_, commands) = run(&radio, &RadioGroup::with_value("a"), true);

        assert_eq!(
            painted(&commands),
            vec![
                Brush::from(config.background),
                Brush::from(config.tint),
                Brush::from(config.outline),
                Brush::from(config.knob),
            ]
        );
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::PushClip(ClipShape::Stroke { width, .. }) if *width == config.outline_width
        )));
    }

    #[test]
    fn test_outline_follows_background_shape() {
        let radio = RadioButton::new("a");
        let (size, commands) = run(&radio, &RadioGroup::new(), true);

        let background = ClipShape::ellipse_in(Rect::from(size));
        assert_eq!(commands[0], DrawCommand::PushClip(background.clone()));
        let outline = commands.iter().find_map(|c| match c {
            DrawCommand::PushClip(ClipShape::Stroke { path, .. }) => Some(path.clone()),
            _ => None,
        });
        assert_eq!(outline, Some(background.to_path()));
    }

    #[test]
    fn test_hovered_radio_draws_overlay() {
        let config = RadioButtonConfig::default();
        let radio = RadioButton::with_config("a", &config);
        let mut group = RadioGroup::new();
        group.handle_event("a", &Event::pointer(POINTER_ENTER, 2.0, 2.0));

        let (_, commands) = run(&radio, &group, true);
        assert_eq!(painted(&commands)[1], Brush::from(config.hover));
    }

    #[test]
    fn test_disabled_selected_radio_keeps_knob_without_tint() {
        let config = RadioButtonConfig::default();
        let radio = RadioButton::with_config("a", &config);
        let (_, commands) = run(&radio, &RadioGroup::with_value("a"), false);

        assert_eq!(
            painted(&commands),
            vec![
                Brush::from(config.background_disabled),
                Brush::from(config.outline_disabled),
                Brush::from(config.knob_disabled),
            ]
        );
    }

    #[test]
    fn test_group_click_updates_selection() {
        let mut group = RadioGroup::with_value("a");
        for event_type in [POINTER_ENTER, POINTER_DOWN, POINTER_UP] {
            group.handle_event("b", &Event::pointer(event_type, 1.0, 1.0));
        }
        assert!(group.observe("b").active);
        assert!(!group.observe("a").active);
    }
}
