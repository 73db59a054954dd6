//! Switch: pill-shaped track with a knob that slides when toggled on

use serde::{Deserialize, Serialize};

use plume_core::error::{ConfigError, Result};
use plume_core::{ClipShape, Color, Rect, Size, Vec2};
use plume_paint::{solid, Region};

use crate::context::LayoutContext;
use crate::interaction::{resolve, Tracker};
use crate::layers::{select, KnobVisibility, LayerSet, RolePaint};
use crate::layout::{stack, Alignment, Inset};
use crate::trackers::Toggle;

/// Switch appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Track while off
    pub background: Color,
    pub background_disabled: Color,
    /// Track while on
    pub tint: Color,
    pub tint_disabled: Color,
    pub knob: Color,
    pub knob_disabled: Color,
    pub hover: Color,
    pub press: Color,
    pub knob_size: f32,
    /// Gap between the knob and the track edge
    pub inset: f32,
    /// Distance the knob travels
    pub travel: f32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK.with_alpha(0.15),
            background_disabled: Color::BLACK.with_alpha(0.06),
            tint: Color::rgba(0.2, 0.5, 0.9, 1.0),
            tint_disabled: Color::rgba(0.2, 0.5, 0.9, 0.3),
            knob: Color::WHITE,
            knob_disabled: Color::rgba(0.9, 0.9, 0.9, 1.0),
            hover: Color::BLACK.with_alpha(0.03),
            press: Color::BLACK.with_alpha(0.06),
            knob_size: 20.0,
            inset: 2.0,
            travel: 16.0,
        }
    }
}

impl SwitchConfig {
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

    pub fn travel(mut self, travel: f32) -> Self {
        self.travel = travel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ConfigError::non_negative("switch.knob_size", self.knob_size)?;
        ConfigError::non_negative("switch.inset", self.inset)?;
        ConfigError::non_negative("switch.travel", self.travel)?;
        Ok(())
    }

    pub fn layers(&self) -> LayerSet {
        LayerSet::new()
            .background(RolePaint::new(
                solid(self.background),
                solid(self.background_disabled),
            ))
            .tint(RolePaint::new(solid(self.tint), solid(self.tint_disabled)))
            .knob(RolePaint::new(solid(self.knob), solid(self.knob_disabled)))
            .hover(solid(self.hover))
            .press(solid(self.press))
            .knob_visibility(KnobVisibility::Always)
    }
}

/// On/off switch driven by a [`Toggle`]
#[derive(Clone, Debug)]
pub struct Switch {
    pub layers: LayerSet,
    pub knob_size: f32,
    pub inset: f32,
    pub travel: f32,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Switch {
    pub fn new() -> Self {
        Self::with_config(&SwitchConfig::default())
    }

    pub fn with_config(config: &SwitchConfig) -> Self {
        Self {
            layers: config.layers(),
            knob_size: config.knob_size,
            inset: config.inset,
            travel: config.travel,
        }
    }

    pub fn layers(mut self, layers: LayerSet) -> Self {
        self.layers = layers;
        self
    }

    /// Size of the whole switch
    pub fn size(&self) -> Size {
        Size::new(
            self.knob_size + self.travel + self.inset * 2.0,
            self.knob_size + self.inset * 2.0,
        )
    }

    pub fn layout(&self, ctx: &mut LayoutContext<'_>, toggle: &Toggle) -> Size {
        let interaction = resolve(toggle.observe(), ctx.routing());
        let selection = select(interaction, &self.layers);
        tracing::trace!(state = ?interaction.state, on = interaction.active, "switch layout");

        let radius = self.knob_size / 2.0 + self.inset;
        stack(
            ctx,
            Alignment::Center,
            |ctx| {
                let size = ctx.constraints.min;
                let mut clip = ctx
                    .paint
                    .push_clip_scope(ClipShape::uniform_rrect(size, radius));
                for op in [&selection.background, &selection.overlay, &selection.tint]
                    .into_iter()
                    .flatten()
                {
                    op.paint(&mut *clip);
                }
                size
            },
            |ctx| {
                Inset::uniform(self.inset).layout(ctx, |ctx| {
                    let shift = if interaction.active { self.travel } else { 0.0 };
                    let knob = Rect::from(Size::square(self.knob_size));
                    if let Some(op) = &selection.knob {
                        let region =
                            Region::clip_at(Vec2::new(shift, 0.0), ClipShape::ellipse_in(knob));
                        let mut clip = ctx.paint.push_region(region);
                        op.paint(&mut *clip);
                    }
                    Size::new(self.knob_size + self.travel, self.knob_size)
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
    use plume_core::{Brush, DrawCommand, Event, EventQueue, Transform};
    use plume_paint::PaintContext;

    fn run(switch: &Switch, toggle: &Toggle, enabled: bool) -> (Size, Vec<DrawCommand>) {
        let mut paint = PaintContext::new(100.0, 100.0);
        let shaper = MonospaceShaper::default();
        let queue = EventQueue::new();
        let mut ctx = LayoutContext::new(
            &mut paint,
            Constraints::loose(Size::new(100.0, 100.0)),
            enabled.then_some(&queue),
            &shaper,
        );
        let size = switch.layout(&mut ctx, toggle);
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

    fn translations(commands: &[DrawCommand]) -> Vec<Transform> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::PushTransform(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_switch_off() {
        let config = SwitchConfig::default();
        let switch = Switch::with_config(&config);
        let (size, commands) = run(&switch, &Toggle::new(false), true);

        assert_eq!(size, switch.size());
        assert_eq!(
            painted(&commands),
            vec![Brush::from(config.background), Brush::from(config.knob)]
        );
        // The knob sits at the start of the track
        assert!(!translations(&commands).contains(&Transform::translate(config.travel, 0.0)));
    }

    #[test]
    fn test_switch_on_tints_and_shifts_knob() {
        let config = SwitchConfig::default();
        let switch = Switch::with_config(&config);
        let (_, commands) = run(&switch, &Toggle::new(true), true);

        assert_eq!(
            painted(&commands),
            vec![
                Brush::from(config.background),
                Brush::from(config.tint),
                Brush::from(config.knob),
            ]
        );
        assert!(translations(&commands).contains(&Transform::translate(config.travel, 0.0)));
    }

    #[test]
    fn test_switch_hovered_while_on() {
        let config = SwitchConfig::default();
        let switch = Switch::with_config(&config);
        let mut toggle = Toggle::new(true);
        toggle.handle_event(&Event::pointer(POINTER_ENTER, 5.0, 5.0));

        let (_, commands) = run(&switch, &toggle, true);
        assert_eq!(
            painted(&commands),
            vec![
                Brush::from(config.background),
                Brush::from(config.hover),
                Brush::from(config.tint),
                Brush::from(config.knob),
            ]
        );
    }

    #[test]
    fn test_switch_disabled() {
        let config = SwitchConfig::default();
        let switch = Switch::with_config(&config);
        let (_, commands) = run(&switch, &Toggle::new(true), false);

        assert_eq!(
            painted(&commands),
            vec![
                Brush::from(config.background_disabled),
                Brush::from(config.tint_disabled),
                Brush::from(config.knob_disabled),
            ]
        );
        // Still drawn in the "on" position
        assert!(translations(&commands).contains(&Transform::translate(config.travel, 0.0)));
    }
}
