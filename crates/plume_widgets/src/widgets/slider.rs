//! Slider: a thin rounded track with a shadowed knob at the drag position

use serde::{Deserialize, Serialize};

use plume_core::error::{ConfigError, Result};
use plume_core::{ClipShape, Color, Rect, Size, Vec2};
use plume_paint::{solid, DropShadow};

use crate::context::LayoutContext;
use crate::interaction::{resolve, Tracker};
use crate::layers::{select, KnobVisibility, LayerSet, RolePaint};
use crate::layout::Inset;
use crate::trackers::Drag;

/// Slider appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub track: Color,
    pub track_disabled: Color,
    pub knob: Color,
    pub knob_disabled: Color,
    /// Drawn over the knob while hovered
    pub hover: Color,
    pub track_width: f32,
    pub knob_size: f32,
    pub knob_shadow: DropShadow,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track: Color::BLACK.with_alpha(0.15),
            track_disabled: Color::BLACK.with_alpha(0.06),
            knob: Color::WHITE,
            knob_disabled: Color::rgba(0.9, 0.9, 0.9, 1.0),
            hover: Color::BLACK.with_alpha(0.03),
            track_width: 4.0,
            knob_size: 20.0,
            knob_shadow: DropShadow::none(),
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(mut self, color: Color) -> Self {
        self.track = color;
        self
    }

    pub fn knob(mut self, color: Color) -> Self {
        self.knob = color;
        self
    }

    pub fn track_width(mut self, width: f32) -> Self {
        self.track_width = width;
        self
    }

    pub fn knob_size(mut self, size: f32) -> Self {
        self.knob_size = size;
        self
    }

    pub fn knob_shadow(mut self, shadow: DropShadow) -> Self {
        self.knob_shadow = shadow;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ConfigError::non_negative("slider.track_width", self.track_width)?;
        ConfigError::non_negative("slider.knob_size", self.knob_size)?;
        Ok(())
    }

    /// The track is the background role
    pub fn layers(&self) -> LayerSet {
        LayerSet::new()
            .background(RolePaint::new(solid(self.track), solid(self.track_disabled)))
            .knob(RolePaint::new(solid(self.knob), solid(self.knob_disabled)))
            .hover(solid(self.hover))
            .knob_visibility(KnobVisibility::Always)
    }
}

/// Horizontal slider driven by a [`Drag`]
#[derive(Clone, Debug)]
pub struct Slider {
    pub layers: LayerSet,
    pub track_width: f32,
    pub knob_size: f32,
    pub knob_shadow: DropShadow,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    pub fn new() -> Self {
        Self::with_config(&SliderConfig::default())
    }

    pub fn with_config(config: &SliderConfig) -> Self {
        Self {
            layers: config.layers(),
            track_width: config.track_width,
            knob_size: config.knob_size,
            knob_shadow: config.knob_shadow.clone(),
        }
    }

    pub fn layers(mut self, layers: LayerSet) -> Self {
        self.layers = layers;
        self
    }

    /// Lay out across the full available width
    ///
    /// The track is inset by half a knob on each side so the knob stays
    /// inside the widget at both ends. Its length is written back to `drag`
    /// so pointer positions map onto values.
    pub fn layout(&self, ctx: &mut LayoutContext<'_>, drag: &mut Drag) -> Size {
        let interaction = resolve(drag.observe(), ctx.routing());
        let selection = select(interaction, &self.layers);
        tracing::trace!(state = ?interaction.state, value = drag.value(), "slider layout");

        let half = self.knob_size / 2.0;
        let shadow = if interaction.is_disabled() {
            self.knob_shadow.disabled()
        } else {
            self.knob_shadow.clone()
        };

        Inset::new(0.0, half, 0.0, half).layout(ctx, |ctx| {
            let length = ctx.constraints.max.width;
            drag.set_length(length);

            if let Some(track) = &selection.background {
                let top = half - self.track_width / 2.0;
                let bounds = Rect::new(0.0, top, length, self.track_width);
                let shape = ClipShape::rounded_rect(bounds, self.track_width / 2.0);
                let mut clip = ctx.paint.push_clip_scope(shape);
                track.paint(&mut *clip);
            }

            let x = drag.position() - half;
            let mut offset = ctx.paint.push_offset(Vec2::new(x, 0.0));
            let knob = ClipShape::ellipse_in(Rect::from(Size::square(self.knob_size)));
            let outline = |size: Size| ClipShape::ellipse_in(Rect::from(size)).to_path();
            shadow.layout(&mut offset, outline, |paint| {
                let mut clip = paint.push_clip_scope(knob);
                for op in [&selection.knob, &selection.overlay].into_iter().flatten() {
                    op.paint(&mut *clip);
                }
                Size::square(self.knob_size)
            });

            Size::new(length, self.knob_size)
        })
    }
}
