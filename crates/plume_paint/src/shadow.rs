//! Layered drop shadow
//!
//! A shadow is approximated by stroking the content's outline several times
//! with growing widths. For layer `i` of `n`:
//!
//! ```text
//! distance = i / n
//! width    = spread * (1 - exp(-(distance ^ slope)))
//! alpha    = base_alpha * distance * (1 - distance)
//! ```
//!
//! Layers are drawn from the thinnest outward, inside an offset region, and
//! the content is replayed on top afterwards.

use serde::{Deserialize, Serialize};

use plume_core::error::{ConfigError, Result};
use plume_core::{ClipShape, Color, DrawContext, DrawContextExt, Path, Size, Vec2};

use crate::context::PaintContext;
use crate::region::{push_region, Region};

/// Unvalidated shadow parameters, as written in configuration files
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Base color; its alpha scales every layer
    pub color: Color,
    /// Number of stroke layers
    pub layers: u32,
    /// Maximum distance the shadow reaches from the outline
    pub spread: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Exponent shaping the width falloff
    pub slope: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            color: Color::TRANSPARENT,
            layers: 0,
            spread: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            slope: 1.0,
        }
    }
}

impl ShadowConfig {
    pub fn new(color: Color, layers: u32, spread: f32) -> Self {
        Self {
            color,
            layers,
            spread,
            ..Default::default()
        }
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn slope(mut self, slope: f32) -> Self {
        self.slope = slope;
        self
    }

    /// Validate into a drawable shadow
    pub fn build(self) -> Result<DropShadow> {
        DropShadow::try_from(self)
    }
}

/// A validated drop shadow descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShadowConfig", into = "ShadowConfig")]
pub struct DropShadow {
    color: Color,
    layers: u32,
    spread: f32,
    offset: Vec2,
    slope: f32,
}

impl TryFrom<ShadowConfig> for DropShadow {
    type Error = ConfigError;

    fn try_from(config: ShadowConfig) -> Result<Self> {
        Ok(Self {
            color: config.color,
            layers: config.layers,
            spread: ConfigError::non_negative("spread", config.spread)?,
            offset: Vec2::new(
                ConfigError::finite("offset_x", config.offset_x)?,
                ConfigError::finite("offset_y", config.offset_y)?,
            ),
            slope: ConfigError::non_negative("slope", config.slope)?,
        })
    }
}

impl From<DropShadow> for ShadowConfig {
    fn from(shadow: DropShadow) -> Self {
        Self {
            color: shadow.color,
            layers: shadow.layers,
            spread: shadow.spread,
            offset_x: shadow.offset.x,
            offset_y: shadow.offset.y,
            slope: shadow.slope,
        }
    }
}

impl Default for DropShadow {
    fn default() -> Self {
        Self::none()
    }
}

/// One stroke of a drop shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    /// 1-based layer index
    pub index: u32,
    pub distance: f32,
    pub width: f32,
    pub color: Color,
}

impl DropShadow {
    /// Build and validate a shadow in one step
    pub fn new(color: Color, layers: u32, spread: f32, slope: f32) -> Result<Self> {
        ShadowConfig::new(color, layers, spread).slope(slope).build()
    }

    /// A shadow with no layers
    pub fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            layers: 0,
            spread: 0.0,
            offset: Vec2::ZERO,
            slope: 1.0,
        }
    }

    /// Same shadow moved by `(x, y)`
    pub fn with_offset(mut self, x: f32, y: f32) -> Result<Self> {
        self.offset = Vec2::new(
            ConfigError::finite("offset_x", x)?,
            ConfigError::finite("offset_y", y)?,
        );
        Ok(self)
    }

    /// Same geometry with the base alpha zeroed
    pub fn disabled(&self) -> Self {
        Self {
            color: self.color.with_alpha(0.0),
            ..self.clone()
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn layer_count(&self) -> u32 {
        self.layers
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn slope(&self) -> f32 {
        self.slope
    }

    /// Layer `index`, counted from 1; `None` outside `1..=layer_count()`
    pub fn layer(&self, index: u32) -> Option<ShadowLayer> {
        if index == 0 || index > self.layers {
            return None;
        }
        Some(self.layer_at(index))
    }

    fn layer_at(&self, index: u32) -> ShadowLayer {
        let distance = index as f32 / self.layers as f32;
        let width = self.spread * (1.0 - (-distance.powf(self.slope)).exp());
        let alpha = self.color.a * distance * (1.0 - distance);
        ShadowLayer {
            index,
            distance,
            width,
            color: self.color.with_alpha(alpha),
        }
    }

    /// Every layer, in drawing order
    pub fn layers(&self) -> impl Iterator<Item = ShadowLayer> + '_ {
        (1..=self.layers).map(move |i| self.layer_at(i))
    }

    /// Stroke the layers along `clip_path`
    pub fn render(&self, ctx: &mut dyn DrawContext, clip_path: &Path) {
        if self.layers == 0 {
            return;
        }
        let mut region = push_region(ctx, Region::offset(self.offset.x, self.offset.y));
        for layer in self.layers() {
            tracing::trace!(
                index = layer.index,
                width = layer.width,
                alpha = layer.color.a,
                "shadow layer"
            );
            region.fill_shape(ClipShape::stroke(clip_path.clone(), layer.width), layer.color);
        }
    }

    /// Lay out `content`, draw the shadow beneath it, then emit the content
    ///
    /// `outline` receives the measured content size and returns the path the
    /// shadow follows.
    pub fn layout<O, F>(&self, ctx: &mut PaintContext, outline: O, content: F) -> Size
    where
        O: FnOnce(Size) -> Path,
        F: FnOnce(&mut PaintContext) -> Size,
    {
        let content = ctx.record(content);
        self.render(ctx, &outline(content.value));
        ctx.replay(&content.op);
        content.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::{DrawCommand, Rect};

    fn outline() -> Path {
        Path::rect(Rect::new(0.0, 0.0, 20.0, 10.0))
    }

    fn stroke_widths(commands: &[DrawCommand]) -> Vec<f32> {
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::PushClip(ClipShape::Stroke { width, .. }) => Some(*width),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layer_widths_follow_falloff() {
        let shadow = DropShadow::new(Color::BLACK, 3, 10.0, 2.0).unwrap();
        let widths: Vec<f32> = shadow.layers().map(|l| l.width).collect();
        let expected = [1.052, 3.588, 6.321];
        assert_eq!(widths.len(), 3);
        for (w, e) in widths.iter().zip(expected) {
            assert!((w - e).abs() < 1e-2, "{w} != {e}");
        }
    }

    #[test]
    fn test_layer_alpha_is_parabolic() {
        let shadow = DropShadow::new(Color::BLACK.with_alpha(0.8), 2, 4.0, 1.0).unwrap();
        let layers: Vec<_> = shadow.layers().collect();
        assert!((layers[0].distance - 0.5).abs() < 1e-6);
        assert!((layers[0].color.a - 0.2).abs() < 1e-6);
        assert_eq!(layers[1].color.a, 0.0);
    }

    #[test]
    fn test_alpha_peaks_at_half_distance() {
        let base = 0.8;
        let shadow = DropShadow::new(Color::BLACK.with_alpha(base), 4, 8.0, 2.0).unwrap();
        let alphas: Vec<f32> = shadow.layers().map(|l| l.color.a).collect();

        let expected = [0.1875, 0.25, 0.1875, 0.0].map(|a| a * base);
        for (a, e) in alphas.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "{a} != {e}");
        }

        let peak = (0..alphas.len())
            .max_by(|&a, &b| alphas[a].total_cmp(&alphas[b]))
            .unwrap();
        assert_eq!(peak, 1);
        assert_eq!(shadow.layer(2).map(|l| l.distance), Some(0.5));
    }

    #[test]
    fn test_alpha_vanishes_near_the_outline() {
        let shadow = DropShadow::new(Color::BLACK, 1000, 8.0, 2.0).unwrap();
        let first = shadow.layer(1).unwrap();
        assert!(first.color.a < 1e-3);
        assert!(first.width < 1e-3);
        assert_eq!(shadow.layer(1000).map(|l| l.color.a), Some(0.0));
    }

    #[test]
    fn test_layer_outside_range_is_none() {
        let shadow = DropShadow::new(Color::BLACK, 4, 10.0, 2.0).unwrap();
        assert!(shadow.layer(0).is_none());
        assert!(shadow.layer(5).is_none());
        assert!(shadow.layer(4).is_some());

        let empty = DropShadow::new(Color::BLACK, 0, 10.0, 2.0).unwrap();
        assert!(empty.layer(1).is_none());
    }

    #[test]
    fn test_layout_outline_follows_measured_content() {
        let shadow = DropShadow::new(Color::BLACK, 1, 4.0, 1.0).unwrap();
        let mut ctx = PaintContext::new(50.0, 50.0);
        shadow.layout(
            &mut ctx,
            |size| Path::rect(Rect::from(size)),
            |_| Size::new(12.0, 7.0),
        );

        let outlines: Vec<Rect> = ctx
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::PushClip(ClipShape::Stroke { path, .. }) => Some(path.bounds()),
                _ => None,
            })
            .collect();
        assert_eq!(outlines, vec![Rect::new(0.0, 0.0, 12.0, 7.0)]);
    }

    #[test]
    fn test_render_strokes_inside_offset() {
        let shadow = DropShadow::new(Color::BLACK, 4, 8.0, 2.0)
            .unwrap()
            .with_offset(0.0, 2.0)
            .unwrap();
        let mut ctx = PaintContext::new(100.0, 100.0);
        let before = ctx.region_state();
        shadow.render(&mut ctx, &outline());

        let commands = ctx.commands();
        assert_eq!(
            commands.first(),
            Some(&DrawCommand::PushTransform(plume_core::Transform::translate(0.0, 2.0)))
        );
        assert_eq!(commands.last(), Some(&DrawCommand::PopTransform));

        let widths = stroke_widths(commands);
        assert_eq!(widths.len(), 4);
        assert!(widths.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ctx.region_state(), before);
    }

    #[test]
    fn test_zero_layers_draws_nothing() {
        let shadow = DropShadow::new(Color::BLACK, 0, 10.0, 2.0).unwrap();
        let mut ctx = PaintContext::new(10.0, 10.0);
        shadow.render(&mut ctx, &outline());
        assert!(ctx.commands().is_empty());
        assert_eq!(shadow.layers().count(), 0);
    }

    #[test]
    fn test_disabled_keeps_geometry() {
        let shadow = DropShadow::new(Color::BLACK, 3, 10.0, 2.0).unwrap();
        let disabled = shadow.disabled();
        assert_eq!(disabled.layer_count(), 3);
        assert!(disabled.layers().all(|l| l.color.a == 0.0));
        assert_eq!(
            disabled.layer(2).map(|l| l.width),
            shadow.layer(2).map(|l| l.width)
        );
    }

    #[test]
    fn test_layout_draws_shadow_beneath_content() {
        let shadow = DropShadow::new(Color::BLACK, 2, 4.0, 1.0).unwrap();
        let mut ctx = PaintContext::new(50.0, 50.0);
        let size = shadow.layout(&mut ctx, |_| outline(), |ctx| {
            ctx.paint(Color::RED.into());
            Size::new(20.0, 10.0)
        });

        assert_eq!(size, Size::new(20.0, 10.0));
        assert_eq!(
            ctx.commands().last(),
            Some(&DrawCommand::Paint(Color::RED.into()))
        );
        assert_eq!(stroke_widths(ctx.commands()).len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            DropShadow::new(Color::BLACK, 3, -1.0, 2.0),
            Err(ConfigError::Negative { field: "spread", .. })
        ));
        assert!(matches!(
            DropShadow::new(Color::BLACK, 3, 1.0, f32::INFINITY),
            Err(ConfigError::NonFinite { field: "slope", .. })
        ));
        assert!(DropShadow::none().with_offset(f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let shadow: DropShadow = toml::from_str(
            r#"
            color = { r = 0.0, g = 0.0, b = 0.0, a = 0.5 }
            layers = 5
            spread = 6.0
            offset_y = 1.0
            slope = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(shadow.layer_count(), 5);
        assert_eq!(shadow.offset(), Vec2::new(0.0, 1.0));

        let bad: std::result::Result<DropShadow, _> = toml::from_str("spread = -3.0");
        assert!(bad.is_err());
    }
}
