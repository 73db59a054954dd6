//! Visual value types shared by every Plume crate
//!
//! Geometry, colors, brushes and the clip shapes that bound painting.
//! Everything here is plain data: cheap to copy or clone, immutable once
//! built, and free of any drawing side effects.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::draw::{Path, TextStyle};

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a vector
    pub fn offset(self, delta: Vec2) -> Self {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }

    /// Component-wise maximum
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise minimum
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Clamp each side into `[min, max]`
    pub fn clamp(self, min: Size, max: Size) -> Size {
        self.max(min).min(max)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<Size> for Rect {
    /// Convert Size to Rect at origin (0, 0)
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// Get the size of this rect
    pub fn size(&self) -> Size {
        self.size
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Inset the rect by a delta (shrink from all sides)
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: Size::new(
                (self.size.width - 2.0 * dx).max(0.0),
                (self.size.height - 2.0 * dy).max(0.0),
            ),
        }
    }

    /// Create a rect from center point and size
    pub fn from_center(center: Point, size: Size) -> Self {
        Rect {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    /// Get the union of two rects (smallest rect containing both)
    pub fn union(&self, other: &Rect) -> Self {
        let min_x = self.origin.x.min(other.origin.x);
        let min_y = self.origin.y.min(other.origin.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color and Brush Types
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with straight (non-premultiplied) alpha, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8-bit channels
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points in local coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    /// Two-stop gradient
    pub fn new(start: Point, end: Point, from: Color, to: Color) -> Self {
        let mut stops = SmallVec::new();
        stops.push(GradientStop::new(0.0, from));
        stops.push(GradientStop::new(1.0, to));
        Self { start, end, stops }
    }

    /// Color at parameter `t` along the gradient axis
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mut prev = match self.stops.first() {
            Some(stop) => *stop,
            None => return Color::TRANSPARENT,
        };
        for stop in &self.stops {
            if t <= stop.offset {
                let span = stop.offset - prev.offset;
                if span <= f32::EPSILON {
                    return stop.color;
                }
                return Color::lerp(&prev.color, &stop.color, (t - prev.offset) / span);
            }
            prev = *stop;
        }
        prev.color
    }
}

/// Brush for filling shapes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    Solid(Color),
    Linear(LinearGradient),
}

impl Brush {
    /// Multiply the brush alpha by `factor`
    pub fn fade(&self, factor: f32) -> Brush {
        match self {
            Brush::Solid(color) => Brush::Solid(color.with_alpha(color.a * factor)),
            Brush::Linear(gradient) => {
                let mut gradient = gradient.clone();
                for stop in gradient.stops.iter_mut() {
                    stop.color.a *= factor;
                }
                Brush::Linear(gradient)
            }
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<LinearGradient> for Brush {
    fn from(gradient: LinearGradient) -> Self {
        Brush::Linear(gradient)
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Create a corner radius with different values for each corner.
    /// Order: top_left, top_right, bottom_right, bottom_left (clockwise from top-left)
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Check if all corner radii are the same
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clip Shape
// ─────────────────────────────────────────────────────────────────────────────

/// A run of already-shaped text, used as a clip so any paint op can fill glyphs
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Bounding box reported by the text shaper, in local coordinates
    pub bounds: Rect,
    pub style: TextStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, bounds: Rect, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            bounds,
            style,
        }
    }
}

/// Shape used for clipping
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// Axis-aligned rectangle clip
    Rect(Rect),
    /// Rounded rectangle clip
    RoundedRect {
        rect: Rect,
        corner_radius: CornerRadius,
    },
    /// Elliptical clip
    Ellipse { center: Point, radii: Vec2 },
    /// Arbitrary path clip
    Path(Path),
    /// The band covered by stroking `path` with `width`
    Stroke { path: Path, width: f32 },
    /// Glyph coverage of a text run
    Text(TextRun),
}

impl ClipShape {
    /// Create a rectangular clip
    pub fn rect(rect: Rect) -> Self {
        ClipShape::Rect(rect)
    }

    /// Create a rounded rectangle clip
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        ClipShape::RoundedRect {
            rect,
            corner_radius: corner_radius.into(),
        }
    }

    /// Rounded rectangle at the origin covering `size`, every corner `radius`
    pub fn uniform_rrect(size: Size, radius: f32) -> Self {
        Self::rounded_rect(size.to_rect(), radius)
    }

    /// Create an elliptical clip
    pub fn ellipse(center: Point, radii: Vec2) -> Self {
        ClipShape::Ellipse { center, radii }
    }

    /// Ellipse inscribed in `rect`
    pub fn ellipse_in(rect: Rect) -> Self {
        ClipShape::Ellipse {
            center: rect.center(),
            radii: Vec2::new(rect.width() / 2.0, rect.height() / 2.0),
        }
    }

    /// Create a path-based clip
    pub fn path(path: Path) -> Self {
        ClipShape::Path(path)
    }

    /// Create a stroked-outline clip
    pub fn stroke(path: Path, width: f32) -> Self {
        ClipShape::Stroke { path, width }
    }

    /// Outline of this shape as a path
    ///
    /// Stroke shapes return their center line and text runs their bounds.
    pub fn to_path(&self) -> Path {
        match self {
            ClipShape::Rect(rect) => Path::rect(*rect),
            ClipShape::RoundedRect {
                rect,
                corner_radius,
            } => Path::rounded_rect(*rect, *corner_radius),
            ClipShape::Ellipse { center, radii } => Path::ellipse(*center, *radii),
            ClipShape::Path(path) | ClipShape::Stroke { path, .. } => path.clone(),
            ClipShape::Text(run) => Path::rect(run.bounds),
        }
    }

    /// Get the bounding rect of this clip shape
    pub fn bounds(&self) -> Rect {
        match self {
            ClipShape::Rect(rect) => *rect,
            ClipShape::RoundedRect { rect, .. } => *rect,
            ClipShape::Ellipse { center, radii } => {
                Rect::from_center(*center, Size::new(radii.x * 2.0, radii.y * 2.0))
            }
            ClipShape::Path(path) => path.bounds(),
            ClipShape::Stroke { path, width } => {
                let half = width / 2.0;
                path.bounds().inset(-half, -half)
            }
            ClipShape::Text(run) => run.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_types() {
        let p = Point::new(1.0, 2.0);
        let s = Size::new(100.0, 50.0);
        let r = Rect::from_origin_size(p, s);

        assert_eq!(r.center(), Point::new(51.0, 27.0));
        assert!(r.contains(Point::new(50.0, 25.0)));
        assert!(!r.contains(Point::new(200.0, 100.0)));

        let rect: Rect = Size::new(200.0, 100.0).into();
        assert_eq!(rect.x(), 0.0);
        assert_eq!(rect.width(), 200.0);

        let inset_rect = rect.inset(5.0, 10.0);
        assert_eq!(inset_rect.x(), 5.0);
        assert_eq!(inset_rect.height(), 80.0);
    }

    #[test]
    fn test_size_clamp() {
        let size = Size::new(10.0, 500.0).clamp(Size::new(20.0, 20.0), Size::new(100.0, 100.0));
        assert_eq!(size, Size::new(20.0, 100.0));
    }

    #[test]
    fn test_color() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);
        assert!(Color::TRANSPARENT.is_transparent());
    }

    #[test]
    fn test_gradient_sample() {
        let gradient = LinearGradient::new(
            Point::ZERO,
            Point::new(10.0, 0.0),
            Color::BLACK,
            Color::WHITE,
        );
        assert_eq!(gradient.sample(0.0), Color::BLACK);
        assert_eq!(gradient.sample(1.0), Color::WHITE);
        assert!((gradient.sample(0.5).r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_brush_fade() {
        let brush = Brush::from(Color::RED.with_alpha(0.8)).fade(0.5);
        assert_eq!(brush, Brush::Solid(Color::RED.with_alpha(0.4)));
    }

    #[test]
    fn test_clip_shape_bounds() {
        let ellipse = ClipShape::ellipse_in(Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(ellipse.bounds(), Rect::new(0.0, 0.0, 20.0, 10.0));

        let stroke = ClipShape::stroke(Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0)), 4.0);
        assert_eq!(stroke.bounds(), Rect::new(-2.0, -2.0, 14.0, 14.0));
    }

    #[test]
    fn test_clip_shape_to_path() {
        let rrect = ClipShape::uniform_rrect(Size::new(40.0, 20.0), 6.0);
        let path = rrect.to_path();
        assert!(!path.is_empty());
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 40.0, 20.0));
    }
}
