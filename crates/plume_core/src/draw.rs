//! Draw Context - the drawing surface every widget paints into
//!
//! The `DrawContext` trait is the single interface through which Plume emits
//! drawing. It maintains a transform stack and a clip stack and exposes a small
//! set of fill/stroke/paint operations. `RecordingContext` implements it by
//! appending `DrawCommand`s to a list, which is what makes deferred emission
//! possible: a slice of that list can be cut out and replayed later.
//!
//! # Example
//!
//! ```rust
//! use plume_core::{ClipShape, Color, DrawContext, RecordingContext, Rect, Size, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
//! ctx.push_transform(Transform::translate(10.0, 20.0));
//! ctx.push_clip(ClipShape::rounded_rect(Rect::new(0.0, 0.0, 80.0, 30.0), 6.0));
//! ctx.paint(Color::BLUE.into());
//! ctx.pop_clip();
//! ctx.pop_transform();
//!
//! assert_eq!(ctx.commands().len(), 5);
//! ```

use crate::layer::{Brush, ClipShape, Color, CornerRadius, Point, Rect, Size, Vec2};

// ─────────────────────────────────────────────────────────────────────────────
// Transform Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a 2D translation
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Translation component
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.elements[4], self.elements[5])
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;
        Transform {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

impl From<Vec2> for Transform {
    fn from(offset: Vec2) -> Self {
        Transform::translate(offset.x, offset.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

/// Text style configuration
///
/// Color is deliberately absent: text is used as a clip and painted with
/// whatever paint op the widget selects.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name
    pub family: String,
    /// Font size in pixels
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Line height multiplier
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "system-ui".to_string(),
            size: 14.0,
            weight: FontWeight::Regular,
            line_height: 1.2,
        }
    }
}

impl TextStyle {
    /// Create a new text style with font size
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Set font weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set font family
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Magic number for the cubic Bézier quarter-circle approximation
const KAPPA: f32 = 0.552_284_8;

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.x(), rect.y())
            .line_to(rect.max_x(), rect.y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.x(), rect.max_y())
            .close()
    }

    /// Create an ellipse path from four cubic arcs
    pub fn ellipse(center: Point, radii: Vec2) -> Self {
        let (rx, ry) = (radii.x, radii.y);
        let (cx, cy) = (center.x, center.y);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        Self::new()
            .move_to(cx + rx, cy)
            .cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry)
            .cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy)
            .cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry)
            .cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy)
            .close()
    }

    /// Create a circle path
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::ellipse(center, Vec2::new(radius, radius))
    }

    /// Create a rounded rectangle path
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        let r = corner_radius.into();
        let x = rect.x();
        let y = rect.y();
        let w = rect.width();
        let h = rect.height();

        // Clamp radii to half the minimum dimension
        let max_r = (w.min(h) / 2.0).max(0.0);
        let tl = r.top_left.min(max_r);
        let tr = r.top_right.min(max_r);
        let br = r.bottom_right.min(max_r);
        let bl = r.bottom_left.min(max_r);

        let k = 1.0 - KAPPA;
        let mut path = Self::new().move_to(x + tl, y);

        path = path.line_to(x + w - tr, y);
        if tr > 0.0 {
            path = path.cubic_to(x + w - tr * k, y, x + w, y + tr * k, x + w, y + tr);
        }

        path = path.line_to(x + w, y + h - br);
        if br > 0.0 {
            path = path.cubic_to(x + w, y + h - br * k, x + w - br * k, y + h, x + w - br, y + h);
        }

        path = path.line_to(x + bl, y + h);
        if bl > 0.0 {
            path = path.cubic_to(x + bl * k, y + h, x, y + h - bl * k, x, y + h - bl);
        }

        path = path.line_to(x, y + tl);
        if tl > 0.0 {
            path = path.cubic_to(x, y + tl * k, x + tl * k, y, x + tl, y);
        }

        path.close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Calculate the bounding rectangle of this path (control points included)
    pub fn bounds(&self) -> Rect {
        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut include = |p: &Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        if min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite() {
            Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
        } else {
            Rect::ZERO
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of a context's region stacks
///
/// Two snapshots compare equal when the same transforms and the same number
/// of clips are in effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionState {
    /// Accumulated transform in effect
    pub transform: Transform,
    /// Number of transforms pushed above the root
    pub transform_depth: usize,
    /// Number of clips pushed
    pub clip_depth: usize,
}

/// Drawing surface with transform and clip stacks
pub trait DrawContext {
    // ─────────────────────────────────────────────────────────────────────────
    // State Stack
    // ─────────────────────────────────────────────────────────────────────────

    /// Push a transform, composed with the current one
    fn push_transform(&mut self, transform: Transform);

    /// Pop the most recent transform
    fn pop_transform(&mut self);

    /// Get the accumulated transform
    fn current_transform(&self) -> Transform;

    /// Push a clip shape; subsequent drawing is limited to it
    fn push_clip(&mut self, shape: ClipShape);

    /// Pop the most recent clip
    fn pop_clip(&mut self);

    /// Snapshot of the transform and clip stacks
    fn region_state(&self) -> RegionState;

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill the whole current clip region with a brush
    fn paint(&mut self, brush: Brush);

    /// Fill a path
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    /// Fill a (rounded) rectangle
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush);

    // ─────────────────────────────────────────────────────────────────────────
    // Context Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the viewport size
    fn viewport_size(&self) -> Size;
}

/// Extension trait for DrawContext that provides ergonomic generic methods
pub trait DrawContextExt: DrawContext {
    /// Fill a path with a color or brush
    fn fill<B: Into<Brush>>(&mut self, path: &Path, brush: B) {
        self.fill_path(path, brush.into());
    }

    /// Stroke a path with a color or brush
    fn stroke<B: Into<Brush>>(&mut self, path: &Path, stroke: &Stroke, brush: B) {
        self.stroke_path(path, stroke, brush.into());
    }

    /// Fill a rounded rectangle with a color or brush
    fn fill_rounded_rect<B: Into<Brush>>(
        &mut self,
        rect: Rect,
        corner_radius: CornerRadius,
        brush: B,
    ) {
        self.fill_rect(rect, corner_radius, brush.into());
    }

    /// Paint a brush inside `shape` only
    fn fill_shape<B: Into<Brush>>(&mut self, shape: ClipShape, brush: B) {
        self.push_clip(shape);
        self.paint(brush.into());
        self.pop_clip();
    }

    /// Paint a solid color over the current clip
    fn fill_color(&mut self, color: Color) {
        self.paint(Brush::Solid(color));
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // State
    PushTransform(Transform),
    PopTransform,
    PushClip(ClipShape),
    PopClip,

    // 2D Drawing
    Paint(Brush),
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
    },
}

impl DrawCommand {
    /// Issue this command against any draw context
    pub fn apply(&self, ctx: &mut dyn DrawContext) {
        match self {
            DrawCommand::PushTransform(transform) => ctx.push_transform(*transform),
            DrawCommand::PopTransform => ctx.pop_transform(),
            DrawCommand::PushClip(shape) => ctx.push_clip(shape.clone()),
            DrawCommand::PopClip => ctx.pop_clip(),
            DrawCommand::Paint(brush) => ctx.paint(brush.clone()),
            DrawCommand::FillPath { path, brush } => ctx.fill_path(path, brush.clone()),
            DrawCommand::StrokePath {
                path,
                stroke,
                brush,
            } => ctx.stroke_path(path, stroke, brush.clone()),
            DrawCommand::FillRect {
                rect,
                corner_radius,
                brush,
            } => ctx.fill_rect(*rect, *corner_radius, brush.clone()),
        }
    }

    /// True for commands that change the region stacks rather than draw
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            DrawCommand::PushTransform(_)
                | DrawCommand::PopTransform
                | DrawCommand::PushClip(_)
                | DrawCommand::PopClip
        )
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform>,
    clip_depth: usize,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Transform::identity()],
            clip_depth: 0,
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands recorded so far
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Remove and return every command recorded at or after `start`
    pub fn split_off(&mut self, start: usize) -> Vec<DrawCommand> {
        self.commands.split_off(start.min(self.commands.len()))
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        } else {
            tracing::warn!("pop_transform without matching push_transform");
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_clip(&mut self, shape: ClipShape) {
        self.commands.push(DrawCommand::PushClip(shape));
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
        if self.clip_depth > 0 {
            self.clip_depth -= 1;
        } else {
            tracing::warn!("pop_clip without matching push_clip");
        }
    }

    fn region_state(&self) -> RegionState {
        RegionState {
            transform: self.current_transform(),
            transform_depth: self.transform_stack.len().saturating_sub(1),
            clip_depth: self.clip_depth,
        }
    }

    fn paint(&mut self, brush: Brush) {
        self.commands.push(DrawCommand::Paint(brush));
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            brush,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.push_transform(Transform::translate(10.0, 20.0));
        ctx.fill_rect(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            8.0.into(),
            Color::BLUE.into(),
        );
        ctx.pop_transform();

        assert_eq!(ctx.commands().len(), 3);
        assert!(ctx.commands()[0].is_state());
        assert!(!ctx.commands()[1].is_state());
    }

    #[test]
    fn test_path_builder() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .line_to(100.0, 100.0)
            .line_to(0.0, 100.0)
            .close();

        assert_eq!(path.commands().len(), 5);
    }

    #[test]
    fn test_path_shortcuts() {
        let rect = Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(rect.commands().len(), 5);

        let circle = Path::circle(Point::new(50.0, 50.0), 25.0);
        assert_eq!(circle.bounds(), Rect::new(25.0, 25.0, 50.0, 50.0));
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 20.0, 10.0), 50.0);
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_transform_stack_composes() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        assert!(ctx.current_transform().is_identity());

        ctx.push_transform(Transform::translate(10.0, 20.0));
        ctx.push_transform(Transform::translate(1.0, 2.0));
        assert_eq!(ctx.current_transform().translation(), Vec2::new(11.0, 22.0));

        ctx.pop_transform();
        ctx.pop_transform();

        // Should not panic when popping past the root
        ctx.pop_transform();
        assert!(ctx.current_transform().is_identity());
    }

    #[test]
    fn test_region_state_round_trip() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        let before = ctx.region_state();

        ctx.push_transform(Transform::translate(5.0, 5.0));
        ctx.push_clip(ClipShape::rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(ctx.region_state().clip_depth, 1);
        assert_eq!(ctx.region_state().transform_depth, 1);
        ctx.pop_clip();
        ctx.pop_transform();

        assert_eq!(ctx.region_state(), before);
    }

    #[test]
    fn test_split_off() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.paint(Color::RED.into());
        let start = ctx.len();
        ctx.paint(Color::GREEN.into());
        ctx.paint(Color::BLUE.into());

        let tail = ctx.split_off(start);
        assert_eq!(tail.len(), 2);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_command_apply_replays_into_other_context() {
        let mut source = RecordingContext::new(Size::new(100.0, 100.0));
        source.fill_shape(ClipShape::rect(Rect::new(0.0, 0.0, 4.0, 4.0)), Color::RED);

        let mut target = RecordingContext::new(Size::new(100.0, 100.0));
        for command in source.commands() {
            command.apply(&mut target);
        }
        assert_eq!(source.commands(), target.commands());
        assert_eq!(target.region_state().clip_depth, 0);
    }

    #[test]
    fn test_stroke_configuration() {
        let stroke = Stroke::new(2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Bevel);

        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.join, LineJoin::Bevel);
    }

    #[test]
    fn test_text_style() {
        let style = TextStyle::new(16.0)
            .with_weight(FontWeight::Bold)
            .with_family("Inter");

        assert_eq!(style.size, 16.0);
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.family, "Inter");
    }
}
