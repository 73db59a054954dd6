//! Layout glue: constraints, insets, alignment and stacking
//!
//! Just enough box layout for the widgets in this crate. A widget receives
//! min/max constraints and answers with the size it used. Children are laid
//! out into recordings so they can be measured before they are placed.

use serde::{Deserialize, Serialize};

use plume_core::{Size, Vec2};
use plume_paint::Region;

use crate::context::LayoutContext;

// ─────────────────────────────────────────────────────────────────────────────
// Constraints
// ─────────────────────────────────────────────────────────────────────────────

/// Size bounds handed to a widget
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    pub fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Exactly `size`
    pub fn exact(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Anything from zero up to `max`
    pub fn loose(max: Size) -> Self {
        Self::new(Size::ZERO, max)
    }

    /// Clamp `size` into the bounds
    pub fn constrain(&self, size: Size) -> Size {
        size.clamp(self.min, self.max)
    }

    /// Drop the minimum
    pub fn loosen(self) -> Self {
        Self::loose(self.max)
    }

    pub fn with_min(self, min: Size) -> Self {
        Self::new(min.min(self.max), self.max)
    }

    /// Shrink both bounds by an inset, never below zero
    pub fn deflate(self, inset: &Inset) -> Self {
        let shrink = |size: Size| {
            Size::new(
                (size.width - inset.horizontal()).max(0.0),
                (size.height - inset.vertical()).max(0.0),
            )
        };
        Self::new(shrink(self.min), shrink(self.max))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inset
// ─────────────────────────────────────────────────────────────────────────────

/// Padding around a child
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Inset {
    pub const ZERO: Inset = Inset {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Lay out `child` inside the inset
    pub fn layout<F>(&self, ctx: &mut LayoutContext<'_>, child: F) -> Size
    where
        F: FnOnce(&mut LayoutContext<'_>) -> Size,
    {
        let constraints = ctx.constraints.deflate(self);
        let size = ctx.scoped(Region::offset(self.left, self.top), |ctx| {
            ctx.constraints = constraints;
            child(ctx)
        });
        Size::new(size.width + self.horizontal(), size.height + self.vertical())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Alignment
// ─────────────────────────────────────────────────────────────────────────────

/// Where a smaller child sits inside its container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Alignment {
    /// Offset of a `child` placed in `container`
    pub fn position(&self, child: Size, container: Size) -> Vec2 {
        let free_x = container.width - child.width;
        let free_y = container.height - child.height;
        let x = match self {
            Alignment::TopLeft | Alignment::Left | Alignment::BottomLeft => 0.0,
            Alignment::Top | Alignment::Center | Alignment::Bottom => free_x / 2.0,
            Alignment::TopRight | Alignment::Right | Alignment::BottomRight => free_x,
        };
        let y = match self {
            Alignment::TopLeft | Alignment::Top | Alignment::TopRight => 0.0,
            Alignment::Left | Alignment::Center | Alignment::Right => free_y / 2.0,
            Alignment::BottomLeft | Alignment::Bottom | Alignment::BottomRight => free_y,
        };
        Vec2::new(x, y)
    }

    /// Lay out `child` with no minimum and align it within the minimum size
    pub fn layout<F>(&self, ctx: &mut LayoutContext<'_>, child: F) -> Size
    where
        F: FnOnce(&mut LayoutContext<'_>) -> Size,
    {
        let loose = ctx.constraints.loosen();
        let child = ctx.record(loose, child);
        let size = child.value.max(ctx.constraints.min);
        ctx.replay_at(self.position(child.value, size), &child.op);
        size
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stack
// ─────────────────────────────────────────────────────────────────────────────

/// Overlay an `expanded` child under a `stacked` one
///
/// The stacked child is measured first with no minimum. The expanded child
/// then gets at least that size as its minimum, so it can fill whatever the
/// stacked child occupies. Expanded is emitted first and ends up beneath.
pub fn stack<E, S>(
    ctx: &mut LayoutContext<'_>,
    alignment: Alignment,
    expanded: E,
    stacked: S,
) -> Size
where
    E: FnOnce(&mut LayoutContext<'_>) -> Size,
    S: FnOnce(&mut LayoutContext<'_>) -> Size,
{
    let constraints = ctx.constraints;

    let stacked = ctx.record(constraints.loosen(), stacked);
    let expanded_min = constraints.min.max(stacked.value).min(constraints.max);
    let expanded = ctx.record(constraints.with_min(expanded_min), expanded);

    let size = constraints.constrain(stacked.value.max(expanded.value));

    ctx.replay_at(alignment.position(expanded.value, size), &expanded.op);
    ctx.replay_at(alignment.position(stacked.value, size), &stacked.op);
    size
}
