//! Scoped clip/offset regions
//!
//! [`push_region`] applies an offset and/or clip to a context and returns a
//! [`RegionGuard`]. Drawing continues through the guard, and dropping it pops
//! exactly what was pushed, in reverse order. Because a nested guard borrows
//! its parent mutably, regions can only be released innermost first.
//!
//! ```rust
//! use plume_core::{ClipShape, Color, DrawContext, RecordingContext, Size};
//! use plume_paint::{push_region, Region};
//!
//! let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
//! let before = ctx.region_state();
//! {
//!     let mut outer = push_region(&mut ctx, Region::offset(10.0, 10.0));
//!     let mut inner = push_region(&mut *outer, Region::clip(ClipShape::rect(Size::square(8.0).into())));
//!     inner.paint(Color::RED.into());
//! }
//! assert_eq!(ctx.region_state(), before);
//! ```

use std::ops::{Deref, DerefMut};

use plume_core::{ClipShape, DrawContext, Transform, Vec2};

/// What a region pushes: an optional offset, then an optional clip
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    pub offset: Option<Vec2>,
    pub clip: Option<ClipShape>,
}

impl Region {
    /// Clip only
    pub fn clip(shape: ClipShape) -> Self {
        Self {
            offset: None,
            clip: Some(shape),
        }
    }

    /// Offset only
    pub fn offset(dx: f32, dy: f32) -> Self {
        Self {
            offset: Some(Vec2::new(dx, dy)),
            clip: None,
        }
    }

    /// Offset, then clip in the offset coordinates
    pub fn clip_at(offset: Vec2, shape: ClipShape) -> Self {
        Self {
            offset: Some(offset),
            clip: Some(shape),
        }
    }

    /// Number of stack entries this region pushes
    pub fn depth(&self) -> usize {
        usize::from(self.offset.is_some()) + usize::from(self.clip.is_some())
    }
}

/// Guard that restores the context when dropped
pub struct RegionGuard<'a, C: DrawContext + ?Sized> {
    ctx: &'a mut C,
    pushed_offset: bool,
    pushed_clip: bool,
}

/// Push `region` onto `ctx`
pub fn push_region<C: DrawContext + ?Sized>(ctx: &mut C, region: Region) -> RegionGuard<'_, C> {
    let Region { offset, clip } = region;

    let pushed_offset = offset.is_some();
    if let Some(offset) = offset {
        ctx.push_transform(Transform::from(offset));
    }

    let pushed_clip = clip.is_some();
    if let Some(shape) = clip {
        ctx.push_clip(shape);
    }

    RegionGuard {
        ctx,
        pushed_offset,
        pushed_clip,
    }
}

impl<C: DrawContext + ?Sized> RegionGuard<'_, C> {
    /// Number of stack entries this guard will pop
    pub fn depth(&self) -> usize {
        usize::from(self.pushed_offset) + usize::from(self.pushed_clip)
    }
}

impl<C: DrawContext + ?Sized> Deref for RegionGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: DrawContext + ?Sized> DerefMut for RegionGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: DrawContext + ?Sized> Drop for RegionGuard<'_, C> {
    fn drop(&mut self) {
        if self.pushed_clip {
            self.ctx.pop_clip();
        }
        if self.pushed_offset {
            self.ctx.pop_transform();
        }
    }
}
