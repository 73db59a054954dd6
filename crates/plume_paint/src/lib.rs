//! Plume Paint
//!
//! The rendering idiom every Plume widget shares:
//!
//! - **Deferred emission**: record commands now, replay them later ([`CallOp`])
//! - **Scoped regions**: offsets and clips released by an RAII guard ([`RegionGuard`])
//! - **Paint ops**: colors, brushes, recordings and closures behind one trait ([`PaintOp`])
//! - **Drop shadows**: layered strokes with an exponential width falloff ([`DropShadow`])
//!
//! # Example
//!
//! ```rust
//! use plume_core::{ClipShape, Color, Size};
//! use plume_paint::{DropShadow, PaintContext, PaintOp};
//!
//! let mut ctx = PaintContext::new(200.0, 100.0);
//! let shadow = DropShadow::new(Color::BLACK.with_alpha(0.4), 3, 6.0, 2.0).unwrap();
//! let outline = |size: Size| ClipShape::uniform_rrect(size, 6.0).to_path();
//!
//! let size = shadow.layout(&mut ctx, outline, |ctx| {
//!     let mut clip = ctx.push_clip_scope(ClipShape::uniform_rrect(Size::new(80.0, 30.0), 6.0));
//!     Color::WHITE.paint(&mut *clip);
//!     Size::new(80.0, 30.0)
//! });
//! assert_eq!(size, Size::new(80.0, 30.0));
//! ```

pub mod context;
pub mod paint_op;
pub mod record;
pub mod region;
pub mod shadow;

pub use context::PaintContext;
pub use paint_op::{paint_fn, paint_ref, solid, PaintFn, PaintOp, PaintRef};
pub use record::{CallOp, Recorded, Recording};
pub use region::{push_region, Region, RegionGuard};
pub use shadow::{DropShadow, ShadowConfig, ShadowLayer};

// Re-export core types for convenience
pub use plume_core::{Brush, ClipShape, Color, DrawContext, DrawContextExt, Path, Size};
