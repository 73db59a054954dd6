//! Plume Core
//!
//! Foundational value types and the drawing interface shared by the Plume
//! widget crates:
//!
//! - **Layer Model**: geometry, colors, brushes and clip shapes
//! - **Draw Context**: transform/clip stacks and a recording implementation
//! - **Events**: plain input events and the queue handle that signals routing
//! - **Errors**: configuration faults raised when descriptors are built
//!
//! # Example
//!
//! ```rust
//! use plume_core::{ClipShape, Color, DrawContext, DrawContextExt, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(64.0, 64.0));
//! ctx.fill_shape(ClipShape::uniform_rrect(Size::new(32.0, 16.0), 4.0), Color::BLUE);
//!
//! assert_eq!(ctx.commands().len(), 3);
//! assert_eq!(ctx.region_state().clip_depth, 0);
//! ```

pub mod draw;
pub mod error;
pub mod events;
pub mod layer;

pub use draw::{
    DrawCommand, DrawContext, DrawContextExt, FontWeight, LineCap, LineJoin, Path, PathCommand,
    RecordingContext, RegionState, Stroke, TextStyle, Transform,
};
pub use error::ConfigError;
pub use events::{event_types, Event, EventData, EventQueue, EventType, KeyCode, Modifiers};
pub use layer::{
    Brush, ClipShape, Color, CornerRadius, GradientStop, LinearGradient, Point, Rect, Size,
    TextRun, Vec2,
};
