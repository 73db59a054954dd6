//! Plume Widget Library
//!
//! A small set of controls drawn through the Plume paint idiom.
//!
//! # Architecture
//!
//! Each layout pass runs the same four steps for every widget:
//!
//! 1. **Observe**: read a snapshot from the caller-owned tracker
//!    ([`Clickable`], [`Toggle`], [`RadioGroup`], [`Drag`], [`Editor`]).
//!    Trackers consume input events between passes.
//!
//! 2. **Resolve**: turn the snapshot into an [`Interaction`]. A pass whose
//!    [`LayoutContext`] carries no event queue draws every widget disabled.
//!
//! 3. **Select**: pick the paint ops for each visual role from the widget's
//!    [`LayerSet`].
//!
//! 4. **Stack**: lay out the content first into a recording, then draw the
//!    background sized to fit beneath it.
//!
//! # Example
//!
//! ```rust
//! use plume_core::{Event, EventQueue, Size};
//! use plume_paint::PaintContext;
//! use plume_widgets::prelude::*;
//!
//! let mut toggle = Toggle::new(false);
//! toggle.handle_event(&Event::pointer(plume_core::event_types::POINTER_DOWN, 4.0, 4.0));
//! toggle.handle_event(&Event::pointer(plume_core::event_types::POINTER_UP, 4.0, 4.0));
//! assert!(toggle.value());
//!
//! let mut paint = PaintContext::new(200.0, 100.0);
//! let shaper = MonospaceShaper::default();
//! let queue = EventQueue::new();
//! let mut ctx = LayoutContext::new(
//!     &mut paint,
//!     Constraints::loose(Size::new(200.0, 100.0)),
//!     Some(&queue),
//!     &shaper,
//! );
//!
//! let switch = Switch::new();
//! let size = switch.layout(&mut ctx, &toggle);
//! assert_eq!(size, switch.size());
//! ```

pub mod context;
pub mod editor;
pub mod interaction;
pub mod layers;
pub mod layout;
pub mod text;
pub mod theme;
pub mod trackers;
pub mod widgets;

pub use context::LayoutContext;
pub use editor::Editor;
pub use interaction::{resolve, Interaction, InteractionState, Observation, Routing, Tracker};
pub use layers::{select, KnobVisibility, LayerSet, Role, RolePaint, Selection};
pub use layout::{stack, Alignment, Constraints, Inset};
pub use text::{MonospaceShaper, TextShaper};
pub use theme::{Theme, ThemeError};
pub use trackers::{Clickable, Drag, PointerState, RadioGroup, Toggle};
pub use widgets::{
    paint_text, Content, Label, PushButton, PushButtonConfig, RadioButton, RadioButtonConfig,
    Slider, SliderConfig, Switch, SwitchConfig, TextField, TextFieldConfig,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::context::LayoutContext;
    pub use crate::editor::Editor;
    pub use crate::interaction::{Interaction, InteractionState, Routing, Tracker};
    pub use crate::layers::{LayerSet, RolePaint};
    pub use crate::layout::{Alignment, Constraints, Inset};
    pub use crate::text::{MonospaceShaper, TextShaper};
    pub use crate::theme::Theme;
    pub use crate::trackers::{Clickable, Drag, RadioGroup, Toggle};
    pub use crate::widgets::{Label, PushButton, RadioButton, Slider, Switch, TextField};
}
