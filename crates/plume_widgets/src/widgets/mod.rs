//! The widget set
//!
//! Every widget follows the same pass: read a tracker snapshot, resolve the
//! interaction against the pass's routing, select paint layers, then lay out
//! an expanded background beneath stacked content.

pub mod button;
pub mod label;
pub mod radio;
pub mod slider;
pub mod switch;
pub mod text_field;

pub use button::{PushButton, PushButtonConfig};
pub use label::{paint_text, Label};
pub use radio::{RadioButton, RadioButtonConfig};
pub use slider::{Slider, SliderConfig};
pub use switch::{Switch, SwitchConfig};
pub use text_field::{Content, TextField, TextFieldConfig};
