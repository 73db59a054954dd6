//! Widget theme loaded from TOML
//!
//! A theme collects the configuration of every widget in one file:
//!
//! ```toml
//! [button]
//! corner_radius = 4.0
//! background = { r = 0.1, g = 0.1, b = 0.1 }
//!
//! [slider.knob_shadow]
//! color = { r = 0.0, g = 0.0, b = 0.0, a = 0.4 }
//! layers = 4
//! spread = 6.0
//! ```
//!
//! Missing tables and fields fall back to the widget defaults. Shadows are
//! validated while parsing; every other dimension is checked by
//! [`Theme::validate`], which [`Theme::from_toml`] runs before returning.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use plume_core::error::ConfigError;

use crate::widgets::{
    PushButton, PushButtonConfig, RadioButton, RadioButtonConfig, Slider, SliderConfig, Switch,
    SwitchConfig, TextField, TextFieldConfig,
};

/// Errors from loading or saving a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ThemeError>;

/// Configuration for every widget
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub button: PushButtonConfig,
    pub radio: RadioButtonConfig,
    pub switch: SwitchConfig,
    pub slider: SliderConfig,
    pub text_field: TextFieldConfig,
}

impl Theme {
    /// Parse and validate a theme
    pub fn from_toml(source: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(source)?;
        theme.validate()?;
        tracing::debug!("theme loaded");
        Ok(theme)
    }

    /// Read a theme file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every widget's dimensions
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.button.validate()?;
        self.radio.validate()?;
        self.switch.validate()?;
        self.slider.validate()?;
        self.text_field.validate()
    }

    pub fn push_button(&self, label: impl Into<String>) -> PushButton {
        PushButton::with_config(label, &self.button)
    }

    pub fn radio_button(&self, key: impl Into<String>) -> RadioButton {
        RadioButton::with_config(key, &self.radio)
    }

    pub fn switch(&self) -> Switch {
        Switch::with_config(&self.switch)
    }

    pub fn slider(&self) -> Slider {
        Slider::with_config(&self.slider)
    }

    pub fn text_field(&self, hint: impl Into<String>) -> TextField {
        TextField::with_config(hint, &self.text_field)
    }
}
