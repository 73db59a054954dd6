//! Paint-layer selection
//!
//! Every widget carries a [`LayerSet`]: the paint ops it may emit for each
//! visual role, with separate enabled and disabled variants. [`select`] is a
//! pure function from the resolved [`Interaction`] to the ops to emit this
//! pass.

use smallvec::SmallVec;

use plume_paint::PaintRef;

use crate::interaction::{Interaction, InteractionState};

/// Visual role of a paint layer, in emission order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Background,
    /// Hover or press highlight over the background
    Overlay,
    Tint,
    Outline,
    Knob,
    Foreground,
}

/// Enabled and disabled variants of one role
#[derive(Clone, Debug, Default)]
pub struct RolePaint {
    pub enabled: Option<PaintRef>,
    pub disabled: Option<PaintRef>,
}

impl RolePaint {
    pub fn new(enabled: PaintRef, disabled: PaintRef) -> Self {
        Self {
            enabled: Some(enabled),
            disabled: Some(disabled),
        }
    }

    /// Drawn only while enabled
    pub fn enabled_only(enabled: PaintRef) -> Self {
        Self {
            enabled: Some(enabled),
            disabled: None,
        }
    }

    /// The variant for a pass that is (or is not) disabled
    pub fn variant(&self, disabled: bool) -> Option<PaintRef> {
        if disabled {
            self.disabled.clone()
        } else {
            self.enabled.clone()
        }
    }
}

/// When the knob role is drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KnobVisibility {
    /// Every pass (switch)
    #[default]
    Always,
    /// Only while active (selected radio button)
    WhenActive,
}

/// The paint ops a widget may emit, per role
#[derive(Clone, Debug, Default)]
pub struct LayerSet {
    pub background: RolePaint,
    pub tint: RolePaint,
    pub outline: RolePaint,
    pub knob: RolePaint,
    pub foreground: RolePaint,
    /// Drawn over the background while hovered (enabled only)
    pub hover: Option<PaintRef>,
    /// Drawn over the background while pressed (enabled only)
    pub press: Option<PaintRef>,
    pub knob_visibility: KnobVisibility,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, paint: RolePaint) -> Self {
        self.background = paint;
        self
    }

    pub fn tint(mut self, paint: RolePaint) -> Self {
        self.tint = paint;
        self
    }

    pub fn outline(mut self, paint: RolePaint) -> Self {
        self.outline = paint;
        self
    }

    pub fn knob(mut self, paint: RolePaint) -> Self {
        self.knob = paint;
        self
    }

    pub fn foreground(mut self, paint: RolePaint) -> Self {
        self.foreground = paint;
        self
    }

    pub fn hover(mut self, paint: PaintRef) -> Self {
        self.hover = Some(paint);
        self
    }

    pub fn press(mut self, paint: PaintRef) -> Self {
        self.press = Some(paint);
        self
    }

    pub fn knob_visibility(mut self, visibility: KnobVisibility) -> Self {
        self.knob_visibility = visibility;
        self
    }
}

/// Ops chosen for one pass; `None` means the role draws nothing
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub background: Option<PaintRef>,
    pub overlay: Option<PaintRef>,
    pub tint: Option<PaintRef>,
    pub outline: Option<PaintRef>,
    pub knob: Option<PaintRef>,
    pub foreground: Option<PaintRef>,
}

impl Selection {
    pub fn get(&self, role: Role) -> Option<&PaintRef> {
        match role {
            Role::Background => self.background.as_ref(),
            Role::Overlay => self.overlay.as_ref(),
            Role::Tint => self.tint.as_ref(),
            Role::Outline => self.outline.as_ref(),
            Role::Knob => self.knob.as_ref(),
            Role::Foreground => self.foreground.as_ref(),
        }
    }

    /// Selected ops in emission order
    pub fn layers(&self) -> SmallVec<[(Role, PaintRef); 6]> {
        [
            Role::Background,
            Role::Overlay,
            Role::Tint,
            Role::Outline,
            Role::Knob,
            Role::Foreground,
        ]
        .into_iter()
        .filter_map(|role| self.get(role).map(|op| (role, op.clone())))
        .collect()
    }

    /// Roles that draw this pass, in emission order
    pub fn roles(&self) -> SmallVec<[Role; 6]> {
        self.layers().into_iter().map(|(role, _)| role).collect()
    }
}

/// Choose the ops to emit for `interaction`
pub fn select(interaction: Interaction, set: &LayerSet) -> Selection {
    let disabled = interaction.is_disabled();

    let overlay = match interaction.state {
        InteractionState::Pressed => set.press.clone(),
        InteractionState::Hovered => set.hover.clone(),
        _ => None,
    };

    let knob = match set.knob_visibility {
        KnobVisibility::Always => set.knob.variant(disabled),
        KnobVisibility::WhenActive if interaction.active => set.knob.variant(disabled),
        KnobVisibility::WhenActive => None,
    };

    Selection {
        background: set.background.variant(disabled),
        overlay,
        tint: if interaction.active {
            set.tint.variant(disabled)
        } else {
            None
        },
        outline: set.outline.variant(disabled),
        knob,
        foreground: set.foreground.variant(disabled),
    }
}
