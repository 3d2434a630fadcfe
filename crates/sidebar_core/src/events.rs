//! Click events and the actions rendered elements are bound to.

use serde::Serialize;
use shared::domain::{ProfileId, ScriptId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        meta: false,
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const META: Self = Self {
        meta: true,
        ctrl: false,
        alt: false,
        shift: false,
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            default_prevented: false,
        }
    }

    pub fn plain() -> Self {
        Self::new(Modifiers::NONE)
    }

    pub fn with_meta() -> Self {
        Self::new(Modifiers::META)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SidebarAction {
    SelectProfile(ProfileId),
    SelectScript(ScriptId),
    NewProfile,
    EditProfile(ProfileId),
}

impl SidebarAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectProfile(_) => "select_profile",
            Self::SelectScript(_) => "select_script",
            Self::NewProfile => "new_profile",
            Self::EditProfile(_) => "edit_profile",
        }
    }
}

/// A click captured by a binding layer, queued for dispatch after painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarClick {
    pub action: SidebarAction,
    pub modifiers: Modifiers,
}

impl SidebarClick {
    pub fn new(action: SidebarAction, modifiers: Modifiers) -> Self {
        Self { action, modifiers }
    }

    pub fn event(&self) -> ClickEvent {
        ClickEvent::new(self.modifiers)
    }
}
