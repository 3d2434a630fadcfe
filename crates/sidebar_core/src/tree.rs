//! Immutable render tree produced on every refresh.

use serde::Serialize;
use shared::domain::{ProfileId, ScriptId};

use crate::events::SidebarAction;

pub const PROFILES_TITLE: &str = "Profiles";
pub const SCRIPTS_TITLE: &str = "Scripts";
pub const NEW_PROFILE_TEXT: &str = "New";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIcon {
    Edit,
    Add,
}

/// A clickable icon (with optional text) bound to a host action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionAffordance {
    pub icon: ActionIcon,
    pub text: Option<String>,
    pub action: SidebarAction,
}

impl ActionAffordance {
    pub fn edit(profile_id: ProfileId) -> Self {
        Self {
            icon: ActionIcon::Edit,
            text: None,
            action: SidebarAction::EditProfile(profile_id),
        }
    }

    pub fn new_profile() -> Self {
        Self {
            icon: ActionIcon::Add,
            text: Some(NEW_PROFILE_TEXT.to_string()),
            action: SidebarAction::NewProfile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileButton {
    pub id: ProfileId,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
    /// Present only on the selected profile.
    pub edit: Option<ActionAffordance>,
}

impl ProfileButton {
    pub fn action(&self) -> SidebarAction {
        SidebarAction::SelectProfile(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileList {
    pub title: &'static str,
    pub buttons: Vec<ProfileButton>,
    pub new_profile: ActionAffordance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptButton {
    pub id: ScriptId,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

impl ScriptButton {
    pub fn action(&self) -> SidebarAction {
        SidebarAction::SelectScript(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptList {
    pub title: &'static str,
    pub buttons: Vec<ScriptButton>,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarTree {
    pub profiles: ProfileList,
    pub scripts: ScriptList,
}

impl SidebarTree {
    pub fn selected_profile(&self) -> Option<&ProfileButton> {
        self.profiles.buttons.iter().find(|button| button.selected)
    }

    pub fn selected_scripts(&self) -> impl Iterator<Item = &ScriptButton> {
        self.scripts.buttons.iter().filter(|button| button.selected)
    }
}
