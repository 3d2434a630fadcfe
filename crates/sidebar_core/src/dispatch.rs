use shared::domain::ProfileId;

use crate::{
    events::{ClickEvent, SidebarAction},
    selection::{handle_profile_click, handle_script_click},
    tree::SidebarTree,
    view_model::SidebarViewModel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Applied,
    /// The clicked button was disabled in the tree the click came from.
    IgnoredDisabled,
    /// Nothing in the tree carries this action.
    UnknownTarget,
}

enum Target {
    Enabled,
    Disabled,
    Missing,
}

impl Target {
    fn from_button(found: Option<bool>) -> Self {
        match found {
            Some(true) => Self::Disabled,
            Some(false) => Self::Enabled,
            None => Self::Missing,
        }
    }
}

fn locate(tree: &SidebarTree, action: &SidebarAction) -> Target {
    match action {
        SidebarAction::SelectProfile(id) => Target::from_button(
            tree.profiles
                .buttons
                .iter()
                .find(|button| &button.id == id)
                .map(|button| button.disabled),
        ),
        SidebarAction::SelectScript(id) => Target::from_button(
            tree.scripts
                .buttons
                .iter()
                .find(|button| &button.id == id)
                .map(|button| button.disabled),
        ),
        SidebarAction::NewProfile => Target::Enabled,
        SidebarAction::EditProfile(_) => {
            let rendered = tree.profiles.buttons.iter().any(|button| {
                button
                    .edit
                    .as_ref()
                    .is_some_and(|edit| &edit.action == action)
            });
            if rendered {
                Target::Enabled
            } else {
                Target::Missing
            }
        }
    }
}

/// Routes a click on a rendered element to its handler.
///
/// `tree` must be the tree the click was made on, so a button that was
/// rendered disabled never fires even if state changed since.
pub fn dispatch_action<V>(
    tree: &SidebarTree,
    action: &SidebarAction,
    event: &mut ClickEvent,
    vm: &mut V,
) -> DispatchOutcome
where
    V: SidebarViewModel + ?Sized,
{
    match locate(tree, action) {
        Target::Disabled => {
            tracing::debug!(action = action.name(), "ignored click on disabled button");
            return DispatchOutcome::IgnoredDisabled;
        }
        Target::Missing => {
            tracing::debug!(action = action.name(), "ignored click on unknown target");
            return DispatchOutcome::UnknownTarget;
        }
        Target::Enabled => {}
    }

    match action {
        SidebarAction::SelectProfile(id) => handle_profile_click(event, id, vm),
        SidebarAction::SelectScript(id) => handle_script_click(event, id, vm),
        SidebarAction::NewProfile => handle_new_profile(event, vm),
        SidebarAction::EditProfile(id) => handle_edit_profile(event, id, vm),
    }
    DispatchOutcome::Applied
}

pub fn handle_new_profile<V>(event: &mut ClickEvent, vm: &mut V)
where
    V: SidebarViewModel + ?Sized,
{
    event.prevent_default();
    vm.new_profile();
}

pub fn handle_edit_profile<V>(event: &mut ClickEvent, profile_id: &ProfileId, vm: &mut V)
where
    V: SidebarViewModel + ?Sized,
{
    event.prevent_default();
    vm.edit_profile(profile_id);
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
