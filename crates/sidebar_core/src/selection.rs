use std::collections::BTreeSet;

use shared::domain::{ProfileId, ScriptId};

use crate::{events::ClickEvent, view_model::SidebarViewModel};

pub type ScriptSelection = BTreeSet<ScriptId>;

/// Next script selection for a click on `clicked_id`.
///
/// A plain click replaces the selection with `{clicked_id}`. With the
/// modifier held the clicked id is toggled: removed if present, added if not.
pub fn resolve_script_selection(
    current: &ScriptSelection,
    clicked_id: &ScriptId,
    modifier_held: bool,
) -> ScriptSelection {
    if !modifier_held {
        return BTreeSet::from([clicked_id.clone()]);
    }

    let mut next = current.clone();
    if !next.remove(clicked_id) {
        next.insert(clicked_id.clone());
    }
    next
}

pub fn handle_script_click<V>(event: &mut ClickEvent, script_id: &ScriptId, vm: &mut V)
where
    V: SidebarViewModel + ?Sized,
{
    event.prevent_default();
    let modifier_held = event.modifiers.meta;
    let next = resolve_script_selection(vm.selected_script_ids(), script_id, modifier_held);
    tracing::debug!(
        script_id = %script_id,
        modifier_held,
        selected = next.len(),
        "script selection resolved"
    );
    vm.set_selected_script_ids(next);
}

/// Profiles are single-select: a click always replaces the selection.
pub fn handle_profile_click<V>(_event: &mut ClickEvent, profile_id: &ProfileId, vm: &mut V)
where
    V: SidebarViewModel + ?Sized,
{
    tracing::debug!(profile_id = %profile_id, "profile selected");
    vm.set_selected_profile_id(Some(profile_id.clone()));
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
