use shared::domain::{Profile, ProfileId, Script};

use crate::selection::ScriptSelection;

/// Host-owned state the sidebar reads and mutates.
///
/// The sidebar keeps no selection state of its own; every render re-reads
/// these accessors and every click writes back through the setters.
pub trait SidebarViewModel {
    fn profiles(&self) -> &[Profile];

    fn scripts(&self) -> &[Script];

    fn selected_profile_id(&self) -> Option<&ProfileId>;

    fn set_selected_profile_id(&mut self, profile_id: Option<ProfileId>);

    fn selected_script_ids(&self) -> &ScriptSelection;

    fn set_selected_script_ids(&mut self, script_ids: ScriptSelection);

    /// While true, every list button renders disabled.
    fn profile_form_showing(&self) -> bool;

    fn new_profile(&mut self);

    fn edit_profile(&mut self, profile_id: &ProfileId);
}
