use shared::domain::{Profile, ProfileId, Script};

use crate::{selection::ScriptSelection, view_model::SidebarViewModel};

#[derive(Debug, Default)]
pub(crate) struct FixtureViewModel {
    pub profiles: Vec<Profile>,
    pub scripts: Vec<Script>,
    pub selected_profile_id: Option<ProfileId>,
    pub selected_script_ids: ScriptSelection,
    pub form_showing: bool,
    pub new_profile_calls: usize,
    pub edited_profiles: Vec<ProfileId>,
}

impl FixtureViewModel {
    pub fn with_lists(profiles: &[(&str, &str)], scripts: &[(&str, &str)]) -> Self {
        Self {
            profiles: profiles
                .iter()
                .map(|(id, text)| Profile::new(*id, *text))
                .collect(),
            scripts: scripts
                .iter()
                .map(|(id, text)| Script::new(*id, *text))
                .collect(),
            ..Self::default()
        }
    }
}

impl SidebarViewModel for FixtureViewModel {
    fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    fn selected_profile_id(&self) -> Option<&ProfileId> {
        self.selected_profile_id.as_ref()
    }

    fn set_selected_profile_id(&mut self, profile_id: Option<ProfileId>) {
        self.selected_profile_id = profile_id;
    }

    fn selected_script_ids(&self) -> &ScriptSelection {
        &self.selected_script_ids
    }

    fn set_selected_script_ids(&mut self, script_ids: ScriptSelection) {
        self.selected_script_ids = script_ids;
    }

    fn profile_form_showing(&self) -> bool {
        self.form_showing
    }

    fn new_profile(&mut self) {
        self.new_profile_calls += 1;
        self.form_showing = true;
    }

    fn edit_profile(&mut self, profile_id: &ProfileId) {
        self.edited_profiles.push(profile_id.clone());
        self.form_showing = true;
    }
}

pub(crate) fn selection(ids: &[&str]) -> ScriptSelection {
    ids.iter().map(|id| (*id).into()).collect()
}
