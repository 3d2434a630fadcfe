//! Concrete view-model the sidebar projects: catalog, selections and the profile form.

use shared::{
    catalog::Catalog,
    domain::{Profile, ProfileId, Script},
};
use sidebar_core::{ScriptSelection, SidebarViewModel};

use crate::ui::profile_form::{ProfileForm, ProfileFormError};

#[derive(Debug, Clone)]
pub struct AppViewModel {
    catalog: Catalog,
    selected_profile_id: Option<ProfileId>,
    selected_script_ids: ScriptSelection,
    form: ProfileForm,
}

impl AppViewModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected_profile_id: None,
            selected_script_ids: ScriptSelection::new(),
            form: ProfileForm::default(),
        }
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    pub fn selected_profile(&self) -> Option<&Profile> {
        let id = self.selected_profile_id.as_ref()?;
        self.catalog.profiles.iter().find(|profile| &profile.id == id)
    }

    /// Validates the open form, upserts the profile and selects it.
    pub fn save_profile_form(&mut self) -> Result<ProfileId, ProfileFormError> {
        let profile = match self.form.submit(&self.catalog.profiles) {
            Ok(profile) => profile,
            Err(err) => {
                self.form.set_error(&err);
                return Err(err);
            }
        };

        let id = profile.id.clone();
        match self
            .catalog
            .profiles
            .iter_mut()
            .find(|existing| existing.id == id)
        {
            Some(existing) => *existing = profile,
            None => self.catalog.profiles.push(profile),
        }

        tracing::info!(profile_id = %id, "profile saved");
        self.selected_profile_id = Some(id.clone());
        self.form.close();
        Ok(id)
    }

    pub fn cancel_profile_form(&mut self) {
        self.form.close();
    }
}

impl SidebarViewModel for AppViewModel {
    fn profiles(&self) -> &[Profile] {
        &self.catalog.profiles
    }

    fn scripts(&self) -> &[Script] {
        &self.catalog.scripts
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
        self.form.showing()
    }

    fn new_profile(&mut self) {
        self.form.open_new();
    }

    fn edit_profile(&mut self, profile_id: &ProfileId) {
        match self
            .catalog
            .profiles
            .iter()
            .find(|profile| &profile.id == profile_id)
        {
            Some(profile) => self.form.open_edit(profile),
            None => tracing::warn!(profile_id = %profile_id, "edit requested for unknown profile"),
        }
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
