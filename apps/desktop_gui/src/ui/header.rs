use sidebar_core::{HeaderView, SidebarViewModel};

use crate::view_model::AppViewModel;

/// Header sub-view: app title plus a summary of the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppHeader {
    title: String,
    profile_line: String,
    scripts_line: String,
}

impl AppHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn profile_line(&self) -> &str {
        &self.profile_line
    }

    pub fn scripts_line(&self) -> &str {
        &self.scripts_line
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.heading(&self.title);
        ui.label(egui::RichText::new(self.profile_line()).weak());
        ui.label(egui::RichText::new(self.scripts_line()).small().weak());
    }
}

impl HeaderView<AppViewModel> for AppHeader {
    fn update(&mut self, vm: &AppViewModel) {
        self.profile_line = match vm.selected_profile() {
            Some(profile) => profile.text.clone(),
            None => "No profile selected".to_string(),
        };
        self.scripts_line = match vm.selected_script_ids().len() {
            0 => "No scripts selected".to_string(),
            1 => "1 script selected".to_string(),
            n => format!("{n} scripts selected"),
        };
    }
}
