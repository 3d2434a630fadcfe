//! New/edit profile form state and its egui window.

use shared::domain::{Profile, ProfileId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileFormError {
    #[error("Profile id must not be empty")]
    EmptyId,
    #[error("Profile name must not be empty")]
    EmptyText,
    #[error("A profile with id '{0}' already exists")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ProfileId),
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    showing: bool,
    mode: FormMode,
    pub id_input: String,
    pub text_input: String,
    error: Option<String>,
}

impl ProfileForm {
    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, err: &ProfileFormError) {
        self.error = Some(err.to_string());
    }

    pub fn open_new(&mut self) {
        *self = Self {
            showing: true,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, profile: &Profile) {
        *self = Self {
            showing: true,
            mode: FormMode::Edit(profile.id.clone()),
            id_input: profile.id.to_string(),
            text_input: profile.text.clone(),
            error: None,
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New profile",
            FormMode::Edit(_) => "Edit profile",
        }
    }

    /// Builds the profile the form describes. Edits keep their original id.
    pub fn submit(&self, existing: &[Profile]) -> Result<Profile, ProfileFormError> {
        let text = self.text_input.trim();
        let id = match &self.mode {
            FormMode::Edit(id) => id.clone(),
            FormMode::Create => {
                let id = self.id_input.trim();
                if id.is_empty() {
                    return Err(ProfileFormError::EmptyId);
                }
                if existing.iter().any(|profile| profile.id.as_str() == id) {
                    return Err(ProfileFormError::DuplicateId(id.to_string()));
                }
                ProfileId::from(id)
            }
        };

        if text.is_empty() {
            return Err(ProfileFormError::EmptyText);
        }

        Ok(Profile::new(id, text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResponse {
    None,
    Save,
    Cancel,
}

pub fn show_profile_form_window(ctx: &egui::Context, form: &mut ProfileForm) -> FormResponse {
    let mut response = FormResponse::None;
    let editing = matches!(form.mode(), FormMode::Edit(_));

    egui::Window::new(form.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Grid::new("profile_form_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Id");
                    ui.add_enabled(!editing, egui::TextEdit::singleline(&mut form.id_input));
                    ui.end_row();

                    ui.label("Name");
                    let name = ui.text_edit_singleline(&mut form.text_input);
                    if name.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        response = FormResponse::Save;
                    }
                    ui.end_row();
                });

            if let Some(error) = form.error() {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::from_rgb(220, 110, 110), error.to_string());
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    response = FormResponse::Save;
                }
                if ui.button("Cancel").clicked() {
                    response = FormResponse::Cancel;
                }
            });
        });

    response
}

#[cfg(test)]
#[path = "tests/profile_form_tests.rs"]
mod tests;
