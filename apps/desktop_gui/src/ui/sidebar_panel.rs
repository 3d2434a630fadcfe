//! Paints the retained profile/script lists and turns clicks into queued [`SidebarClick`]s.

use std::borrow::Cow;

use crossbeam_channel::Sender;
use sidebar_core::{
    platform::MAC_MODIFIER, ActionAffordance, ActionIcon, Modifiers, ProfileList, ScriptList,
    SidebarAction, SidebarClick,
};

use crate::controller::orchestration::enqueue_click;

const BUTTON_WIDTH: f32 = 180.0;
const CTRL_MODIFIER: &str = "Ctrl";

/// egui reports Cmd on macOS and Ctrl elsewhere as `command`; that is the
/// multiselect key.
pub fn click_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        meta: modifiers.command,
        ctrl: modifiers.ctrl,
        alt: modifiers.alt,
        shift: modifiers.shift,
    }
}

/// Hint painted under the scripts list. It names the key [`click_modifiers`]
/// treats as multiselect, which is Ctrl off macOS whatever glyph the tree's
/// platform picked.
pub fn painted_hint(list: &ScriptList, command_is_mac_cmd: bool) -> Cow<'_, str> {
    let key = if command_is_mac_cmd {
        MAC_MODIFIER
    } else {
        CTRL_MODIFIER
    };
    if list.hint.starts_with(key) {
        Cow::Borrowed(&list.hint)
    } else {
        Cow::Owned(format!("{key}-click to multiselect"))
    }
}

fn icon_glyph(icon: ActionIcon) -> &'static str {
    match icon {
        ActionIcon::Edit => "✏",
        ActionIcon::Add => "➕",
    }
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title.to_uppercase()).small().weak());
    ui.add_space(4.0);
}

fn list_button(label: &str, selected: bool) -> egui::Button<'static> {
    egui::Button::new(label.to_string())
        .selected(selected)
        .min_size(egui::vec2(BUTTON_WIDTH, 26.0))
}

fn affordance_button(affordance: &ActionAffordance) -> egui::Button<'static> {
    let glyph = icon_glyph(affordance.icon);
    let text = match &affordance.text {
        Some(text) => format!("{glyph} {text}"),
        None => glyph.to_string(),
    };
    egui::Button::new(text)
        .min_size(egui::vec2(24.0, 24.0))
        .stroke(egui::Stroke::NONE)
        .fill(egui::Color32::TRANSPARENT)
}

fn send(
    ui: &egui::Ui,
    clicks: &Sender<SidebarClick>,
    action: SidebarAction,
    status: &mut Option<String>,
) {
    let modifiers = click_modifiers(ui.input(|i| i.modifiers));
    enqueue_click(clicks, SidebarClick::new(action, modifiers), status);
    ui.ctx().request_repaint();
}

pub fn show_profiles(
    ui: &mut egui::Ui,
    list: &ProfileList,
    clicks: &Sender<SidebarClick>,
    status: &mut Option<String>,
) {
    section_title(ui, list.title);

    for button in &list.buttons {
        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                !button.disabled,
                list_button(&button.label, button.selected),
            );
            if response.clicked() {
                send(ui, clicks, button.action(), status);
            }

            if let Some(edit) = &button.edit {
                if ui
                    .add(affordance_button(edit))
                    .on_hover_text("Edit profile")
                    .clicked()
                {
                    send(ui, clicks, edit.action.clone(), status);
                }
            }
        });
    }

    if ui.add(affordance_button(&list.new_profile)).clicked() {
        send(ui, clicks, list.new_profile.action.clone(), status);
    }
}

pub fn show_scripts(
    ui: &mut egui::Ui,
    list: &ScriptList,
    clicks: &Sender<SidebarClick>,
    status: &mut Option<String>,
) {
    section_title(ui, list.title);

    for button in &list.buttons {
        let response = ui.add_enabled(
            !button.disabled,
            list_button(&button.label, button.selected),
        );
        if response.clicked() {
            send(ui, clicks, button.action(), status);
        }
    }

    ui.add_space(6.0);
    let hint = painted_hint(list, cfg!(target_os = "macos"));
    ui.label(egui::RichText::new(hint.as_ref()).small().weak());
}

#[cfg(test)]
mod tests {
    use super::{click_modifiers, painted_hint};
    use sidebar_core::{render_scripts, ScriptList};

    fn scripts_for(platform: &str) -> ScriptList {
        render_scripts(&crate::view_model::AppViewModel::new(Default::default()), platform)
    }

    #[test]
    fn command_key_is_the_multiselect_modifier() {
        let modifiers = click_modifiers(egui::Modifiers::COMMAND);
        assert!(modifiers.meta);

        let modifiers = click_modifiers(egui::Modifiers::SHIFT);
        assert!(!modifiers.meta);
        assert!(modifiers.shift);
    }

    #[test]
    fn hint_names_ctrl_where_command_is_ctrl() {
        let windows = scripts_for("Win32");
        assert_eq!(windows.hint, "⊞-click to multiselect");
        assert_eq!(painted_hint(&windows, false), "Ctrl-click to multiselect");

        let linux = scripts_for("Linux x86_64");
        assert_eq!(painted_hint(&linux, false), "Ctrl-click to multiselect");
    }

    #[test]
    fn hint_keeps_cmd_glyph_on_macos() {
        let mac = scripts_for("MacIntel");
        assert!(matches!(
            painted_hint(&mac, true),
            std::borrow::Cow::Borrowed("⌘-click to multiselect")
        ));
        assert_eq!(painted_hint(&scripts_for("Win32"), true), "⌘-click to multiselect");
    }
}
