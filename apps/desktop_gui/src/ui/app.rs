use std::{cell::RefCell, rc::Rc};

use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use sidebar_core::{
    init_sidebar, ProfileList, RetainedMount, ScriptList, SidebarClick, SidebarTree,
};

use crate::controller::{
    events::{NoticeSeverity, UiNotice},
    orchestration::drain_clicks,
};
use crate::ui::{
    header::AppHeader,
    profile_form::{show_profile_form_window, FormResponse},
    sidebar_panel::{show_profiles, show_scripts},
};
use crate::view_model::AppViewModel;

const CLICK_QUEUE_CAPACITY: usize = 64;

type Shared<T> = Rc<RefCell<T>>;

pub struct SidebarApp {
    vm: Shared<AppViewModel>,
    header: Shared<AppHeader>,
    profiles_mount: Shared<RetainedMount<ProfileList>>,
    scripts_mount: Shared<RetainedMount<ScriptList>>,
    refresh: Box<dyn FnMut() -> SidebarTree>,
    platform: String,
    last_tree: Option<SidebarTree>,
    click_tx: Sender<SidebarClick>,
    click_rx: Receiver<SidebarClick>,
    notice: Option<UiNotice>,
    status: Option<String>,
}

impl SidebarApp {
    pub fn new(vm: AppViewModel, title: &str, platform: String, notice: Option<UiNotice>) -> Self {
        let (click_tx, click_rx) = bounded(CLICK_QUEUE_CAPACITY);
        let vm = Rc::new(RefCell::new(vm));
        let header = Rc::new(RefCell::new(AppHeader::new(title)));
        let profiles_mount = Rc::new(RefCell::new(RetainedMount::<ProfileList>::new()));
        let scripts_mount = Rc::new(RefCell::new(RetainedMount::<ScriptList>::new()));
        let refresh = init_sidebar(
            Rc::clone(&vm),
            platform.clone(),
            Rc::clone(&header),
            Rc::clone(&profiles_mount),
            Rc::clone(&scripts_mount),
        );

        Self {
            vm,
            header,
            profiles_mount,
            scripts_mount,
            refresh: Box::new(refresh),
            platform,
            last_tree: None,
            click_tx,
            click_rx,
            notice,
            status: None,
        }
    }

    /// Applies clicks queued during the previous frame, then refreshes.
    fn dispatch_and_refresh(&mut self) {
        if let Some(tree) = &self.last_tree {
            drain_clicks(&self.click_rx, tree, &self.platform, &mut *self.vm.borrow_mut());
        }
        self.last_tree = Some((self.refresh)());
    }

    fn show_notice(&mut self, ui: &mut egui::Ui) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let (fill, stroke) = match notice.severity() {
            NoticeSeverity::Info => (
                egui::Color32::from_rgb(46, 72, 102),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 130, 175)),
            ),
            NoticeSeverity::Warning => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(notice.message()).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.notice = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_sidebar_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar_panel")
            .resizable(true)
            .default_width(240.0)
            .min_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.header.borrow().show(ui);
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("sidebar_lists_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if let Some(profiles) = self.profiles_mount.borrow().current() {
                            show_profiles(ui, profiles, &self.click_tx, &mut self.status);
                        }
                        ui.add_space(16.0);
                        if let Some(scripts) = self.scripts_mount.borrow().current() {
                            show_scripts(ui, scripts, &self.click_tx, &mut self.status);
                        }
                    });
            });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_notice(ui);

            if let Some(status) = &self.status {
                ui.colored_label(egui::Color32::from_rgb(220, 180, 90), status);
                ui.add_space(8.0);
            }

            let Some(tree) = &self.last_tree else {
                return;
            };
            let selected: Vec<&str> = tree
                .selected_scripts()
                .map(|button| button.label.as_str())
                .collect();

            ui.heading("Selected scripts");
            if selected.is_empty() {
                ui.label(egui::RichText::new("Click a script to select it.").weak());
            } else {
                for label in selected {
                    ui.label(label);
                }
            }
        });
    }

    fn show_profile_form(&mut self, ctx: &egui::Context) {
        let mut vm = self.vm.borrow_mut();
        if !vm.form().showing() {
            return;
        }
        match show_profile_form_window(ctx, vm.form_mut()) {
            FormResponse::Save => {
                if let Err(err) = vm.save_profile_form() {
                    tracing::debug!(error = %err, "profile form rejected");
                }
                ctx.request_repaint();
            }
            FormResponse::Cancel => {
                vm.cancel_profile_form();
                ctx.request_repaint();
            }
            FormResponse::None => {}
        }
    }
}

impl eframe::App for SidebarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_and_refresh();
        self.show_sidebar_panel(ctx);
        self.show_workspace(ctx);
        self.show_profile_form(ctx);
    }
}
