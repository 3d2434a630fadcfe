mod config;
mod controller;
mod ui;
mod view_model;

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use sidebar_core::{host_platform, init_sidebar, SidebarTree};
use tracing_subscriber::EnvFilter;

use crate::config::{load_catalog, load_settings, CatalogOrigin, Settings};
use crate::controller::events::UiNotice;
use crate::ui::SidebarApp;
use crate::view_model::AppViewModel;

#[derive(Parser, Debug)]
#[command(name = "desktop_gui", about = "Profiles and scripts sidebar")]
struct Args {
    /// Catalog TOML listing profiles and scripts.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Platform string used for the multiselect hint, e.g. `MacIntel` or `Win32`.
    #[arg(long)]
    platform: Option<String>,
    /// Render once, print the sidebar tree as JSON and exit.
    #[arg(long)]
    print_tree: bool,
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(catalog) = &self.catalog {
            settings.catalog_path = Some(catalog.clone());
        }
        if let Some(platform) = &self.platform {
            settings.platform = Some(platform.clone());
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn startup_view_model(settings: &Settings) -> (AppViewModel, Option<UiNotice>) {
    match load_catalog(settings) {
        Ok((catalog, CatalogOrigin::File(path))) => {
            tracing::info!(
                path = %path.display(),
                profiles = catalog.profiles.len(),
                scripts = catalog.scripts.len(),
                "loaded catalog"
            );
            (AppViewModel::new(catalog), None)
        }
        Ok((catalog, CatalogOrigin::Demo)) => {
            tracing::info!("no catalog configured; using demo catalog");
            (
                AppViewModel::new(catalog),
                Some(UiNotice::info(
                    "No catalog configured; showing demo profiles and scripts.",
                )),
            )
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to load catalog");
            (
                AppViewModel::new(shared::catalog::Catalog::demo()),
                Some(UiNotice::catalog_load_failure(&err)),
            )
        }
    }
}

fn render_headless(vm: AppViewModel, platform: &str) -> SidebarTree {
    let mut refresh = init_sidebar(Rc::new(RefCell::new(vm)), platform, (), (), ());
    refresh()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_filter);

    let mut settings = load_settings();
    args.apply_to(&mut settings);
    let platform = settings.platform.clone().unwrap_or_else(host_platform);

    let (vm, notice) = startup_view_model(&settings);

    if args.print_tree {
        let tree = render_headless(vm, &platform);
        let json = serde_json::to_string_pretty(&tree).context("failed to serialize sidebar tree")?;
        println!("{json}");
        return Ok(());
    }

    let title = settings.window_title.clone();
    let app_title = title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(SidebarApp::new(vm, &app_title, platform, notice)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with error: {err}"))
}
