use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::catalog::Catalog;

pub const SETTINGS_FILE: &str = "desktop_gui.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub platform: Option<String>,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            platform: None,
            window_title: "Tailweb Sidebar".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    catalog: Option<PathBuf>,
    platform: Option<String>,
    window_title: Option<String>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment variables.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<SettingsFile>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.catalog {
                    settings.catalog_path = Some(v);
                }
                if let Some(v) = file_cfg.platform {
                    settings.platform = Some(v);
                }
                if let Some(v) = file_cfg.window_title {
                    settings.window_title = v;
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
            }
        }
    }

    if let Some(v) = env("SIDEBAR_CATALOG") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__CATALOG") {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("SIDEBAR_PLATFORM") {
        settings.platform = Some(v);
    }
    if let Some(v) = env("APP__PLATFORM") {
        settings.platform = Some(v);
    }

    settings
}

pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tailweb").join("sidebar.toml"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    File(PathBuf),
    Demo,
}

/// Loads the configured catalog. An explicitly configured path must exist;
/// without one, the default location is used if present, else the demo catalog.
pub fn load_catalog(settings: &Settings) -> anyhow::Result<(Catalog, CatalogOrigin)> {
    let path = match &settings.catalog_path {
        Some(path) => path.clone(),
        None => match default_catalog_path().filter(|path| path.exists()) {
            Some(path) => path,
            None => return Ok((Catalog::demo(), CatalogOrigin::Demo)),
        },
    };

    let catalog = read_catalog(&path)?;
    Ok((catalog, CatalogOrigin::File(path)))
}

pub fn read_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog '{}'", path.display()))?;
    let catalog = Catalog::from_toml_str(&raw)
        .with_context(|| format!("failed to load catalog '{}'", path.display()))?;
    Ok(catalog)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
