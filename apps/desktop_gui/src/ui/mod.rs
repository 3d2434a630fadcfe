//! UI layer for the desktop sidebar: app shell, header, list painting and the profile form.

pub mod app;
pub mod header;
pub mod profile_form;
pub mod sidebar_panel;

pub use app::SidebarApp;
