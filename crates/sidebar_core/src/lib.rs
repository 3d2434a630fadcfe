//! Selection state machine and render orchestration for the profiles/scripts sidebar.
//!
//! The host owns the view-model ([`SidebarViewModel`]). Clicks are resolved into
//! selection mutations by explicit handlers, and [`Sidebar::refresh`] re-projects
//! the current state into an immutable [`SidebarTree`] that mount points apply.

pub mod diff;
pub mod dispatch;
pub mod events;
pub mod mount;
pub mod platform;
pub mod render;
pub mod selection;
pub mod tree;
pub mod view_model;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatch::{dispatch_action, handle_edit_profile, handle_new_profile, DispatchOutcome};
pub use events::{ClickEvent, Modifiers, SidebarAction, SidebarClick};
pub use mount::{ListNode, MountPoint, RetainedMount};
pub use platform::{host_platform, modifier_label, multiselect_hint};
pub use render::{init_sidebar, render, render_profiles, render_scripts, HeaderView, Sidebar};
pub use selection::{
    handle_profile_click, handle_script_click, resolve_script_selection, ScriptSelection,
};
pub use tree::{
    ActionAffordance, ActionIcon, ProfileButton, ProfileList, ScriptButton, ScriptList,
    SidebarTree,
};
pub use view_model::SidebarViewModel;
