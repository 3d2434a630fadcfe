use std::{cell::RefCell, rc::Rc};

use crate::{
    mount::MountPoint,
    platform::{host_platform, multiselect_hint},
    tree::{
        ActionAffordance, ProfileButton, ProfileList, ScriptButton, ScriptList, SidebarTree,
        PROFILES_TITLE, SCRIPTS_TITLE,
    },
    view_model::SidebarViewModel,
};

/// Header sub-view refreshed ahead of the lists.
pub trait HeaderView<V: ?Sized> {
    fn update(&mut self, vm: &V);
}

impl<V: ?Sized> HeaderView<V> for () {
    fn update(&mut self, _vm: &V) {}
}

/// Lets the host keep a handle on a header it also paints.
impl<V: ?Sized, H: HeaderView<V>> HeaderView<V> for Rc<RefCell<H>> {
    fn update(&mut self, vm: &V) {
        self.borrow_mut().update(vm);
    }
}

pub fn render_profiles<V>(vm: &V) -> ProfileList
where
    V: SidebarViewModel + ?Sized,
{
    let disabled = vm.profile_form_showing();
    let selected_id = vm.selected_profile_id();

    let buttons = vm
        .profiles()
        .iter()
        .map(|profile| {
            let selected = selected_id == Some(&profile.id);
            ProfileButton {
                id: profile.id.clone(),
                label: profile.text.clone(),
                selected,
                disabled,
                edit: selected.then(|| ActionAffordance::edit(profile.id.clone())),
            }
        })
        .collect();

    ProfileList {
        title: PROFILES_TITLE,
        buttons,
        new_profile: ActionAffordance::new_profile(),
    }
}

pub fn render_scripts<V>(vm: &V, platform: &str) -> ScriptList
where
    V: SidebarViewModel + ?Sized,
{
    let disabled = vm.profile_form_showing();
    let selected_ids = vm.selected_script_ids();

    let buttons = vm
        .scripts()
        .iter()
        .map(|script| ScriptButton {
            id: script.id.clone(),
            label: script.text.clone(),
            selected: selected_ids.contains(&script.id),
            disabled,
        })
        .collect();

    ScriptList {
        title: SCRIPTS_TITLE,
        buttons,
        hint: multiselect_hint(platform),
    }
}

/// Pure projection of the view-model; equal state renders equal trees.
pub fn render<V>(vm: &V, platform: &str) -> SidebarTree
where
    V: SidebarViewModel + ?Sized,
{
    SidebarTree {
        profiles: render_profiles(vm),
        scripts: render_scripts(vm, platform),
    }
}

/// The sidebar wired to a header and its two mount points.
pub struct Sidebar<H, P, S> {
    header: H,
    profiles_mount: P,
    scripts_mount: S,
    platform: String,
}

impl<H, P, S> Sidebar<H, P, S> {
    pub fn new(header: H, profiles_mount: P, scripts_mount: S) -> Self {
        Self {
            header,
            profiles_mount,
            scripts_mount,
            platform: host_platform(),
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    pub fn profiles_mount(&self) -> &P {
        &self.profiles_mount
    }

    pub fn scripts_mount(&self) -> &S {
        &self.scripts_mount
    }

    /// Re-renders the header, then both lists into their mounts.
    pub fn refresh<V>(&mut self, vm: &V) -> SidebarTree
    where
        V: SidebarViewModel + ?Sized,
        H: HeaderView<V>,
        P: MountPoint<ProfileList>,
        S: MountPoint<ScriptList>,
    {
        self.header.update(vm);
        let tree = render(vm, &self.platform);
        self.profiles_mount.apply(&tree.profiles);
        self.scripts_mount.apply(&tree.scripts);
        tracing::trace!(
            profiles = tree.profiles.buttons.len(),
            scripts = tree.scripts.buttons.len(),
            form_showing = vm.profile_form_showing(),
            "sidebar refreshed"
        );
        tree
    }
}

/// Wires the sidebar and returns the zero-argument refresh function the host
/// calls after every state change, including the first render. `platform`
/// picks the multiselect hint; pass [`host_platform`] for the compile target.
///
/// Panics if the view-model is mutably borrowed while refreshing; clicks must
/// finish their mutation before the host refreshes.
pub fn init_sidebar<V, H, P, S>(
    vm: Rc<RefCell<V>>,
    platform: impl Into<String>,
    header: H,
    profiles_mount: P,
    scripts_mount: S,
) -> impl FnMut() -> SidebarTree
where
    V: SidebarViewModel,
    H: HeaderView<V>,
    P: MountPoint<ProfileList>,
    S: MountPoint<ScriptList>,
{
    let mut sidebar =
        Sidebar::new(header, profiles_mount, scripts_mount).with_platform(platform);
    move || sidebar.refresh(&*vm.borrow())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
