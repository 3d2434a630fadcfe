use super::*;
use crate::{render::render_scripts, test_support::{selection, FixtureViewModel}};

fn scripts_vm() -> FixtureViewModel {
    FixtureViewModel::with_lists(&[], &[("a", "A"), ("b", "B")])
}

#[test]
fn first_apply_inserts_everything() {
    let vm = scripts_vm();
    let mut mount = RetainedMount::<ScriptList>::new();
    mount.apply(&render_scripts(&vm, "MacIntel"));

    assert_eq!(mount.apply_count(), 1);
    assert_eq!(mount.last_patches().len(), 2);
    assert!(mount.chrome_changed());
    assert!(!mount.is_settled());
}

#[test]
fn reapplying_unchanged_state_settles() {
    let vm = scripts_vm();
    let mut mount = RetainedMount::<ScriptList>::new();
    mount.apply(&render_scripts(&vm, "MacIntel"));
    mount.apply(&render_scripts(&vm, "MacIntel"));

    assert!(mount.last_patches().is_empty());
    assert!(mount.is_settled());
}

#[test]
fn selection_change_patches_only_affected_button() {
    let mut vm = scripts_vm();
    let mut mount = RetainedMount::<ScriptList>::new();
    mount.apply(&render_scripts(&vm, "MacIntel"));

    vm.selected_script_ids = selection(&["b"]);
    let next = render_scripts(&vm, "MacIntel");
    mount.apply(&next);

    assert_eq!(mount.last_patches().len(), 1);
    assert!(!mount.chrome_changed());
    assert_eq!(mount.current(), Some(&next));
}

#[test]
fn hint_change_is_reported_as_chrome() {
    let vm = scripts_vm();
    let mut mount = RetainedMount::<ScriptList>::new();
    mount.apply(&render_scripts(&vm, "MacIntel"));
    mount.apply(&render_scripts(&vm, "Win32"));

    assert!(mount.last_patches().is_empty());
    assert!(mount.chrome_changed());
    assert_eq!(
        mount.current().map(|list| list.hint.as_str()),
        Some("⊞-click to multiselect")
    );
}

#[test]
fn shared_mount_applies_through_rc() {
    let vm = scripts_vm();
    let shared = Rc::new(RefCell::new(RetainedMount::<ScriptList>::new()));
    let mut handle = Rc::clone(&shared);
    handle.apply(&render_scripts(&vm, "MacIntel"));
    assert_eq!(shared.borrow().apply_count(), 1);
}
