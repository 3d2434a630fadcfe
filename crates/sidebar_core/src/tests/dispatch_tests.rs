use super::*;
use crate::{
    render::render,
    test_support::{selection, FixtureViewModel},
};

fn vm() -> FixtureViewModel {
    let mut vm =
        FixtureViewModel::with_lists(&[("p1", "A"), ("p2", "B")], &[("s1", "one"), ("s2", "two")]);
    vm.selected_profile_id = Some("p1".into());
    vm
}

#[test]
fn enabled_script_click_is_applied() {
    let mut vm = vm();
    let tree = render(&vm, "MacIntel");
    let mut event = ClickEvent::plain();

    let outcome = dispatch_action(
        &tree,
        &SidebarAction::SelectScript("s2".into()),
        &mut event,
        &mut vm,
    );

    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(vm.selected_script_ids, selection(&["s2"]));
    assert!(event.default_prevented());
}

#[test]
fn clicks_on_buttons_rendered_disabled_are_ignored() {
    let mut vm = vm();
    vm.form_showing = true;
    let tree = render(&vm, "MacIntel");

    // The form closing after the render does not revive the stale click.
    vm.form_showing = false;

    for action in [
        SidebarAction::SelectProfile("p2".into()),
        SidebarAction::SelectScript("s1".into()),
    ] {
        let mut event = ClickEvent::with_meta();
        let outcome = dispatch_action(&tree, &action, &mut event, &mut vm);
        assert_eq!(outcome, DispatchOutcome::IgnoredDisabled);
        assert!(!event.default_prevented());
    }

    assert_eq!(vm.selected_profile_id, Some(ProfileId::from("p1")));
    assert!(vm.selected_script_ids.is_empty());
}

#[test]
fn unknown_targets_are_ignored() {
    let mut vm = vm();
    let tree = render(&vm, "MacIntel");

    let outcome = dispatch_action(
        &tree,
        &SidebarAction::SelectScript("missing".into()),
        &mut ClickEvent::plain(),
        &mut vm,
    );
    assert_eq!(outcome, DispatchOutcome::UnknownTarget);

    // Only the selected profile renders an edit affordance.
    let outcome = dispatch_action(
        &tree,
        &SidebarAction::EditProfile("p2".into()),
        &mut ClickEvent::plain(),
        &mut vm,
    );
    assert_eq!(outcome, DispatchOutcome::UnknownTarget);
    assert!(vm.edited_profiles.is_empty());
}

#[test]
fn edit_affordance_invokes_edit_action_with_profile_id() {
    let mut vm = vm();
    let tree = render(&vm, "MacIntel");
    let mut event = ClickEvent::plain();

    let outcome = dispatch_action(
        &tree,
        &SidebarAction::EditProfile("p1".into()),
        &mut event,
        &mut vm,
    );

    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(vm.edited_profiles, vec![ProfileId::from("p1")]);
    assert!(event.default_prevented());
}

#[test]
fn new_profile_stays_clickable_while_form_is_open() {
    let mut vm = vm();
    vm.form_showing = true;
    let tree = render(&vm, "MacIntel");

    let outcome = dispatch_action(
        &tree,
        &SidebarAction::NewProfile,
        &mut ClickEvent::plain(),
        &mut vm,
    );

    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(vm.new_profile_calls, 1);
}

#[test]
fn profile_click_selects_and_moves_edit_affordance_on_next_render() {
    let mut vm = vm();
    let tree = render(&vm, "MacIntel");

    dispatch_action(
        &tree,
        &SidebarAction::SelectProfile("p2".into()),
        &mut ClickEvent::plain(),
        &mut vm,
    );

    let next = render(&vm, "MacIntel");
    assert!(next.profiles.buttons[0].edit.is_none());
    assert!(next.profiles.buttons[1].edit.is_some());
}

#[test]
fn queued_click_carries_its_modifiers() {
    let mut vm = vm();
    vm.selected_script_ids = selection(&["s1"]);
    let tree = render(&vm, "MacIntel");

    let click = crate::SidebarClick::new(
        SidebarAction::SelectScript("s2".into()),
        crate::Modifiers::META,
    );
    let mut event = click.event();
    dispatch_action(&tree, &click.action, &mut event, &mut vm);

    assert_eq!(vm.selected_script_ids, selection(&["s1", "s2"]));
}
