use super::*;

fn button(id: &str, selected: bool) -> ScriptButton {
    ScriptButton {
        id: id.into(),
        label: id.to_uppercase(),
        selected,
        disabled: false,
    }
}

fn assert_converges(prev: &[ScriptButton], next: &[ScriptButton]) -> Vec<Patch<ScriptButton>> {
    let patches = diff_keyed(prev, next);
    let mut applied = prev.to_vec();
    apply_patches(&mut applied, &patches);
    assert_eq!(applied, next);
    patches
}

#[test]
fn identical_lists_produce_no_patches() {
    let list = vec![button("a", true), button("b", false)];
    assert!(diff_keyed(&list, &list).is_empty());
}

#[test]
fn selection_change_is_an_in_place_update() {
    let prev = vec![button("a", true), button("b", false)];
    let next = vec![button("a", false), button("b", true)];

    let patches = assert_converges(&prev, &next);
    assert_eq!(
        patches,
        vec![
            Patch::Update {
                index: 0,
                node: button("a", false)
            },
            Patch::Update {
                index: 1,
                node: button("b", true)
            },
        ]
    );
}

#[test]
fn empty_to_populated_inserts_in_order() {
    let next = vec![button("a", false), button("b", false)];
    let patches = assert_converges(&[], &next);
    assert_eq!(patches.len(), 2);
    assert!(matches!(patches[0], Patch::Insert { index: 0, .. }));
    assert!(matches!(patches[1], Patch::Insert { index: 1, .. }));
}

#[test]
fn dropped_entries_are_removed() {
    let prev = vec![button("a", false), button("b", false), button("c", false)];
    let next = vec![button("a", false), button("c", false)];
    let patches = assert_converges(&prev, &next);
    assert_eq!(patches, vec![Patch::Remove { index: 1 }]);
}

#[test]
fn reordered_entries_converge() {
    let prev = vec![button("a", false), button("b", false), button("c", false)];
    let next = vec![button("c", false), button("a", true), button("d", false)];
    assert_converges(&prev, &next);
}

#[test]
fn repeated_keys_in_previous_list_are_trimmed() {
    let prev = vec![button("a", false), button("a", false)];
    let next = vec![button("a", false)];
    assert_converges(&prev, &next);
}
