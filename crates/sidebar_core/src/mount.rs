use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    diff::{apply_patches, diff_keyed, Keyed, Patch},
    tree::{ProfileButton, ProfileList, ScriptButton, ScriptList},
};

/// Binding-layer target a rendered list is applied to.
pub trait MountPoint<N> {
    fn apply(&mut self, node: &N);
}

impl<N, M> MountPoint<N> for Rc<RefCell<M>>
where
    M: MountPoint<N>,
{
    fn apply(&mut self, node: &N) {
        self.borrow_mut().apply(node);
    }
}

impl<N> MountPoint<N> for () {
    fn apply(&mut self, _node: &N) {}
}

/// A rendered list: keyed buttons plus the static parts around them.
pub trait ListNode: Clone + PartialEq + fmt::Debug {
    type Item: Keyed + PartialEq + Clone + fmt::Debug;

    fn items(&self) -> &[Self::Item];

    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    /// Compares everything except the buttons.
    fn chrome_eq(&self, other: &Self) -> bool;

    fn copy_chrome_from(&mut self, other: &Self);
}

impl ListNode for ProfileList {
    type Item = ProfileButton;

    fn items(&self) -> &[ProfileButton] {
        &self.buttons
    }

    fn items_mut(&mut self) -> &mut Vec<ProfileButton> {
        &mut self.buttons
    }

    fn chrome_eq(&self, other: &Self) -> bool {
        self.title == other.title && self.new_profile == other.new_profile
    }

    fn copy_chrome_from(&mut self, other: &Self) {
        self.title = other.title;
        self.new_profile = other.new_profile.clone();
    }
}

impl ListNode for ScriptList {
    type Item = ScriptButton;

    fn items(&self) -> &[ScriptButton] {
        &self.buttons
    }

    fn items_mut(&mut self) -> &mut Vec<ScriptButton> {
        &mut self.buttons
    }

    fn chrome_eq(&self, other: &Self) -> bool {
        self.title == other.title && self.hint == other.hint
    }

    fn copy_chrome_from(&mut self, other: &Self) {
        self.title = other.title;
        self.hint = other.hint.clone();
    }
}

/// Keeps the last applied list and patches it in place on every apply.
#[derive(Debug)]
pub struct RetainedMount<N: ListNode> {
    current: Option<N>,
    last_patches: Vec<Patch<N::Item>>,
    chrome_changed: bool,
    apply_count: usize,
}

impl<N: ListNode> Default for RetainedMount<N> {
    fn default() -> Self {
        Self {
            current: None,
            last_patches: Vec::new(),
            chrome_changed: false,
            apply_count: 0,
        }
    }
}

impl<N: ListNode> RetainedMount<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&N> {
        self.current.as_ref()
    }

    /// Patches produced by the most recent apply.
    pub fn last_patches(&self) -> &[Patch<N::Item>] {
        &self.last_patches
    }

    pub fn chrome_changed(&self) -> bool {
        self.chrome_changed
    }

    pub fn apply_count(&self) -> usize {
        self.apply_count
    }

    /// True when the most recent apply changed nothing.
    pub fn is_settled(&self) -> bool {
        self.apply_count > 0 && self.last_patches.is_empty() && !self.chrome_changed
    }
}

impl<N: ListNode> MountPoint<N> for RetainedMount<N> {
    fn apply(&mut self, node: &N) {
        self.apply_count += 1;
        match &mut self.current {
            None => {
                self.last_patches = diff_keyed(&[], node.items());
                self.chrome_changed = true;
                self.current = Some(node.clone());
            }
            Some(current) => {
                let patches = diff_keyed(current.items(), node.items());
                apply_patches(current.items_mut(), &patches);
                self.chrome_changed = !current.chrome_eq(node);
                if self.chrome_changed {
                    current.copy_chrome_from(node);
                }
                self.last_patches = patches;
            }
        }

        debug_assert!(self.current.as_ref() == Some(node));
        tracing::trace!(
            patches = self.last_patches.len(),
            chrome_changed = self.chrome_changed,
            "applied list to retained mount"
        );
    }
}

#[cfg(test)]
#[path = "tests/mount_tests.rs"]
mod tests;
