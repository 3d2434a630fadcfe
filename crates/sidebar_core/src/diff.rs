//! Keyed list diffing used by retained mount points.

use std::fmt;

use shared::domain::{ProfileId, ScriptId};

use crate::tree::{ProfileButton, ScriptButton};

pub trait Keyed {
    type Key: PartialEq + fmt::Debug;

    fn key(&self) -> &Self::Key;
}

impl Keyed for ProfileButton {
    type Key = ProfileId;

    fn key(&self) -> &ProfileId {
        &self.id
    }
}

impl Keyed for ScriptButton {
    type Key = ScriptId;

    fn key(&self) -> &ScriptId {
        &self.id
    }
}

/// One step in turning a previously applied list into the next one. Indices
/// refer to the list as it stands after all earlier patches were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<N> {
    Insert { index: usize, node: N },
    Update { index: usize, node: N },
    Remove { index: usize },
}

/// Patches that turn `prev` into `next`, matching nodes by key. Identical
/// lists produce no patches.
pub fn diff_keyed<N>(prev: &[N], next: &[N]) -> Vec<Patch<N>>
where
    N: Keyed + PartialEq + Clone,
{
    let mut patches = Vec::new();
    let mut working = prev.to_vec();

    let mut index = working.len();
    while index > 0 {
        index -= 1;
        let key = working[index].key();
        if !next.iter().any(|node| node.key() == key) {
            working.remove(index);
            patches.push(Patch::Remove { index });
        }
    }

    for (index, node) in next.iter().enumerate() {
        match working.get(index) {
            Some(current) if current.key() == node.key() => {
                if current != node {
                    working[index] = node.clone();
                    patches.push(Patch::Update {
                        index,
                        node: node.clone(),
                    });
                }
            }
            _ => {
                // Moved nodes are removed from their old slot and reinserted.
                if let Some(offset) = working[index..]
                    .iter()
                    .position(|current| current.key() == node.key())
                {
                    working.remove(index + offset);
                    patches.push(Patch::Remove {
                        index: index + offset,
                    });
                }
                working.insert(index, node.clone());
                patches.push(Patch::Insert {
                    index,
                    node: node.clone(),
                });
            }
        }
    }

    // Only reachable when `prev` repeated a key.
    while working.len() > next.len() {
        let index = working.len() - 1;
        working.pop();
        patches.push(Patch::Remove { index });
    }

    patches
}

pub fn apply_patches<N: Clone>(list: &mut Vec<N>, patches: &[Patch<N>]) {
    for patch in patches {
        match patch {
            Patch::Insert { index, node } => {
                let index = (*index).min(list.len());
                list.insert(index, node.clone());
            }
            Patch::Update { index, node } => {
                if let Some(slot) = list.get_mut(*index) {
                    *slot = node.clone();
                }
            }
            Patch::Remove { index } => {
                if *index < list.len() {
                    list.remove(*index);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/diff_tests.rs"]
mod tests;
