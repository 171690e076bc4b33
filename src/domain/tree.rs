//! Binary tree built from a positional representation.

use std::collections::VecDeque;

use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Link, Node};
use crate::domain::representation::{full_tree_size, is_left_child, parent_index};

/// Read-only binary tree.
///
/// Built once from a positional representation; an absent root is the empty tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<V> {
    root: Link<V>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> Tree<V> {
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn from_root(root: Node<V>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Builds a tree from its positional representation.
    ///
    /// Slot `i` becomes the left child of slot `(i-1)/2` when `i` is odd and the
    /// right child of slot `(i-2)/2` when `i` is even. Gaps create no node. A value
    /// whose parent slot is a gap cannot be attached and is dropped together with
    /// its subtree.
    #[instrument(level = "debug", skip_all)]
    pub fn build<I>(representation: I) -> Self
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let (tree, orphans) = Self::assemble(representation);
        for index in orphans {
            warn!(index, "dropping value without parent node");
        }
        tree
    }

    /// Like [`Tree::build`], but rejects values whose parent slot is a gap.
    #[instrument(level = "debug", skip_all)]
    pub fn try_build<I>(representation: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let (tree, orphans) = Self::assemble(representation);
        match orphans.first() {
            Some(&index) => Err(DomainError::OrphanNode { index }),
            None => Ok(tree),
        }
    }

    /// Links slots into nodes, returning the tree and the orphaned indices (ascending).
    fn assemble<I>(representation: I) -> (Self, Vec<usize>)
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let mut slots: Vec<Option<Node<V>>> = representation
            .into_iter()
            .map(|value| value.map(Node::new))
            .collect();
        debug!(slots = slots.len(), "assembling tree");

        // Back to front: a child's subtree is complete before it moves into its parent.
        let mut orphans = Vec::new();
        for index in (1..slots.len()).rev() {
            let Some(node) = slots[index].take() else {
                continue;
            };
            let Some(parent_idx) = parent_index(index) else {
                continue;
            };
            match slots[parent_idx].as_mut() {
                Some(parent) if is_left_child(index) => parent.left = Some(Box::new(node)),
                Some(parent) => parent.right = Some(Box::new(node)),
                None => orphans.push(index),
            }
        }
        orphans.reverse();

        let root = slots.into_iter().next().flatten().map(Box::new);
        (Self { root }, orphans)
    }

    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<V>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Height of the tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> isize {
        height_of(self.root())
    }

    /// Serializes the tree back into its positional representation.
    ///
    /// Walks breadth first, enqueueing both children of every slot (gaps included),
    /// and truncates after the last present value.
    #[instrument(level = "debug", skip_all)]
    pub fn to_representation(&self) -> Vec<Option<V>>
    where
        V: Clone,
    {
        let Ok(height) = u32::try_from(self.height()) else {
            return Vec::new();
        };
        let total_full = full_tree_size(height);

        let mut representation = Vec::new();
        let mut queue: VecDeque<Option<&Node<V>>> = VecDeque::from([self.root()]);
        // present nodes still waiting in the queue
        let mut pending = 1usize;
        let mut last_present = None;

        while representation.len() < total_full && pending > 0 {
            let Some(slot) = queue.pop_front() else {
                break;
            };
            let value = match slot {
                Some(node) => {
                    pending -= 1;
                    last_present = Some(representation.len());
                    for child in [node.left(), node.right()] {
                        pending += usize::from(child.is_some());
                        queue.push_back(child);
                    }
                    Some(node.value.clone())
                }
                None => {
                    queue.extend([None, None]);
                    None
                }
            };
            representation.push(value);
        }

        representation.truncate(last_present.map_or(0, |index| index + 1));
        debug!(slots = representation.len(), "serialized tree");
        representation
    }
}

/// Height of a subtree: -1 for an absent node, else one more than its tallest child.
pub fn height_of<V>(node: Option<&Node<V>>) -> isize {
    match node {
        None => -1,
        Some(node) => 1 + height_of(node.left()).max(height_of(node.right())),
    }
}

impl<V> From<Vec<Option<V>>> for Tree<V> {
    fn from(representation: Vec<Option<V>>) -> Self {
        Self::build(representation)
    }
}

impl<V> FromIterator<Option<V>> for Tree<V> {
    fn from_iter<I: IntoIterator<Item = Option<V>>>(iter: I) -> Self {
        Self::build(iter)
    }
}
