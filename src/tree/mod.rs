// This file is part of shamos-hoey.
//
// shamos-hoey is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public
// License as published by the Free Software Foundation,
// either version 3 of the License, or (at your option)
// any later version.
//
// shamos-hoey is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty
// of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General
// Public License along with shamos-hoey. If not, see
// <https://www.gnu.org/licenses/>.


//! A balanced ordered container keyed by the elements' own comparison.
//!
//! The tree is an AVL tree stored in an arena. Nodes refer to each other by
//! index, and a [`Handle`] is just the index of a node, so a handle stays
//! valid for as long as its element is in the tree no matter how the tree
//! is rotated around it.


use alloc::vec::Vec;
use core::{cmp, num::NonZeroUsize};

/// A three-way comparison supplied by the element type itself.
///
/// Unlike [`Ord`], this ordering does not have to be a total order over
/// every possible value of the type. It only has to be consistent among the
/// elements that are in the tree at the same time, which is what the sweep
/// line's segment order guarantees.
pub trait StatusOrd {
    /// Compare `self` against an element already in the tree.
    fn status_cmp(&self, other: &Self) -> cmp::Ordering;
}

/// A stable reference to an element in an [`OrderedTree`].
///
/// This is the index of the node in the arena, plus one, so that we can
/// take advantage of niching for `Option<Handle>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(NonZeroUsize);

impl Handle {
    fn new(index: usize) -> Self {
        Handle(NonZeroUsize::new(index + 1).expect("cannot have more than usize::MAX - 1 nodes"))
    }

    fn index(self) -> usize {
        self.0.get() - 1
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
    height: u32,
}

/// A self-balancing binary search tree.
///
/// Arena slots are never reused, so a handle to a removed element keeps
/// resolving to `None` instead of aliasing a newer element.
#[derive(Debug)]
pub struct OrderedTree<T> {
    slots: Vec<Option<Node<T>>>,
    root: Option<Handle>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            root: None,
            len: 0,
        }
    }
}

impl<T> OrderedTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` insertions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// The number of elements currently in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the element behind a handle, if it is still in the tree.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slot(handle).map(|node| &node.value)
    }

    /// Mutably get the element behind a handle.
    ///
    /// Callers must not change anything that affects the element's order.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index())
            .and_then(Option::as_mut)
            .map(|node| &mut node.value)
    }

    /// Tell whether or not the handle refers to an element in the tree.
    pub fn contains(&self, handle: Handle) -> bool {
        self.slot(handle).is_some()
    }

    /// The smallest element.
    pub fn min(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The largest element.
    pub fn max(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    /// The in-order predecessor of an element.
    pub fn predecessor(&self, handle: Handle) -> Option<Handle> {
        let node = self.slot(handle)?;
        if let Some(left) = node.left {
            return Some(self.rightmost(left));
        }

        // climb until we come up out of a right subtree
        let mut child = handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            if self.node(p).left != Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent;
        }
        None
    }

    /// The in-order successor of an element.
    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        let node = self.slot(handle)?;
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }

        let mut child = handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            if self.node(p).right != Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent;
        }
        None
    }

    /// Iterate over the handles of the tree in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.min(),
        }
    }

    /// Remove an element from the tree, returning it.
    ///
    /// Returns `None` if the handle was already removed. Every other handle
    /// remains valid.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let node = self.slot(handle)?;
        let (left, right, parent) = (node.left, node.right, node.parent);

        let rebalance_from = match (left, right) {
            (None, _) => {
                self.transplant(handle, right);
                parent
            }
            (_, None) => {
                self.transplant(handle, left);
                parent
            }
            (Some(left), Some(right)) => {
                // splice the successor out and put it where this node was
                let successor = self.leftmost(right);
                let from = if successor == right {
                    successor
                } else {
                    let successor_parent = self.node(successor).parent;
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                    successor_parent.expect("successor below a node must have a parent")
                };

                self.transplant(handle, Some(successor));
                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);
                Some(from)
            }
        };

        let removed = self.slots[handle.index()]
            .take()
            .expect("node vanished during removal");
        self.len -= 1;
        self.rebalance_upwards(rebalance_from);

        Some(removed.value)
    }

    fn slot(&self, handle: Handle) -> Option<&Node<T>> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    fn node(&self, handle: Handle) -> &Node<T> {
        self.slot(handle).expect("dangling node in tree")
    }

    fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        self.slots
            .get_mut(handle.index())
            .and_then(Option::as_mut)
            .expect("dangling node in tree")
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right {
            handle = right;
        }
        handle
    }

    fn height(&self, handle: Option<Handle>) -> u32 {
        handle.map_or(0, |h| self.node(h).height)
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.node(handle);
        let height = 1 + cmp::max(self.height(node.left), self.height(node.right));
        self.node_mut(handle).height = height;
    }

    /// Left height minus right height.
    fn balance(&self, handle: Handle) -> i64 {
        let node = self.node(handle);
        i64::from(self.height(node.left)) - i64::from(self.height(node.right))
    }

    /// Put `replacement` where the subtree rooted at `target` used to hang.
    fn transplant(&mut self, target: Handle, replacement: Option<Handle>) {
        let parent = self.node(target).parent;
        match parent {
            None => self.root = replacement,
            Some(p) => {
                let p = self.node_mut(p);
                if p.left == Some(target) {
                    p.left = replacement;
                } else {
                    p.right = replacement;
                }
            }
        }

        if let Some(r) = replacement {
            self.node_mut(r).parent = parent;
        }
    }

    /// Rotate the right child of `handle` above it. Returns the new subtree root.
    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let pivot = self
            .node(handle)
            .right
            .expect("left rotation needs a right child");
        let inner = self.node(pivot).left;

        self.node_mut(handle).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(handle);
        }

        self.transplant(handle, Some(pivot));
        self.node_mut(pivot).left = Some(handle);
        self.node_mut(handle).parent = Some(pivot);

        self.update_height(handle);
        self.update_height(pivot);
        pivot
    }

    /// Rotate the left child of `handle` above it. Returns the new subtree root.
    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let pivot = self
            .node(handle)
            .left
            .expect("right rotation needs a left child");
        let inner = self.node(pivot).right;

        self.node_mut(handle).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(handle);
        }

        self.transplant(handle, Some(pivot));
        self.node_mut(pivot).right = Some(handle);
        self.node_mut(handle).parent = Some(pivot);

        self.update_height(handle);
        self.update_height(pivot);
        pivot
    }

    /// Restore heights and the AVL balance from `start` up to the root.
    fn rebalance_upwards(&mut self, start: Option<Handle>) {
        let mut current = start;

        while let Some(handle) = current {
            self.update_height(handle);

            let subtree = match self.balance(handle) {
                b if b > 1 => {
                    let left = self
                        .node(handle)
                        .left
                        .expect("left heavy node has a left child");
                    if self.balance(left) < 0 {
                        self.rotate_left(left);
                    }
                    self.rotate_right(handle)
                }
                b if b < -1 => {
                    let right = self
                        .node(handle)
                        .right
                        .expect("right heavy node has a right child");
                    if self.balance(right) > 0 {
                        self.rotate_right(right);
                    }
                    self.rotate_left(handle)
                }
                _ => handle,
            };

            current = self.node(subtree).parent;
        }
    }
}

impl<T: StatusOrd> OrderedTree<T> {
    /// Insert an element, returning a handle to it.
    ///
    /// Elements that compare equal to an existing element are placed after it.
    pub fn insert(&mut self, value: T) -> Handle {
        // find the parent the new node hangs from
        let mut parent = None;
        let mut go_left = false;
        let mut cursor = self.root;

        while let Some(current) = cursor {
            let node = self.node(current);
            parent = Some(current);
            go_left = value.status_cmp(&node.value) == cmp::Ordering::Less;
            cursor = if go_left { node.left } else { node.right };
        }

        let handle = Handle::new(self.slots.len());
        self.slots.push(Some(Node {
            value,
            parent,
            left: None,
            right: None,
            height: 1,
        }));
        self.len += 1;

        match parent {
            None => self.root = Some(handle),
            Some(p) if go_left => self.node_mut(p).left = Some(handle),
            Some(p) => self.node_mut(p).right = Some(handle),
        }

        self.rebalance_upwards(parent);
        handle
    }

    /// Find an element that compares equal to `value`.
    pub fn find(&self, value: &T) -> Option<Handle> {
        let mut cursor = self.root;

        while let Some(current) = cursor {
            let node = self.node(current);
            cursor = match value.status_cmp(&node.value) {
                cmp::Ordering::Less => node.left,
                cmp::Ordering::Greater => node.right,
                cmp::Ordering::Equal => return Some(current),
            };
        }

        None
    }
}

/// An in-order iterator over the handles of an [`OrderedTree`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    tree: &'a OrderedTree<T>,
    next: Option<Handle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let current = self.next?;
        self.next = self.tree.successor(current);
        Some(current)
    }
}

impl<'a, T> core::iter::FusedIterator for Iter<'a, T> {}
