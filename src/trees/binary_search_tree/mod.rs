mod digraph;
mod node;

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{self, Debug},
};

use proptest::prelude::*;

use crate::{prelude::*, testing::entries};

use node::Link;
pub use {
    digraph::{digraph, Digraph, Edge, Side},
    node::Node,
};

pub type IntoIter<K, V> = std::vec::IntoIter<(K, V)>;

/// An ordered key/value map stored as an unbalanced binary search tree.
///
/// Every key in the left subtree of a [`Node`] is strictly smaller than the node's key, and
/// every key in its right subtree is strictly greater. Keys are unique: writing an existing key
/// replaces its value in place.
///
/// No rebalancing ever happens, so the shape is entirely a function of insertion order. Inserting
/// keys in sorted order degenerates the tree into a linked list, with `height() == len()`. Every
/// operation walks the tree with a loop or an explicit stack, so a degenerate tree costs time
/// proportional to its height but never call stack.
///
/// The tree is just a handle over an optional root. Operations rewrite the slot holding a key,
/// so replacing the root (writing into an empty tree, deleting the root) is not a special case.
pub struct BinarySearchTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> BinarySearchTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        Self::dismantle(self.root.take());
        self.len = 0;
    }

    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }

        Some((&current.key, &current.value))
    }

    /// Returns the entry with the greatest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }

        Some((&current.key, &current.value))
    }

    /// All entries in ascending key order: left subtree, then the node, then the right subtree.
    pub fn in_order(&self) -> Vec<(&K, &V)> {
        self.traverse(Node::left, Node::right)
    }

    /// All entries in descending key order: right subtree, then the node, then the left subtree.
    pub fn reverse_order(&self) -> Vec<(&K, &V)> {
        self.traverse(Node::right, Node::left)
    }

    /// Visits the `near` subtree, then the node, then the `far` subtree of every node.
    fn traverse<'a>(
        &'a self,
        near: fn(&Node<K, V>) -> Option<&Node<K, V>>,
        far: fn(&Node<K, V>) -> Option<&Node<K, V>>,
    ) -> Vec<(&'a K, &'a V)> {
        let mut entries = Vec::with_capacity(self.len);
        let mut pending = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                pending.push(node);
                current = near(node);
            }

            let Some(node) = pending.pop() else {
                break;
            };

            entries.push((&node.key, &node.value));
            current = far(node);
        }

        entries
    }

    /// Drops a subtree one node at a time.
    fn dismantle(link: Link<K, V>) {
        let mut pending = Vec::from_iter(link);
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K: Ord, V> BinarySearchTree<K, V> {
    /// Looks up the value stored under `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] as soon as the search has to descend into a missing
    /// subtree, which includes searching an empty tree.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = &self.root;
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Ok(&node.value),
            }
        }

        Err(Error::KeyNotFound)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::locate(&mut self.root, key)
            .as_mut()
            .map(|node| &mut node.value)
            .ok_or(Error::KeyNotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Writes `value` under `key`, returning the value it replaced, if any.
    ///
    /// The first write of a key attaches a new leaf, repeated writes only swap the value; the
    /// shape of the tree never changes for a key that is already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let slot = Self::locate(&mut self.root, &key);

        if let Some(node) = slot.as_mut() {
            trace!(len = self.len, "replacing value of existing key");
            return Some(std::mem::replace(&mut node.value, value));
        }

        *slot = Some(Box::new(Node::new(key, value)));
        self.len += 1;
        trace!(len = self.len, "attached new node");

        None
    }

    /// Deletes `key` from the tree, returning its value.
    ///
    /// A node with a single child is replaced by that child. A node with two children is
    /// replaced by its in-order successor (the leftmost node of its right subtree), which adopts
    /// both of the deleted node's subtrees.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = Self::locate(&mut self.root, key);
        let node = slot.take().ok_or(Error::KeyNotFound)?;

        let Node {
            value, left, right, ..
        } = *node;
        *slot = Self::splice(left, right);
        self.len -= 1;

        Ok(value)
    }

    /// Walks down from `link` to the slot holding `key`, or to the empty slot where it would be
    /// attached.
    fn locate<'a, Q>(mut link: &'a mut Link<K, V>, key: &Q) -> &'a mut Link<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            let ordering = match link.as_ref() {
                Some(node) => key.cmp(node.key.borrow()),
                None => return link,
            };

            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Joins the two subtrees of a deleted node into a single one.
    fn splice(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
        match (left, right) {
            (left, None) => left,
            (None, right) => right,
            (Some(left), Some(mut right)) => {
                let mut successor = match Self::detach_leftmost(&mut right.left) {
                    Some(mut successor) => {
                        trace!("promoting leftmost node of the right subtree");
                        successor.right = Some(right);
                        successor
                    }
                    None => {
                        trace!("promoting right child");
                        right
                    }
                };
                successor.left = Some(left);

                Some(successor)
            }
        }
    }

    /// Unlinks the leftmost node under `link`, handing its right subtree to its parent's slot.
    ///
    /// The leftmost node never has a left child, so nothing else needs to move.
    fn detach_leftmost(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        let mut parent = link;
        while parent.as_ref().is_some_and(|node| node.left.is_some()) {
            parent = &mut parent.as_mut()?.left;
        }

        let mut leftmost = parent.take()?;
        *parent = leftmost.right.take();

        Some(leftmost)
    }
}

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        Self::dismantle(self.root.take());
    }
}

impl<K, V> Default for BinarySearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for BinarySearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.in_order()).finish()
    }
}

/// A step of the post-order walk used by [`Clone`].
enum CloneStep<'a, K, V> {
    Visit(Option<&'a Node<K, V>>),
    Assemble(&'a Node<K, V>),
}

/// Copies the tree node by node, keeping its exact shape.
impl<K: Clone, V: Clone> Clone for BinarySearchTree<K, V> {
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Visit(self.root())];
        let mut built: Vec<Link<K, V>> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Visit(None) => built.push(None),
                CloneStep::Visit(Some(node)) => {
                    steps.push(CloneStep::Assemble(node));
                    steps.push(CloneStep::Visit(node.right()));
                    steps.push(CloneStep::Visit(node.left()));
                }
                CloneStep::Assemble(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();

                    built.push(Some(Box::new(Node {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

/// Two trees are equal when they hold the same entries, whatever their shape.
impl<K: PartialEq, V: PartialEq> PartialEq for BinarySearchTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order() == other.in_order()
    }
}

impl<K: Eq, V: Eq> Eq for BinarySearchTree<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinarySearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for BinarySearchTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.len);
        let mut pending = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                pending.push(node);
            }

            let Some(node) = pending.pop() else {
                break;
            };

            let Node {
                key, value, right, ..
            } = *node;
            entries.push((key, value));
            current = right;
        }

        entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a BinarySearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::vec::IntoIter<(&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order().into_iter()
    }
}

impl<K, V> Arbitrary for BinarySearchTree<K, V>
where
    K: Arbitrary + Ord + 'static,
    V: Arbitrary + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        entries::<K, V>(0..32)
            .prop_map(|entries| entries.into_iter().collect())
            .boxed()
    }
}

impl<K, V> OrderedMap for BinarySearchTree<K, V>
where
    K: Arbitrary + Ord + Clone + 'static,
    V: Arbitrary + Clone + PartialEq + 'static,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Result<&V> {
        self.get(key)
    }

    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn delete(&mut self, key: &K) -> Result<V> {
        self.remove(key)
    }

    fn in_order(&self) -> Vec<(&K, &V)> {
        BinarySearchTree::in_order(self)
    }

    fn reverse_order(&self) -> Vec<(&K, &V)> {
        BinarySearchTree::reverse_order(self)
    }
}
