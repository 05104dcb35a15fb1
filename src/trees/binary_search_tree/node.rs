use std::fmt::{self, Debug};

/// An owned, possibly empty subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Storage for a single key/value pair.
///
/// Each [`Node`] exclusively owns its two subtrees; there are no parent pointers,
/// so the whole tree is reachable (and dropped) transitively from its root.
pub struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,

    /// A subtree containing strictly smaller/less-than keys when compared to "key".
    pub(super) left: Link<K, V>,

    /// A subtree containing strictly greater keys when compared to "key".
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(super) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// Counted level by level, so a degenerate subtree does not grow the call stack.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![self];

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }
}

/// Only the entry itself is printed; subtrees are walked by the tree's own `Debug`.
impl<K: Debug, V: Debug> Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
