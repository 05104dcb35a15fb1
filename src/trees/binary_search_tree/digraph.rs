use std::fmt::{self, Display};

use super::{BinarySearchTree, Node};

/// Which child slot an [`Edge`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub side: Side,
}

/// A renderer-agnostic description of a tree's shape.
///
/// Nodes are labelled by their key, edges by the child slot they lead into. The
/// [`Display`] implementation writes Graphviz DOT, so the output can be piped
/// straight into `dot -Tsvg` or any other tool understanding the format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Exports the shape of `tree` without touching it.
///
/// Each node is emitted before its left edge and subtree, followed by its right
/// edge and subtree.
pub fn digraph<K: Display, V>(tree: &BinarySearchTree<K, V>) -> Digraph {
    let mut graph = Digraph::default();

    if let Some(root) = tree.root() {
        graph.visit(root);
    }

    graph
}

impl Digraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Each pending node carries the edge leading into it, emitted right before the node.
    fn visit<K: Display, V>(&mut self, root: &Node<K, V>) {
        let mut pending: Vec<(&Node<K, V>, Option<(String, Side)>)> = vec![(root, None)];

        while let Some((node, incoming)) = pending.pop() {
            let label = node.key().to_string();

            if let Some((from, side)) = incoming {
                self.edges.push(Edge {
                    from,
                    to: label.clone(),
                    side,
                });
            }

            for (side, child) in [(Side::Right, node.right()), (Side::Left, node.left())] {
                if let Some(child) = child {
                    pending.push((child, Some((label.clone(), side))));
                }
            }

            self.nodes.push(label);
        }
    }
}

impl Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;

        for node in &self.nodes {
            writeln!(f, "\t{}", quote(node))?;
        }

        for edge in &self.edges {
            writeln!(
                f,
                "\t{} -> {} [label={}]",
                quote(&edge.from),
                quote(&edge.to),
                quote(edge.side.label())
            )?;
        }

        write!(f, "}}")
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
