mod binary_search_tree;

pub use binary_search_tree::{
    digraph, BinarySearchTree, Digraph, Edge, IntoIter, Node, Side,
};
