use std::error::Error;

use keytree::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let mut tree: BinarySearchTree<u32, String> = [
        (5, "five"),
        (20, "twenty"),
        (10, "ten"),
        (2, "two"),
        (50, "fifty"),
        (4, "four"),
        (7, "seven"),
    ]
    .into_iter()
    .map(|(key, value)| (key, value.to_string()))
    .collect();

    println!("Initial tree (pipe into `dot -Tsvg` to render):");
    println!("{}", digraph(&tree));

    println!("\nLookup of 2: {}", tree.get(&2)?);

    tree.insert(2, "abcd".to_string());
    println!("Lookup of 2 after update: {}", tree.get(&2)?);

    tree.remove(&2)?;
    match tree.get(&2) {
        Ok(value) => println!("Lookup of 2 after delete: {value}"),
        Err(error) => println!("Lookup of 2 after delete: {error}"),
    }

    let empty = BinarySearchTree::<u32, String>::new();

    println!("\nAscending: {:?}", tree.in_order());
    println!("Ascending (empty tree): {:?}", empty.in_order());

    println!("\nDescending: {:?}", tree.reverse_order());
    println!("Descending (empty tree): {:?}", empty.reverse_order());

    tree.remove(&5)?;
    println!("\nAfter deleting the root:");
    println!("{}", digraph(&tree));

    Ok(())
}
