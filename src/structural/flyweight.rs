//! Flyweight Pattern
//!
//! Thousands of trees, a handful of tree types. The heavy, shared part
//! (name, color, texture) lives once in the factory cache behind an `Rc`;
//! each tree only stores its own coordinates.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::{debug, trace};

/// Intrinsic state, shared between trees.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn draw(&self, x: i32, y: i32) -> String {
        format!(
            "Drawing tree of type: {}, {}, {} at ({}, {})",
            self.name, self.color, self.texture, x, y
        )
    }
}

#[derive(Default)]
pub struct TreeFactory {
    tree_types: HashMap<String, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared type for this combination, creating it on first use.
    ///
    /// A creation is announced on `out`; cache hits are silent.
    pub fn get_tree_type(
        &mut self,
        name: &str,
        color: &str,
        texture: &str,
        out: &mut dyn Write,
    ) -> io::Result<Rc<TreeType>> {
        let key = format!("{}_{}_{}", name, color, texture);
        match self.tree_types.entry(key) {
            Entry::Occupied(entry) => {
                trace!(key = entry.key().as_str(), "tree type cache hit");
                Ok(Rc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                debug!(key = entry.key().as_str(), "tree type cache miss");
                writeln!(out, "Creating new TreeType: {}", entry.key())?;
                let tree_type = entry.insert(Rc::new(TreeType {
                    name: name.to_string(),
                    color: color.to_string(),
                    texture: texture.to_string(),
                }));
                Ok(Rc::clone(tree_type))
            }
        }
    }

    pub fn type_count(&self) -> usize {
        self.tree_types.len()
    }
}

/// Extrinsic state: where this particular tree stands.
pub struct Tree {
    x: i32,
    y: i32,
    tree_type: Rc<TreeType>,
}

impl Tree {
    pub fn new(x: i32, y: i32, tree_type: Rc<TreeType>) -> Self {
        Self { x, y, tree_type }
    }

    pub fn draw(&self) -> String {
        self.tree_type.draw(self.x, self.y)
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut factory = TreeFactory::new();
    let plantings = [
        (10, 20, "Oak", "Green", "Rough"),
        (15, 25, "Oak", "Green", "Rough"),
        (30, 50, "Pine", "Dark Green", "Smooth"),
        (50, 80, "Oak", "Green", "Rough"),
        (70, 90, "Pine", "Dark Green", "Smooth"),
    ];

    let mut forest = Vec::with_capacity(plantings.len());
    for (x, y, name, color, texture) in plantings {
        let tree_type = factory.get_tree_type(name, color, texture, out)?;
        forest.push(Tree::new(x, y, tree_type));
    }

    for tree in &forest {
        writeln!(out, "{}", tree.draw())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_shares_instance() {
        let mut factory = TreeFactory::new();
        let mut sink = Vec::new();

        let a = factory.get_tree_type("Oak", "Green", "Rough", &mut sink).unwrap();
        let b = factory.get_tree_type("Oak", "Green", "Rough", &mut sink).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.type_count(), 1);
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "Creating new TreeType: Oak_Green_Rough\n"
        );
    }

    #[test]
    fn test_different_texture_is_a_new_type() {
        let mut factory = TreeFactory::new();
        let mut sink = Vec::new();

        let rough = factory.get_tree_type("Oak", "Green", "Rough", &mut sink).unwrap();
        let smooth = factory.get_tree_type("Oak", "Green", "Smooth", &mut sink).unwrap();
        assert!(!Rc::ptr_eq(&rough, &smooth));
        assert_eq!(factory.type_count(), 2);
    }

    #[test]
    fn test_trees_hold_only_a_reference() {
        let mut factory = TreeFactory::new();
        let mut sink = Vec::new();
        let oak = factory.get_tree_type("Oak", "Green", "Rough", &mut sink).unwrap();

        let forest: Vec<Tree> = (0..100).map(|i| Tree::new(i, i, Rc::clone(&oak))).collect();
        // factory cache + local handle + one per tree
        assert_eq!(Rc::strong_count(&oak), 102);
        assert_eq!(forest[7].draw(), "Drawing tree of type: Oak, Green, Rough at (7, 7)");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Creating new TreeType: Oak_Green_Rough\n\
             Creating new TreeType: Pine_Dark Green_Smooth\n\
             Drawing tree of type: Oak, Green, Rough at (10, 20)\n\
             Drawing tree of type: Oak, Green, Rough at (15, 25)\n\
             Drawing tree of type: Pine, Dark Green, Smooth at (30, 50)\n\
             Drawing tree of type: Oak, Green, Rough at (50, 80)\n\
             Drawing tree of type: Pine, Dark Green, Smooth at (70, 90)\n"
        );
    }
}
