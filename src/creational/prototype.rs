//! Prototype Pattern
//!
//! A registry keeps pre-built objects and hands out clones of them. The
//! registry only knows the `Prototype` trait; callers downcast the clone
//! back to the concrete type they registered.

use std::any::Any;
use std::collections::HashMap;
use std::io::{self, Write};

use tracing::debug;

pub trait Prototype: Any {
    fn clone_prototype(&self) -> Box<dyn Prototype>;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn show_book(&self) -> String {
        format!("Book: {} by {}", self.title, self.author)
    }
}

impl Prototype for Book {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn Prototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_prototype(&mut self, key: impl Into<String>, prototype: Box<dyn Prototype>) {
        self.prototypes.insert(key.into(), prototype);
    }

    /// Clones the prototype stored under `key`.
    pub fn get_prototype(&self, key: &str) -> Option<Box<dyn Prototype>> {
        match self.prototypes.get(key) {
            Some(prototype) => Some(prototype.clone_prototype()),
            None => {
                debug!(key, "no prototype registered");
                None
            }
        }
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut registry = PrototypeRegistry::new();
    registry.add_prototype(
        "DesignPatternBook",
        Box::new(Book::new("Design Patterns", "GoF")),
    );

    if let Some(cloned) = registry.get_prototype("DesignPatternBook") {
        if let Some(book) = cloned.as_any().downcast_ref::<Book>() {
            writeln!(out, "{}", book.show_book())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_book() -> PrototypeRegistry {
        let mut registry = PrototypeRegistry::new();
        registry.add_prototype("book", Box::new(Book::new("Refactoring", "Fowler")));
        registry
    }

    #[test]
    fn test_clone_matches_original() {
        let registry = registry_with_book();
        let cloned = registry.get_prototype("book").unwrap();
        let book = cloned.as_any().downcast_ref::<Book>().unwrap();
        assert_eq!(book, &Book::new("Refactoring", "Fowler"));
    }

    #[test]
    fn test_each_lookup_is_a_fresh_clone() {
        let registry = registry_with_book();
        let first = registry.get_prototype("book").unwrap();
        let second = registry.get_prototype("book").unwrap();

        let first = first.as_any().downcast_ref::<Book>().unwrap();
        let second = second.as_any().downcast_ref::<Book>().unwrap();
        assert!(!std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_key_is_none() {
        let registry = registry_with_book();
        assert!(registry.get_prototype("magazine").is_none());
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Book: Design Patterns by GoF\n"
        );
    }
}
