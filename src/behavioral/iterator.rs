//! Iterator Pattern
//!
//! The library hands out a cursor over its books without exposing how they
//! are stored. The cursor implements `std::iter::Iterator`, so every adapter
//! (`map`, `filter`, `collect`, ...) comes for free.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
}

impl Book {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Library is fully occupied")]
pub struct LibraryFull {
    pub rejected: Book,
}

/// A collection that can produce an iterator over its books.
pub trait BookCollection {
    fn create_iterator(&self) -> BookIterator<'_>;
}

pub struct BookIterator<'a> {
    books: &'a [Book],
    index: usize,
}

impl<'a> Iterator for BookIterator<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.books.get(self.index)?;
        self.index += 1;
        Some(book)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.books.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BookIterator<'_> {}

pub struct Library {
    capacity: usize,
    books: Vec<Book>,
}

impl Library {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            books: Vec::with_capacity(capacity),
        }
    }

    /// Hands the book back inside the error when there is no room.
    pub fn add_book(&mut self, book: Book) -> Result<(), LibraryFull> {
        if self.books.len() >= self.capacity {
            return Err(LibraryFull { rejected: book });
        }
        self.books.push(book);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookCollection for Library {
    fn create_iterator(&self) -> BookIterator<'_> {
        BookIterator {
            books: &self.books,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = BookIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_iterator()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut library = Library::with_capacity(5);
    for name in ["Fountain Head", "Atlas Shrugged", "Naa Istam"] {
        if let Err(full) = library.add_book(Book::new(name)) {
            writeln!(out, "{}", full)?;
        }
    }

    for book in library.create_iterator() {
        writeln!(out, "{}", book.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_library_rejects_and_returns_book() {
        let mut library = Library::with_capacity(1);
        library.add_book(Book::new("First")).unwrap();

        let err = library.add_book(Book::new("Second")).unwrap_err();
        assert_eq!(err.to_string(), "Library is fully occupied");
        assert_eq!(err.rejected.name(), "Second");
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        let mut library = Library::with_capacity(0);
        assert!(library.add_book(Book::new("Anything")).is_err());
        assert_eq!(library.create_iterator().next(), None);
        assert!(library.is_empty());
    }

    #[test]
    fn test_iterator_preserves_order_and_size() {
        let mut library = Library::with_capacity(3);
        for name in ["a", "b", "c"] {
            library.add_book(Book::new(name)).unwrap();
        }

        let iter = library.create_iterator();
        assert_eq!(iter.len(), 3);

        let names: Vec<&str> = (&library).into_iter().map(Book::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_each_iterator_starts_over() {
        let mut library = Library::with_capacity(2);
        library.add_book(Book::new("x")).unwrap();

        let mut first = library.create_iterator();
        first.next();
        assert_eq!(first.next(), None);
        assert_eq!(library.create_iterator().count(), 1);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Fountain Head\nAtlas Shrugged\nNaa Istam\n"
        );
    }
}
