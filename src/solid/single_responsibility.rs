//! Single Responsibility Principle
//!
//! A type should have only one reason to change.

use std::io::{self, Write};

// Bad: a person that also knows how to save files
#[derive(Debug, Default)]
pub struct Person {
    file_name: String,
}

impl Person {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn save_file(&self) -> String {
        format!("{} file is saved", self.file_name)
    }
}

// Good: the user only holds user data
#[derive(Debug, Default)]
pub struct User {
    name: String,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn get_name(&self) -> String {
        format!("My name is {}", self.name)
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut user = User::new();
    user.set_name("Ganesh");
    writeln!(out, "{}", user.get_name())
}
