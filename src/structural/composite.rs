//! Composite Pattern
//!
//! Files and folders share one interface, so a folder can hold either and
//! the client treats the whole tree like a single component.

use std::io::{self, Write};
use std::rc::Rc;

pub trait FileSystemComponent {
    fn show_details(&self) -> Vec<String>;
}

pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemComponent for File {
    fn show_details(&self) -> Vec<String> {
        vec![format!("File: {}", self.name)]
    }
}

pub struct Folder {
    name: String,
    components: Vec<Rc<dyn FileSystemComponent>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: Rc<dyn FileSystemComponent>) {
        self.components.push(component);
    }

    /// Removes the first occurrence of `component`, by identity. Returns
    /// whether it was a child.
    pub fn remove_component(&mut self, component: &Rc<dyn FileSystemComponent>) -> bool {
        match self
            .components
            .iter()
            .position(|child| Rc::ptr_eq(child, component))
        {
            Some(index) => {
                self.components.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FileSystemComponent for Folder {
    fn show_details(&self) -> Vec<String> {
        let mut lines = vec![format!("Folder: {}", self.name)];
        for component in &self.components {
            lines.extend(component.show_details());
        }
        lines
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let file1: Rc<dyn FileSystemComponent> = Rc::new(File::new("Document.txt"));
    let file2: Rc<dyn FileSystemComponent> = Rc::new(File::new("Photo.jpg"));
    let file3: Rc<dyn FileSystemComponent> = Rc::new(File::new("Music.mp3"));

    let mut folder1 = Folder::new("MyFolder");
    folder1.add_component(file1);
    folder1.add_component(file2);

    let mut root = Folder::new("Root");
    root.add_component(Rc::new(folder1));
    root.add_component(file3);

    for line in root.show_details() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
