//! Visitor Pattern
//!
//! New operations over files (compress, encrypt, ...) are added as new
//! visitors, without touching the file types. `accept` supplies the first
//! dispatch on the element, `visit_*` the second on the visitor.

use std::io::{self, Write};

pub trait FileElement {
    fn accept(&self, visitor: &dyn FileVisitor) -> String;
}

pub trait FileVisitor {
    fn visit_text_file(&self, file: &TextFile) -> String;
    fn visit_image_file(&self, file: &ImageFile) -> String;
}

pub struct TextFile {
    name: String,
}

impl TextFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FileElement for TextFile {
    fn accept(&self, visitor: &dyn FileVisitor) -> String {
        visitor.visit_text_file(self)
    }
}

pub struct ImageFile {
    name: String,
}

impl ImageFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FileElement for ImageFile {
    fn accept(&self, visitor: &dyn FileVisitor) -> String {
        visitor.visit_image_file(self)
    }
}

pub struct CompressionVisitor;

impl FileVisitor for CompressionVisitor {
    fn visit_text_file(&self, file: &TextFile) -> String {
        format!("Compressing text file: {}", file.name())
    }

    fn visit_image_file(&self, file: &ImageFile) -> String {
        format!("Compressing image file: {}", file.name())
    }
}

pub struct EncryptionVisitor;

impl FileVisitor for EncryptionVisitor {
    fn visit_text_file(&self, file: &TextFile) -> String {
        format!("Encrypting text file: {}", file.name())
    }

    fn visit_image_file(&self, file: &ImageFile) -> String {
        format!("Encrypting image file: {}", file.name())
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let text_file: Box<dyn FileElement> = Box::new(TextFile::new("document.txt"));
    let image_file: Box<dyn FileElement> = Box::new(ImageFile::new("photo.png"));

    let compression = CompressionVisitor;
    let encryption = EncryptionVisitor;

    writeln!(out, "{}", text_file.accept(&compression))?;
    writeln!(out, "{}", text_file.accept(&encryption))?;

    writeln!(out, "-----------------")?;

    writeln!(out, "{}", image_file.accept(&compression))?;
    writeln!(out, "{}", image_file.accept(&encryption))?;
    Ok(())
}
