//! Liskov Substitution Principle
//!
//! Anything written against `Shape` should keep working when handed any
//! implementor. `Square` breaks that: setting the width then the height of
//! a "rectangle" no longer yields those two values.
//!
//! The animals show the fix: only model a capability (flying) on the types
//! that really have it, instead of on the shared trait.

use std::io::{self, Write};

// ============================================================================
// Bad: Square masquerading as a Rectangle
// ============================================================================

pub trait Shape {
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

#[derive(Debug, Default)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Shape for Rectangle {
    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Both sides always equal.
#[derive(Debug, Default)]
pub struct Square {
    side: u32,
}

impl Shape for Square {
    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }

    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }
}

/// Client code that assumes width and height are independent.
pub fn resize(shape: &mut dyn Shape, width: u32, height: u32) -> [String; 2] {
    shape.set_width(width);
    shape.set_height(height);
    [shape.width().to_string(), shape.height().to_string()]
}

// ============================================================================
// Good: only true "is-a" relationships share a trait
// ============================================================================

pub trait Animal {
    fn eat(&self) -> String;
}

pub struct Tiger;

impl Animal for Tiger {
    fn eat(&self) -> String {
        "Tiger is eating".to_string()
    }
}

pub struct Penguin;

impl Animal for Penguin {
    fn eat(&self) -> String {
        "Penguin is eating".to_string()
    }
}

impl Penguin {
    pub fn fly(&self) -> String {
        "Penguin is flying".to_string()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut rectangle: Box<dyn Shape> = Box::new(Rectangle::default());
    let mut square: Box<dyn Shape> = Box::new(Square::default());

    let lines = resize(rectangle.as_mut(), 10, 20)
        .into_iter()
        .chain(resize(square.as_mut(), 10, 20));
    for line in lines {
        writeln!(out, "{}", line)?;
    }

    let tiger = Tiger;
    writeln!(out, "{}", tiger.eat())?;
    let penguin = Penguin;
    writeln!(out, "{}", penguin.eat())?;
    writeln!(out, "{}", penguin.fly())?;
    Ok(())
}
