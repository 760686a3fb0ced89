//! Polymorphism
//!
//! Runtime: one `Box<dyn Run>` slot, two types behind it, the vtable picks
//! the method. Compile time: Rust has no overloading, so `add` is generic
//! over an `Operands` trait implemented for pairs and triples, and the
//! compiler picks the implementation from the argument's type.

use std::io::{self, Write};

// ============================================================================
// Runtime polymorphism
// ============================================================================

pub trait Run {
    fn run(&self) -> String;
}

pub struct Parent;

impl Run for Parent {
    fn run(&self) -> String {
        "Parent".to_string()
    }
}

pub struct RunTimePolymorphism;

impl Run for RunTimePolymorphism {
    fn run(&self) -> String {
        "RunTimePolymorphism".to_string()
    }
}

// ============================================================================
// Compile-time polymorphism
// ============================================================================

/// Operand shapes `add` accepts. Sums wrap on overflow like the rest of the
/// crate's `i32` arithmetic.
pub trait Operands {
    fn sum(self) -> i32;
}

impl Operands for (i32, i32) {
    fn sum(self) -> i32 {
        self.0.wrapping_add(self.1)
    }
}

impl Operands for (i32, i32, i32) {
    fn sum(self) -> i32 {
        self.0.wrapping_add(self.1).wrapping_add(self.2)
    }
}

pub struct CompileTimePolymorphism;

impl CompileTimePolymorphism {
    pub fn add(&self, operands: impl Operands) -> String {
        format!("Sum : {}", operands.sum())
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut runner: Box<dyn Run> = Box::new(Parent);
    writeln!(out, "{}", runner.run())?;

    runner = Box::new(RunTimePolymorphism);
    writeln!(out, "{}", runner.run())?;

    let calculator = CompileTimePolymorphism;
    writeln!(out, "{}", calculator.add((1, 2)))?;
    writeln!(out, "{}", calculator.add((1, 2, 3)))?;
    Ok(())
}
