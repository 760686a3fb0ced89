//! Registry of every runnable example, in presentation order.

use std::fmt;
use std::io::{self, Write};

use tracing::info;

use crate::error::{Error, Result};
use crate::{behavioral, creational, oop, solid, structural};
use Category::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
    Oop,
    Solid,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
            Category::Oop => "oop",
            Category::Solid => "solid",
        };
        f.write_str(name)
    }
}

/// One runnable example.
pub struct Example {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    run: fn(&mut dyn Write) -> io::Result<()>,
}

impl Example {
    const fn new(
        name: &'static str,
        category: Category,
        summary: &'static str,
        run: fn(&mut dyn Write) -> io::Result<()>,
    ) -> Self {
        Self {
            name,
            category,
            summary,
            run,
        }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        info!(example = self.name, category = %self.category, "running example");
        (self.run)(out)?;
        Ok(())
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

pub static EXAMPLES: &[Example] = &[
    // Creational
    Example::new("factory", Creational, "one factory method hides which vehicle gets built", creational::factory::run),
    Example::new("abstract_factory", Creational, "families of related products from a factory of factories", creational::abstract_factory::run),
    Example::new("builder", Creational, "step-by-step construction with optional parts", creational::builder::run),
    Example::new("prototype", Creational, "new objects by cloning registered prototypes", creational::prototype::run),
    Example::new("singleton", Creational, "six ways to guarantee a single instance", creational::singleton::run),
    // Structural
    Example::new("adapter", Structural, "a Type-C phone charged through a Micro-USB charger", structural::adapter::run),
    Example::new("bridge", Structural, "remotes and devices varying independently", structural::bridge::run),
    Example::new("composite", Structural, "files and folders treated uniformly", structural::composite::run),
    Example::new("decorator", Structural, "coffee extras wrapped around a base drink", structural::decorator::run),
    Example::new("facade", Structural, "one call drives a whole home theater", structural::facade::run),
    Example::new("flyweight", Structural, "trees sharing their intrinsic type data", structural::flyweight::run),
    // Behavioral
    Example::new("chain_of_responsibility", Behavioral, "leave requests escalated up a handler chain", behavioral::chain_of_responsibility::run),
    Example::new("command", Behavioral, "remote buttons bound to TV commands", behavioral::command::run),
    Example::new("interpreter", Behavioral, "an arithmetic expression tree evaluating itself", behavioral::interpreter::run),
    Example::new("iterator", Behavioral, "walking a fixed-capacity library in order", behavioral::iterator::run),
    Example::new("mediator", Behavioral, "chat users talking through a room", behavioral::mediator::run),
    Example::new("memento", Behavioral, "undo for a text editor", behavioral::memento::run),
    Example::new("observer", Behavioral, "a news agency pushing to subscribers", behavioral::observer::run),
    Example::new("state", Behavioral, "a document moving through its workflow", behavioral::state::run),
    Example::new("strategy", Behavioral, "interchangeable payment methods at checkout", behavioral::strategy::run),
    Example::new("template_method", Behavioral, "a fixed processing skeleton with pluggable steps", behavioral::template_method::run),
    Example::new("visitor", Behavioral, "operations added to files by double dispatch", behavioral::visitor::run),
    // OOP
    Example::new("abstraction", Oop, "required and default trait methods", oop::abstraction::run),
    Example::new("polymorphism", Oop, "dynamic dispatch and static dispatch", oop::polymorphism::run),
    // SOLID
    Example::new("single_responsibility", Solid, "one reason to change per type", solid::single_responsibility::run),
    Example::new("open_closed", Solid, "extend with new types instead of edits", solid::open_closed::run),
    Example::new("liskov_substitution", Solid, "subtypes must honor their parent's contract", solid::liskov_substitution::run),
    Example::new("interface_segregation", Solid, "small traits over fat ones", solid::interface_segregation::run),
    Example::new("dependency_inversion", Solid, "depend on abstractions, not drivers", solid::dependency_inversion::run),
];

pub fn find(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.name == name)
}

/// Like [`find`], but an unknown name is an error.
pub fn lookup(name: &str) -> Result<&'static Example> {
    find(name).ok_or_else(|| Error::UnknownExample(name.to_string()))
}
