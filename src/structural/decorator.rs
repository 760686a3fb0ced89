//! Decorator Pattern
//!
//! Each add-on wraps another `Coffee` and adjusts the description and the
//! price on the way out. Wrappers stack in any order and any number.

use std::io::{self, Write};

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        5.0
    }
}

pub struct MilkDecorator {
    coffee: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{}, Milk", self.coffee.description())
    }

    fn cost(&self) -> f64 {
        self.coffee.cost() + 2.0
    }
}

pub struct SugarDecorator {
    coffee: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{}, Sugar", self.coffee.description())
    }

    fn cost(&self) -> f64 {
        self.coffee.cost() + 1.0
    }
}

pub fn receipt(coffee: &dyn Coffee) -> String {
    format!("{} => ${:.1}", coffee.description(), coffee.cost())
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    writeln!(out, "{}", receipt(coffee.as_ref()))?;

    coffee = Box::new(MilkDecorator::new(coffee));
    writeln!(out, "{}", receipt(coffee.as_ref()))?;

    coffee = Box::new(SugarDecorator::new(coffee));
    writeln!(out, "{}", receipt(coffee.as_ref()))?;
    Ok(())
}
