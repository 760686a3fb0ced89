//! Builder Pattern
//!
//! `Car` has private fields, so outside this module the builder is the only
//! way to make one. Required parts go through `new`, optional parts through
//! chained setters.

use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    engine: String,
    wheels: u32,
    sunroof: bool,
}

impl Car {
    pub fn show_car(&self) -> String {
        format!(
            "Car with Engine: {}, Wheels: {}, Sunroof: {}",
            self.engine, self.wheels, self.sunroof
        )
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn wheels(&self) -> u32 {
        self.wheels
    }

    pub fn has_sunroof(&self) -> bool {
        self.sunroof
    }
}

#[must_use]
pub struct CarBuilder {
    engine: String,
    wheels: u32,
    sunroof: bool,
}

impl CarBuilder {
    pub fn new(engine: impl Into<String>, wheels: u32) -> Self {
        Self {
            engine: engine.into(),
            wheels,
            sunroof: false,
        }
    }

    pub fn sunroof(mut self, sunroof: bool) -> Self {
        self.sunroof = sunroof;
        self
    }

    pub fn build(self) -> Car {
        Car {
            engine: self.engine,
            wheels: self.wheels,
            sunroof: self.sunroof,
        }
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let car1 = CarBuilder::new("V8", 4).sunroof(true).build();
    let car2 = CarBuilder::new("Electric", 4).sunroof(false).build();

    writeln!(out, "{}", car1.show_car())?;
    writeln!(out, "{}", car2.show_car())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let car = CarBuilder::new("V6", 4).build();
        assert_eq!(car.engine(), "V6");
        assert_eq!(car.wheels(), 4);
        assert!(!car.has_sunroof());
    }

    #[test]
    fn test_builder_last_setter_wins() {
        let car = CarBuilder::new("V6", 3).sunroof(true).sunroof(false).build();
        assert!(!car.has_sunroof());
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Car with Engine: V8, Wheels: 4, Sunroof: true\n\
             Car with Engine: Electric, Wheels: 4, Sunroof: false\n"
        );
    }
}
