//! Abstraction
//!
//! `Animal` declares what every animal can do. `sound` has no sensible
//! default so each type must supply it; `sleep` has one that types may
//! override.

use std::io::{self, Write};

pub trait Animal {
    fn sound(&self) -> String;

    fn sleep(&self) -> String {
        "Animal is sleeping".to_string()
    }
}

pub struct Dog;

impl Animal for Dog {
    fn sound(&self) -> String {
        "Bow Bow".to_string()
    }

    fn sleep(&self) -> String {
        "Dog is Sleeping".to_string()
    }
}

pub struct Cat;

impl Animal for Cat {
    fn sound(&self) -> String {
        "Meow Meow".to_string()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let animals: [Box<dyn Animal>; 2] = [Box::new(Dog), Box::new(Cat)];

    for animal in &animals {
        writeln!(out, "{}", animal.sound())?;
        writeln!(out, "{}", animal.sleep())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_override() {
        assert_eq!(Cat.sleep(), "Animal is sleeping");
        assert_eq!(Dog.sleep(), "Dog is Sleeping");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bow Bow\nDog is Sleeping\nMeow Meow\nAnimal is sleeping\n"
        );
    }
}
