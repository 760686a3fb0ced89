//! Interface Segregation Principle
//!
//! Nobody should be forced to implement methods they cannot support.

use std::io::{self, Write};

// Bad: one fat trait
pub trait Printer {
    fn print(&self) -> String;
    fn scan(&self) -> String;
}

pub struct BadPrinter;

impl Printer for BadPrinter {
    fn print(&self) -> String {
        "Bad Printer is Printing".to_string()
    }

    // Forced to exist even though this printer cannot scan
    fn scan(&self) -> String {
        "Bad Printer unable to scan".to_string()
    }
}

// Good: one small trait per capability
pub trait Printable {
    fn print(&self) -> String;
}

pub trait Scannable {
    fn scan(&self) -> String;
}

pub struct GoodPrinter;

impl Printable for GoodPrinter {
    fn print(&self) -> String {
        "Good Printer is Printing".to_string()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let bad_printer: Box<dyn Printer> = Box::new(BadPrinter);
    writeln!(out, "{}", bad_printer.print())?;
    writeln!(out, "{}", bad_printer.scan())?;

    let good_printer: Box<dyn Printable> = Box::new(GoodPrinter);
    writeln!(out, "{}", good_printer.print())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OfficeMachine;

    impl Printable for OfficeMachine {
        fn print(&self) -> String {
            "printing".to_string()
        }
    }

    impl Scannable for OfficeMachine {
        fn scan(&self) -> String {
            "scanning".to_string()
        }
    }

    fn print_and_scan<T: Printable + Scannable>(device: &T) -> [String; 2] {
        [device.print(), device.scan()]
    }

    #[test]
    fn test_capabilities_compose() {
        assert_eq!(print_and_scan(&OfficeMachine), ["printing", "scanning"]);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bad Printer is Printing\n\
             Bad Printer unable to scan\n\
             Good Printer is Printing\n"
        );
    }
}
