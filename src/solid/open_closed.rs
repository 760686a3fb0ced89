//! Open/Closed Principle
//!
//! Open for extension, closed for modification: a new payment method is a
//! new type implementing `Payment`, existing code stays untouched.

use std::io::{self, Write};

pub trait Payment {
    fn pay(&self) -> String;
}

pub struct Gpay;

impl Payment for Gpay {
    fn pay(&self) -> String {
        "Payment with Gpay".to_string()
    }
}

pub struct Phonepe;

impl Payment for Phonepe {
    fn pay(&self) -> String {
        "Payment with Phonepe".to_string()
    }
}

/// Works for every `Payment`, including ones written after it.
pub fn pay_all(payments: &[Box<dyn Payment>]) -> Vec<String> {
    payments.iter().map(|p| p.pay()).collect()
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let payments: Vec<Box<dyn Payment>> = vec![Box::new(Gpay), Box::new(Phonepe)];

    for line in pay_all(&payments) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
