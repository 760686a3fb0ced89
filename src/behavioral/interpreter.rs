//! Interpreter Pattern
//!
//! Every grammar rule is a type; a sentence is a tree of boxed expressions
//! and evaluating it is one recursive call. Arithmetic wraps on overflow.

use std::io::{self, Write};

pub trait Expression {
    fn interpret(&self) -> i32;
}

pub struct NumberExpression {
    number: i32,
}

impl NumberExpression {
    pub fn new(number: i32) -> Self {
        Self { number }
    }
}

impl Expression for NumberExpression {
    fn interpret(&self) -> i32 {
        self.number
    }
}

pub struct AdditionExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl AdditionExpression {
    pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for AdditionExpression {
    fn interpret(&self) -> i32 {
        self.left.interpret().wrapping_add(self.right.interpret())
    }
}

pub struct SubtractionExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl SubtractionExpression {
    pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for SubtractionExpression {
    fn interpret(&self) -> i32 {
        self.left.interpret().wrapping_sub(self.right.interpret())
    }
}

pub struct MultiplicationExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl MultiplicationExpression {
    pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for MultiplicationExpression {
    fn interpret(&self) -> i32 {
        self.left.interpret().wrapping_mul(self.right.interpret())
    }
}

fn number(n: i32) -> Box<dyn Expression> {
    Box::new(NumberExpression::new(n))
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    // ((10 + 20) - 5) * 2
    let addition = AdditionExpression::new(number(10), number(20));
    let subtraction = SubtractionExpression::new(Box::new(addition), number(5));
    let multiplication = MultiplicationExpression::new(Box::new(subtraction), number(2));

    writeln!(out, "{}", multiplication.interpret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nested_evaluation() {
        // 3 * (4 - (1 + 1))
        let expr = MultiplicationExpression::new(
            number(3),
            Box::new(SubtractionExpression::new(
                number(4),
                Box::new(AdditionExpression::new(number(1), number(1))),
            )),
        );
        assert_eq!(expr.interpret(), 6);
    }

    #[test]
    fn test_overflow_wraps() {
        let expr = AdditionExpression::new(number(i32::MAX), number(1));
        assert_eq!(expr.interpret(), i32::MIN);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "50\n");
    }

    proptest! {
        #[test]
        fn test_matches_native_arithmetic(a in -10_000i32..10_000, b in -10_000i32..10_000, c in -100i32..100) {
            let expr = MultiplicationExpression::new(
                Box::new(SubtractionExpression::new(
                    Box::new(AdditionExpression::new(number(a), number(b))),
                    number(c),
                )),
                number(c),
            );
            prop_assert_eq!(expr.interpret(), (a + b - c) * c);
        }
    }
}
