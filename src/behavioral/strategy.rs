//! Strategy Pattern
//!
//! The cart does not care how it gets paid. The payment method is an object
//! swapped in at runtime.

use std::io::{self, Write};

pub trait PaymentStrategy {
    fn pay(&self, amount: u32) -> String;
}

pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32) -> String {
        format!(
            "Paid ${} using Credit Card (Card No: {}).",
            amount, self.card_number
        )
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u32) -> String {
        format!("Paid ${} using PayPal (Email: {}).", amount, self.email)
    }
}

pub struct BitcoinPayment {
    wallet_address: String,
}

impl BitcoinPayment {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }
}

impl PaymentStrategy for BitcoinPayment {
    fn pay(&self, amount: u32) -> String {
        format!(
            "Paid ${} using Bitcoin (Wallet: {}).",
            amount, self.wallet_address
        )
    }
}

#[derive(Default)]
pub struct ShoppingCart {
    payment_strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.payment_strategy = Some(strategy);
    }

    pub fn checkout(&self, amount: u32) -> String {
        match &self.payment_strategy {
            Some(strategy) => strategy.pay(amount),
            None => "No payment method selected!".to_string(),
        }
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut cart = ShoppingCart::new();

    cart.set_payment_strategy(Box::new(CreditCardPayment::new("1234-5678-9876-5432")));
    writeln!(out, "{}", cart.checkout(100))?;

    cart.set_payment_strategy(Box::new(PayPalPayment::new("user@example.com")));
    writeln!(out, "{}", cart.checkout(50))?;

    cart.set_payment_strategy(Box::new(BitcoinPayment::new("1A2b3C4d5E6f7G")));
    writeln!(out, "{}", cart.checkout(200))?;
    Ok(())
}
