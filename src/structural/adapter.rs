//! Adapter Pattern
//!
//! The phone only understands Type-C. The charger we own is Micro-USB. The
//! adapter implements the interface the client expects and forwards to the
//! incompatible one.

use std::io::{self, Write};

// Target interface the client expects
pub trait TypeCCharger {
    fn charge_with_type_c(&self) -> Vec<String>;
}

// Existing component with a different interface
pub struct MicroUsbCharger;

impl MicroUsbCharger {
    pub fn charge_with_micro_usb(&self) -> String {
        "Charging with Micro-USB Charger...".to_string()
    }
}

pub struct TypeCAdapter {
    charger: MicroUsbCharger,
}

impl TypeCAdapter {
    pub fn new(charger: MicroUsbCharger) -> Self {
        Self { charger }
    }
}

impl TypeCCharger for TypeCAdapter {
    fn charge_with_type_c(&self) -> Vec<String> {
        vec![
            "Using Adapter: Converting Type-C to Micro-USB...".to_string(),
            self.charger.charge_with_micro_usb(),
        ]
    }
}

// Client: only knows about Type-C
pub struct Mobile {
    charger: Box<dyn TypeCCharger>,
}

impl Mobile {
    pub fn new(charger: Box<dyn TypeCCharger>) -> Self {
        Self { charger }
    }

    pub fn charge(&self) -> Vec<String> {
        self.charger.charge_with_type_c()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let adapter = TypeCAdapter::new(MicroUsbCharger);
    let mobile = Mobile::new(Box::new(adapter));

    for line in mobile.charge() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
