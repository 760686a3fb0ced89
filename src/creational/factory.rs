//! Factory Pattern
//!
//! Callers ask for a vehicle by name and get back a trait object; they never
//! name the concrete type.

use std::io::{self, Write};

use tracing::debug;

pub trait Vehicle {
    fn drive(&self) -> String;
}

pub struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving a Car".to_string()
    }
}

pub struct Bike;

impl Vehicle for Bike {
    fn drive(&self) -> String {
        "Riding a Bike".to_string()
    }
}

pub struct VehicleFactory;

impl VehicleFactory {
    /// Returns `None` for anything other than "car" or "bike" (any case).
    pub fn get_vehicle(kind: &str) -> Option<Box<dyn Vehicle>> {
        if kind.eq_ignore_ascii_case("car") {
            Some(Box::new(Car))
        } else if kind.eq_ignore_ascii_case("bike") {
            Some(Box::new(Bike))
        } else {
            debug!(kind, "no vehicle registered for kind");
            None
        }
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let car = VehicleFactory::get_vehicle("Car");
    let bike = VehicleFactory::get_vehicle("Bike");

    for vehicle in [car, bike].iter().flatten() {
        writeln!(out, "{}", vehicle.drive())?;
    }
    Ok(())
}
