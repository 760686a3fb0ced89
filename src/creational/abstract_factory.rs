//! Abstract Factory Pattern
//!
//! A factory produces a whole family of related products (a car and a bike)
//! that belong together. Swapping the factory swaps the family.

use std::io::{self, Write};

use tracing::debug;

// ============================================================================
// Products
// ============================================================================

pub trait Car {
    fn drive(&self) -> String;
}

pub trait Bike {
    fn ride(&self) -> String;
}

pub struct Sedan;

impl Car for Sedan {
    fn drive(&self) -> String {
        "Driving a Sedan".to_string()
    }
}

pub struct Suv;

impl Car for Suv {
    fn drive(&self) -> String {
        "Driving an SUV".to_string()
    }
}

pub struct SportsBike;

impl Bike for SportsBike {
    fn ride(&self) -> String {
        "Riding a Sports Bike".to_string()
    }
}

pub struct CruiserBike;

impl Bike for CruiserBike {
    fn ride(&self) -> String {
        "Riding a Cruiser Bike".to_string()
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait VehicleFactory {
    fn create_car(&self) -> Box<dyn Car>;
    fn create_bike(&self) -> Box<dyn Bike>;
}

pub struct LuxuryVehicleFactory;

impl VehicleFactory for LuxuryVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Suv)
    }

    fn create_bike(&self) -> Box<dyn Bike> {
        Box::new(SportsBike)
    }
}

pub struct EconomyVehicleFactory;

impl VehicleFactory for EconomyVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Sedan)
    }

    fn create_bike(&self) -> Box<dyn Bike> {
        Box::new(CruiserBike)
    }
}

pub struct FactoryProducer;

impl FactoryProducer {
    pub fn get_factory(kind: &str) -> Option<Box<dyn VehicleFactory>> {
        if kind.eq_ignore_ascii_case("luxury") {
            Some(Box::new(LuxuryVehicleFactory))
        } else if kind.eq_ignore_ascii_case("economy") {
            Some(Box::new(EconomyVehicleFactory))
        } else {
            debug!(kind, "no factory for vehicle family");
            None
        }
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut lines = Vec::new();

    if let Some(luxury) = FactoryProducer::get_factory("Luxury") {
        lines.push(luxury.create_car().drive());
        lines.push(luxury.create_bike().ride());
    }
    if let Some(economy) = FactoryProducer::get_factory("Economy") {
        lines.push(economy.create_car().drive());
        lines.push(economy.create_bike().ride());
    }

    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_stay_consistent() {
        let luxury = FactoryProducer::get_factory("luxury").unwrap();
        assert_eq!(luxury.create_car().drive(), "Driving an SUV");
        assert_eq!(luxury.create_bike().ride(), "Riding a Sports Bike");

        let economy = FactoryProducer::get_factory("ECONOMY").unwrap();
        assert_eq!(economy.create_car().drive(), "Driving a Sedan");
        assert_eq!(economy.create_bike().ride(), "Riding a Cruiser Bike");
    }

    #[test]
    fn test_unknown_family_is_none() {
        assert!(FactoryProducer::get_factory("Sport").is_none());
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Driving an SUV\n\
             Riding a Sports Bike\n\
             Driving a Sedan\n\
             Riding a Cruiser Bike\n"
        );
    }
}
