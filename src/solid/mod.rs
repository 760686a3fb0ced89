//! SOLID principles, each with a "bad" and a "good" version side by side.

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;
