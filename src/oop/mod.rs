//! Core OOP concepts expressed with traits.

pub mod abstraction;
pub mod polymorphism;
