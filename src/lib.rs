//! # Design Patterns, OOP Concepts and SOLID Principles
//!
//! Runnable, self-contained examples. Every example module exposes a
//! `run(out: &mut dyn Write)` entry point that builds a handful of objects
//! and writes what they do, one line per action.
//!
//! ## Creational Patterns
//! - Factory, Abstract Factory, Builder, Prototype
//! - Singleton (eager, thread-confined lazy, locked, double-checked, holder, enum)
//!
//! ## Structural Patterns
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight
//!
//! ## Behavioral Patterns
//! - Chain of Responsibility, Command, Interpreter, Iterator, Mediator,
//!   Memento, Observer, State, Strategy, Template Method, Visitor
//!
//! ## OOP Concepts
//! - Abstraction, Polymorphism
//!
//! ## SOLID Principles
//! - Single Responsibility, Open/Closed, Liskov Substitution,
//!   Interface Segregation, Dependency Inversion
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run observer singleton
//! cargo run --bin patterns -- all
//! cargo run --bin patterns -- --config patterns.toml all
//! ```
//!
//! Set `PATTERNS_LOG=debug` to see what the examples do under the hood.

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod oop;
pub mod solid;
pub mod structural;

pub use catalog::{Category, Example};
pub use config::RunnerConfig;
pub use error::{Error, Result};
