//! Observer Pattern
//!
//! Subscribers register with the news agency and get called back on every
//! publication. Removal is by identity (`Rc::ptr_eq`), not by name.

use std::io::{self, Write};
use std::rc::Rc;

use tracing::debug;

pub trait Observer {
    fn update(&self, message: &str) -> String;
}

pub trait Subject {
    fn add_observer(&mut self, observer: Rc<dyn Observer>);

    /// Returns whether the observer was registered.
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) -> bool;

    fn notify_observers(&self, message: &str) -> Vec<String>;
}

#[derive(Default)]
pub struct NewsAgency {
    observers: Vec<Rc<dyn Observer>>,
}

impl NewsAgency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_news(&self, news: &str) -> Vec<String> {
        let mut lines = vec![format!("News Published: {}", news)];
        lines.extend(self.notify_observers(news));
        lines
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for NewsAgency {
    fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "observer added");
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                debug!(observers = self.observers.len(), "observer removed");
                true
            }
            None => false,
        }
    }

    fn notify_observers(&self, message: &str) -> Vec<String> {
        self.observers.iter().map(|o| o.update(message)).collect()
    }
}

pub struct EmailSubscriber {
    name: String,
}

impl EmailSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for EmailSubscriber {
    fn update(&self, message: &str) -> String {
        format!("{} received an email update: {}", self.name, message)
    }
}

pub struct MobileSubscriber {
    name: String,
}

impl MobileSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for MobileSubscriber {
    fn update(&self, message: &str) -> String {
        format!("{} received a mobile notification: {}", self.name, message)
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut agency = NewsAgency::new();

    let alice: Rc<dyn Observer> = Rc::new(EmailSubscriber::new("Alice"));
    let bob: Rc<dyn Observer> = Rc::new(MobileSubscriber::new("Bob"));

    agency.add_observer(Rc::clone(&alice));
    agency.add_observer(Rc::clone(&bob));

    let mut lines = agency.publish_news("Breaking News: Observer Pattern in Java!");
    lines.extend(agency.publish_news("Sports Update: Local Team Wins Championship!"));

    agency.remove_observer(&alice);

    lines.extend(agency.publish_news("Tech News: Java 22 Released!"));

    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
