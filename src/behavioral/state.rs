//! State Pattern
//!
//! The document delegates to whatever state object it currently holds, so
//! its behavior changes without a single `if` on a status field.

use std::io::{self, Write};

pub trait DocumentState {
    fn handle_request(&self) -> String;
}

pub struct DraftState;

impl DocumentState for DraftState {
    fn handle_request(&self) -> String {
        "Document is in Draft mode.".to_string()
    }
}

pub struct ReviewState;

impl DocumentState for ReviewState {
    fn handle_request(&self) -> String {
        "Document is in Review mode.".to_string()
    }
}

pub struct PublishedState;

impl DocumentState for PublishedState {
    fn handle_request(&self) -> String {
        "Document is Published.".to_string()
    }
}

pub struct Document {
    state: Box<dyn DocumentState>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// New documents start as drafts.
    pub fn new() -> Self {
        Self {
            state: Box::new(DraftState),
        }
    }

    pub fn set_state(&mut self, state: Box<dyn DocumentState>) {
        self.state = state;
    }

    pub fn apply_state(&self) -> String {
        self.state.handle_request()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut document = Document::new();
    writeln!(out, "{}", document.apply_state())?;

    document.set_state(Box::new(ReviewState));
    writeln!(out, "{}", document.apply_state())?;

    document.set_state(Box::new(PublishedState));
    writeln!(out, "{}", document.apply_state())?;
    Ok(())
}
