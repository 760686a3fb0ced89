//! Memento Pattern
//!
//! The editor can snapshot itself into a `Memento` whose contents are
//! private to this module. The caretaker stores snapshots without being able
//! to look inside them.

use std::io::{self, Write};

/// Opaque snapshot of a `TextEditor`.
#[derive(Debug, Clone)]
pub struct Memento {
    text: String,
}

pub trait Originator {
    fn save(&self) -> Memento;
    fn restore(&mut self, memento: &Memento);
}

#[derive(Debug, Default)]
pub struct TextEditor {
    text: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_text(&mut self, words: &str) {
        self.text.push_str(words);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Originator for TextEditor {
    fn save(&self) -> Memento {
        Memento {
            text: self.text.clone(),
        }
    }

    fn restore(&mut self, memento: &Memento) {
        self.text.clone_from(&memento.text);
    }
}

#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, memento: Memento) {
        self.history.push(memento);
    }

    /// Drops the latest snapshot and returns the one before it.
    pub fn undo(&mut self) -> Option<&Memento> {
        self.history.pop();
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut editor = TextEditor::new();
    let mut caretaker = Caretaker::new();

    editor.type_text("Hi ");
    caretaker.save(editor.save());

    editor.type_text("Ganesh");
    caretaker.save(editor.save());

    writeln!(out, "Current Text: {}", editor.text())?;

    if let Some(previous) = caretaker.undo() {
        editor.restore(previous);
    }
    writeln!(out, "After Undo: {}", editor.text())?;

    editor.type_text("Sai");
    caretaker.save(editor.save());

    writeln!(out, "Final Text: {}", editor.text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_walks_back_through_history() {
        let mut editor = TextEditor::new();
        let mut caretaker = Caretaker::new();
        for word in ["a", "b", "c"] {
            editor.type_text(word);
            caretaker.save(editor.save());
        }

        editor.restore(caretaker.undo().unwrap());
        assert_eq!(editor.text(), "ab");
        editor.restore(caretaker.undo().unwrap());
        assert_eq!(editor.text(), "a");
    }

    #[test]
    fn test_undo_past_first_snapshot_is_none() {
        let mut editor = TextEditor::new();
        let mut caretaker = Caretaker::new();
        editor.type_text("only");
        caretaker.save(editor.save());

        assert!(caretaker.undo().is_none());
        assert!(caretaker.undo().is_none());
        assert!(caretaker.is_empty());
        // Nothing to restore, the editor keeps its text
        assert_eq!(editor.text(), "only");
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_edits() {
        let mut editor = TextEditor::new();
        editor.type_text("draft");
        let snapshot = editor.save();
        editor.type_text(" v2");

        editor.restore(&snapshot);
        assert_eq!(editor.text(), "draft");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Current Text: Hi Ganesh\n\
             After Undo: Hi \n\
             Final Text: Hi Sai\n"
        );
    }
}
