//! Template Method Pattern
//!
//! `process` fixes the order of the steps. Implementors fill in reading and
//! saving; the processing step in the middle is shared and private.

use std::io::{self, Write};

pub trait DataProcessor {
    fn read_data(&self) -> String;
    fn save_data(&self) -> String;

    /// Implementors are expected to keep this default.
    fn process(&self) -> Vec<String> {
        vec![self.read_data(), process_data(), self.save_data()]
    }
}

fn process_data() -> String {
    "Processing data...".to_string()
}

pub struct CsvDataProcessor;

impl DataProcessor for CsvDataProcessor {
    fn read_data(&self) -> String {
        "Reading CSV data...".to_string()
    }

    fn save_data(&self) -> String {
        "Saving processed CSV data...".to_string()
    }
}

pub struct JsonDataProcessor;

impl DataProcessor for JsonDataProcessor {
    fn read_data(&self) -> String {
        "Reading JSON data...".to_string()
    }

    fn save_data(&self) -> String {
        "Saving processed JSON data...".to_string()
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let csv: Box<dyn DataProcessor> = Box::new(CsvDataProcessor);
    for line in csv.process() {
        writeln!(out, "{}", line)?;
    }

    writeln!(out, "----------------------")?;

    let json: Box<dyn DataProcessor> = Box::new(JsonDataProcessor);
    for line in json.process() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_run_in_fixed_order() {
        let steps = JsonDataProcessor.process();
        assert_eq!(
            steps,
            vec![
                "Reading JSON data...",
                "Processing data...",
                "Saving processed JSON data...",
            ]
        );
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Reading CSV data...\n\
             Processing data...\n\
             Saving processed CSV data...\n\
             ----------------------\n\
             Reading JSON data...\n\
             Processing data...\n\
             Saving processed JSON data...\n"
        );
    }
}
