//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all lines as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<LineRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LineRecord {
    /// 1-based line number across all inputs
    pub line: usize,
    /// The original line
    pub input: String,
    /// The processed line
    pub output: String,
    /// The processed line split on whitespace
    pub tokens: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_line(&mut self, input: &str, output: &str) -> Result<()> {
        self.records.push(LineRecord {
            line: self.records.len() + 1,
            input: input.to_string(),
            output: output.to_string(),
            tokens: output.split_whitespace().map(str::to_string).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
