//! Report writers.
//!
//! - summary: one human-readable line per strategy
//! - predictions: the ensemble's top-1 label per document, one per line
//! - details: per-document outcomes as JSON or JSON Lines

use serde::Serialize;
use std::io::{self, Write};

use crate::evaluation::EvaluationReport;

/// Output format options for structured records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// A writer that serializes records to JSON or JSONL format.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    items_written: usize,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    ///
    /// `pretty` only affects the JSON format; JSONL is always one object per line.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            items_written: 0,
        }
    }

    /// Write a single record.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        if self.pretty && self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, item).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
        }
        writeln!(self.writer)?;
        self.items_written += 1;
        Ok(())
    }

    /// Write multiple records: an array for JSON, one line each for JSONL.
    pub fn write_all<T: Serialize>(&mut self, items: &[T]) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut self.writer, items)
                        .map_err(io::Error::other)?;
                } else {
                    serde_json::to_writer(&mut self.writer, items).map_err(io::Error::other)?;
                }
                writeln!(self.writer)?;
                self.items_written += items.len();
            }
            OutputFormat::JsonLines => {
                for item in items {
                    self.write(item)?;
                }
            }
        }
        Ok(())
    }

    /// Get the number of records written.
    pub fn items_written(&self) -> usize {
        self.items_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write one summary line per strategy.
pub fn write_summary<W: Write>(mut writer: W, report: &EvaluationReport) -> io::Result<()> {
    for line in report.summary_lines() {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Write the ensemble's top-1 label for every evaluated document, in order.
///
/// Documents with an empty ranking produce an empty line so line numbers
/// stay aligned with the evaluated documents.
pub fn write_top1<W: Write>(mut writer: W, report: &EvaluationReport) -> io::Result<usize> {
    let mut count = 0;
    for label in report.top1_predictions() {
        writeln!(writer, "{}", label)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Write per-document outcomes.
pub fn write_details<W: Write>(
    writer: &mut OutputWriter<W>,
    report: &EvaluationReport,
) -> io::Result<()> {
    writer.write_all(&report.documents)?;
    writer.flush()
}

/// Convenience function to serialize an item to a JSON string.
pub fn to_json<T: Serialize>(item: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(item)
    } else {
        serde_json::to_string(item)
    }
}
