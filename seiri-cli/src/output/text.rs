//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Text formatter - writes cleaned documents separated by a blank line
pub struct TextFormatter<W: Write> {
    writer: W,
    documents_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents_written: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, text: &str) -> Result<()> {
        if self.documents_written > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{text}")?;
        self.documents_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
