use std::io::{self, Write};

use serde_json::json;

pub const SEPARATOR: &str = "***********";

/// Writes labelled values either as `label: value` text or as JSON lines.
pub struct Printer<W> {
    out: W,
    json: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn value(&mut self, label: &str, value: f64) -> io::Result<()> {
        if self.json {
            writeln!(self.out, "{}", json!({ "alg": label, "value": value }))
        } else {
            writeln!(self.out, "{}: {}", label, value)
        }
    }

    pub fn integer(&mut self, label: &str, value: i64) -> io::Result<()> {
        if self.json {
            writeln!(self.out, "{}", json!({ "alg": label, "value": value }))
        } else {
            writeln!(self.out, "{}: {}", label, value)
        }
    }

    /// Group separator; JSON output has no groups.
    pub fn separator(&mut self) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "{}", SEPARATOR)
    }

    pub fn document(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
