//! Human-readable run output.
//!
//! The transcript is the product of a run: headers for each step, the
//! pretty-printed JSON of every successful probe and a one-line diagnostic for
//! every failure. Logs go through `tracing` and never land here.

use crate::config::Settings;
use serde_json::Value;
use std::fmt::Display;
use std::io::{self, Write};

const GREEN: &str = "\x1b[0;32m";
const YELLOW: &str = "\x1b[1;33m";
const BLUE: &str = "\x1b[0;34m";
const RESET: &str = "\x1b[0m";

pub struct Transcript<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, color: &str, line: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}{}{}", color, line, RESET)
        } else {
            writeln!(self.out, "{}", line)
        }
    }

    pub fn banner(&mut self, settings: &Settings) -> io::Result<()> {
        self.paint(BLUE, "--- Starting WhatsApp API smoke test ---")?;
        writeln!(self.out, "API URL: {}", settings.api_url)?;
        writeln!(self.out, "Test email: {}", settings.email)?;
        writeln!(self.out, "Recipient number: {}", settings.recipient)?;
        writeln!(self.out)
    }

    pub fn step(&mut self, step: &str, description: &str) -> io::Result<()> {
        self.paint(YELLOW, &format!("STEP {}: {}...", step, description))
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.paint(GREEN, &format!("SUCCESS: {}", message))
    }

    pub fn error(&mut self, err: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "ERROR: {}", err)
    }

    /// Two-space indented JSON, non-ASCII characters written as-is.
    pub fn json(&mut self, value: &Value) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n")
    }

    pub fn finished(&mut self) -> io::Result<()> {
        self.paint(BLUE, "--- Smoke test finished ---")?;
        self.out.flush()
    }
}
