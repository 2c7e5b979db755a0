//! Terminal front end: feeds key sequences into a session and prints the
//! display.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::input::parse_keys;
use crate::session::Session;

/// How the display is written out.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputOptions {
    /// Print after every key, not only after each sequence.
    pub trace: bool,
    /// Print the session snapshot as JSON.
    pub json: bool,
}

pub struct Frontend<W: Write> {
    session: Session,
    out: W,
    options: OutputOptions,
}

impl<W: Write> Frontend<W> {
    pub fn new(session: Session, out: W, options: OutputOptions) -> Self {
        Self {
            session,
            out,
            options,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Type one key sequence.
    pub fn feed(&mut self, sequence: &str) -> Result<()> {
        let keys = parse_keys(sequence)?;

        for key in keys {
            self.session.press(key);
            if self.options.trace {
                self.show()?;
            }
        }

        Ok(())
    }

    /// Write the current display (or snapshot) as one line.
    pub fn show(&mut self) -> Result<()> {
        if self.options.json {
            let json = serde_json::to_string(&self.session.snapshot())
                .context("Failed to serialize session")?;
            writeln!(self.out, "{}", json)?;
        } else {
            writeln!(self.out, "{}", self.session.display())?;
        }
        Ok(())
    }

    /// Read key sequences line by line and print the display after each.
    ///
    /// A line that fails to parse is reported and skipped; the session is
    /// left as it was.
    pub fn run_lines<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            if let Err(e) = self.feed(&line) {
                warn!("{:#}", e);
                writeln!(self.out, "error: {:#}", e)?;
                continue;
            }

            if !self.options.trace {
                self.show()?;
            }
        }

        Ok(())
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}
