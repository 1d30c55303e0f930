//! Line-oriented console over any reader/writer pair.

use std::io::{BufRead, ErrorKind, Write};

use crate::error::{GameError, Result};

/// Prompting console.
///
/// End of input surfaces as `GameError::Io` with `UnexpectedEof`, which the
/// shell treats as a quit.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write a prompt and read the reply, without its line ending.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::Io(ErrorKind::UnexpectedEof.into()));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(trimmed.to_string())
    }

    /// Prompt for an integer. Prints an error and returns `None` on bad input.
    pub fn prompt_int(&mut self, text: &str) -> Result<Option<i64>> {
        let reply = self.prompt(text)?;
        match reply.trim().parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.say("  ✗ Please enter a valid integer.")?;
                Ok(None)
            }
        }
    }

    /// Get the writer back.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Check if an error marks the end of input.
#[must_use]
pub fn is_end_of_input(err: &GameError) -> bool {
    matches!(err, GameError::Io(e) if e.kind() == ErrorKind::UnexpectedEof)
}
