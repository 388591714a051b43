//! The text channel between the game and the player.
//!
//! [`Console`] works over any [`BufRead`] and [`Write`], so the real game talks to stdin/stdout while tests feed it
//! byte buffers. Input is read the way a token scanner would: whitespace separates numbers, and any numbers left
//! over on a line are saved for the next prompt.

use std::{
    collections::VecDeque,
    fmt,
    io::{self, BufRead, Write},
};

use crate::error::{Error, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
    /// Tokens read from the last line but not yet consumed.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pending: VecDeque::new() }
    }

    /// Print one line, flushing so it's visible before any blocking read or pause.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Push whatever's on screen out of view by printing `lines` single-space lines.
    pub fn scroll_away(&mut self, lines: usize) -> Result<()> {
        for _ in 0..lines {
            writeln!(self.output, " ")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Read the next whitespace-separated integer, pulling in more lines as needed.
    pub fn read_number(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token.parse().map_err(|_| Error::NotANumber { token })
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Give back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// A console on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
