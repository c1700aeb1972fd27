use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use anyhow::{bail, Result};
use rust_decimal::Decimal;

/// Blocking line-oriented console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    pub input: R,
    pub output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn println(&mut self, msg: impl Display) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Prints the prompt, reads one line and returns it trimmed.
    pub fn prompt(&mut self, msg: &str) -> Result<String> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    /// Keeps prompting until the input parses as a non-negative decimal.
    pub fn prompt_amount(&mut self, msg: &str) -> Result<Decimal> {
        loop {
            let line = self.prompt(msg)?;
            match line.parse::<Decimal>() {
                Ok(amount) if amount.is_sign_negative() => {
                    self.println("Please enter a non-negative number.")?;
                }
                Ok(amount) => return Ok(amount),
                Err(_) => {
                    self.println("Please enter a number (e.g. 10 or 3.5).")?;
                }
            }
        }
    }

    /// Single yes/no prompt; only `y` counts as yes.
    pub fn confirm(&mut self, msg: &str) -> Result<bool> {
        Ok(self.prompt(msg)?.eq_ignore_ascii_case("y"))
    }
}
