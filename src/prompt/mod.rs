// src/prompt/mod.rs
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::debug;

pub mod collect;

pub use collect::collect_filters;

/// Input that is not on a prompt's allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input:?} is not one of: {}", .options.join(", "))]
pub struct InvalidChoice {
    pub input: String,
    pub options: Vec<String>,
}

/// Single validation step: trim, lower-case, check membership.
pub fn validate(raw: &str, options: &[&str]) -> Result<String, InvalidChoice> {
    let value = raw.trim().to_lowercase();
    if options.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(InvalidChoice {
            input: raw.trim().to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Only a literal "yes" (any case) counts as agreement.
pub fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line, without its line ending.
    /// Fails once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("reading from console")?;
        if n == 0 {
            bail!("console input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Keep asking until the answer is one of `options`. Returns the lower-cased answer.
    pub fn prompt_choice(&mut self, prompt: &str, options: &[&str]) -> Result<String> {
        loop {
            let raw = self.ask(prompt)?;
            match validate(&raw, options) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, "rejected input");
                    writeln!(
                        self.output,
                        "Invalid input. Please choose from: {}.",
                        options.join(", ")
                    )?;
                    writeln!(self.output, "Restarting...")?;
                }
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let raw = self.ask(prompt)?;
        Ok(is_yes(&raw))
    }
}
