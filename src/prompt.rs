//! Line-oriented interactive prompts.
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the answer without its line terminator.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read answer from stdin")?;
        if read == 0 {
            bail!("stdin closed before an answer was given");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Yes unless the answer is an explicit `n`/`no`.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        let declined = matches!(answer.trim().to_ascii_lowercase().as_str(), "n" | "no");
        Ok(!declined)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
