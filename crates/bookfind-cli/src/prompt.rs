//! Interactive strategy selection.

use anyhow::{bail, Result};
use bookfind_core::SearchStrategy;
use std::io::{BufRead, Write};

const PROMPT: &str = "Choice of search method ([l]inear, [b]inary, [r]ecursiveBinary)? ";

/// Asks for a strategy token until one of `l`, `b`, `r` is entered.
///
/// Input is read one whitespace-delimited token at a time, so several
/// answers on one line are consumed in turn. Fails if input ends first.
pub fn choose_strategy<R: BufRead, W: Write>(input: R, mut output: W) -> Result<SearchStrategy> {
    let mut tokens = Tokens::new(input);
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(token) = tokens.next_token()? else {
            bail!("No search method chosen: input closed");
        };
        match token.as_str() {
            "l" | "b" | "r" => return Ok(token.parse::<SearchStrategy>()?),
            _ => writeln!(output, "Incorrect choice")?,
        }
    }
}

struct Tokens<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop())
    }
}
