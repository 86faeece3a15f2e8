use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use crate::error::{LineCodeError, LineCodeResult};
use crate::phy::line_coding::LineCodingKind;

pub fn print_banner() {
    eprintln!("linecode-rs");
}

/// Next whitespace-separated token from a line reader; empty at end of input
pub fn read_token<R: BufRead>(reader: &mut R) -> LineCodeResult<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(LineCodeError::Stdin)? == 0 {
            return Ok(String::new());
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}

/// Interactive prompt on a terminal, plain line read when stdin is piped
fn ask(prompt: &str, allow_empty: bool) -> LineCodeResult<String> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return read_token(&mut stdin.lock());
    }

    let answer: String = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Ask for the bit string; empty input is allowed
pub fn prompt_bits() -> LineCodeResult<String> {
    ask("Enter binary data", true)
}

/// Show the 1-4 menu and return the raw choice; validation happens on parse
pub fn prompt_scheme() -> LineCodeResult<String> {
    eprintln!("Choose encoding scheme:");
    for kind in LineCodingKind::ALL {
        eprintln!("{}. {}", kind.selector(), kind.name());
    }
    ask("Your choice", false)
}
