use std::io::{self, BufRead, Write};

pub(super) const INVOICE_PROMPT: &str = "Enter the invoice number";
pub(super) const BOXES_PROMPT: &str = "Enter the total number of boxes";

/// Asks `question` and returns the trimmed answer. End of input reads as an empty answer.
pub(super) fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}: ", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Returns `given` if present, otherwise asks on stdin.
pub(super) fn or_ask(given: Option<String>, question: &str) -> io::Result<String> {
    match given {
        Some(value) => Ok(value),
        None => ask(&mut io::stdin().lock(), &mut io::stdout(), question),
    }
}
