//! Interactive field collection for new treasures

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{HuntError, Result};
use crate::record::TreasureDraft;

/// Prompt for every field of a new treasure, one line each
///
/// Text fields keep their content minus the line ending; numbers are
/// trimmed before parsing. End of input before the last field is an error.
pub fn read_draft<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<TreasureDraft> {
    let username = ask(input, output, "Enter username: ")?;
    let latitude = ask_number(input, output, "Enter latitude: ", "latitude")?;
    let longitude = ask_number(input, output, "Enter longitude: ", "longitude")?;
    let clue = ask(input, output, "Enter clue: ")?;
    let value = ask_number(input, output, "Enter value: ", "value")?;

    Ok(TreasureDraft {
        username,
        latitude,
        longitude,
        clue,
        value,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(HuntError::invalid_input(format!(
            "unexpected end of input at '{}'",
            prompt.trim_end_matches([':', ' '])
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn ask_number<T, R, W>(input: &mut R, output: &mut W, prompt: &str, field: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    let raw = ask(input, output, prompt)?;
    raw.trim()
        .parse()
        .map_err(|e| HuntError::invalid_input(format!("{} '{}': {}", field, raw.trim(), e)))
}
