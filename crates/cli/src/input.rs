//! Line-oriented numeric input with reprompt-until-valid loops.
//!
//! Parsing goes through `str::parse::<f64>`, which accepts a decimal point
//! regardless of the host locale. A line that does not parse as a finite
//! number (or is not positive where a positive number is required) gets an
//! error line and a fresh prompt; the loops are deliberately unbounded, no
//! retry limit and no timeout. The only failure either reader returns is end
//! of input, where reprompting cannot succeed.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Read a finite number strictly greater than zero, reprompting until valid.
pub fn read_positive(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<f64> {
    loop {
        match read_parsed(prompt, input, out)? {
            Some(v) if v > 0.0 => return Ok(v),
            _ => writeln!(out, "Error: a positive number is required.")?,
        }
    }
}

/// Read any finite number, reprompting until valid.
pub fn read_number(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<f64> {
    loop {
        match read_parsed(prompt, input, out)? {
            Some(v) => return Ok(v),
            None => writeln!(out, "Error: enter a valid number.")?,
        }
    }
}

/// One prompt/read/parse attempt. `Ok(None)` means the line did not parse as
/// a finite number; `Err` means the input stream ended.
fn read_parsed(
    prompt: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<f64>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    let n = input.read_line(&mut line).context("reading input line")?;
    if n == 0 {
        bail!("input ended before a valid number was entered");
    }
    Ok(line.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
}
