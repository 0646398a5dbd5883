use {
    anyhow::{bail, Result},
    std::io::{BufRead, Write},
};

pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line.trim_end().to_string())
}

/// Prompts until the line parses as an integer.
pub fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<i64> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

/// Reads a whitespace separated list of numbers, dropping any token that
/// does not parse.
pub fn prompt_indices<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Vec<usize>> {
    let line = prompt_line(input, output, prompt)?;
    Ok(line
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect())
}
