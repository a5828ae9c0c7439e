//! Reading and writing sample tables
//!
//! Input is plain text with one sample per line. Columns may be separated
//! by whitespace, `,` or `;`. Blank lines and `#` comments are skipped.
//! A line holding a single number is taken as `y`, with its position in
//! the sample sequence as `x`.

use std::io::{Read, Write};

use crate::error::{Result, TopfError};

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty())
}

fn parse_token(token: &str, line: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| TopfError::Parse {
        line,
        token: token.to_string(),
    })
}

/// Parse a sample table from text
pub fn parse_samples(text: &str) -> Result<Vec<(f64, f64)>> {
    let mut samples = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("");
        let columns: Vec<&str> = tokens(line).collect();

        match columns.as_slice() {
            [] => continue,
            [y] => {
                let x = samples.len() as f64;
                samples.push((x, parse_token(y, line_no + 1)?));
            }
            [x, y] => {
                samples.push((parse_token(x, line_no + 1)?, parse_token(y, line_no + 1)?));
            }
            _ => {
                return Err(TopfError::TooManyColumns {
                    line: line_no + 1,
                    cols: columns.len(),
                });
            }
        }
    }

    Ok(samples)
}

/// Read a sample table from any reader
pub fn read_samples<R: Read>(mut reader: R) -> Result<Vec<(f64, f64)>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_samples(&text)
}

/// Write `(x, value)` pairs as tab-separated lines
pub fn write_tsv<W: Write>(mut writer: W, points: &[(f64, f64)]) -> Result<()> {
    for (x, value) in points {
        writeln!(writer, "{}\t{}", x, value)?;
    }
    Ok(())
}
