//! Interval file loading.
//!
//! The format is line oriented: each non-blank line holds a midpoint and a
//! radius separated by whitespace.

use crate::error::{CliError, Result};
use intermedian_domain::Interval;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read intervals from a file.
pub fn read_intervals(path: &Path) -> Result<Vec<Interval>> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let intervals = parse_intervals(&contents)?;
    debug!(path = %path.display(), count = intervals.len(), "loaded intervals");
    Ok(intervals)
}

/// Parse intervals from text, one `mid rad` pair per line.
pub fn parse_intervals(contents: &str) -> Result<Vec<Interval>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<Interval> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [mid, rad] = fields.as_slice() else {
        return Err(CliError::Parse {
            line: line_number,
            message: format!("expected 2 fields 'mid rad', found {}", fields.len()),
        });
    };

    let number = |token: &str| {
        token.parse::<f64>().map_err(|_| CliError::Parse {
            line: line_number,
            message: format!("'{}' is not a number", token),
        })
    };

    Interval::new(number(mid)?, number(rad)?).map_err(|e| CliError::Parse {
        line: line_number,
        message: e.to_string(),
    })
}
