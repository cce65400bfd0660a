//! Text form of mining results, one itemset per line:
//!
//! ```text
//! [1, 2, 3] (0.5)
//! ```
//!
//! Items are printed ascending. Supports are printed with every digit needed
//! to round-trip the `f64`, and always with a decimal point, so a support of
//! exactly one prints as `1.0`.

use std::io::{self, BufRead, Write};

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::itemset::FrequentItemset;

pub fn format_support(support: f64) -> String {
    // `Display` for f64 never switches to exponent notation, but drops the
    // fraction of integral values.
    let s = support.to_string();
    if s.contains('.') || !support.is_finite() {
        s
    } else {
        s + ".0"
    }
}

pub fn format_line(itemset: &FrequentItemset) -> String {
    format!(
        "[{}] ({})",
        itemset.items.iter().join(", "),
        format_support(itemset.support)
    )
}

/// Parses one result line. Items are returned sorted.
pub fn parse_line(line: &str) -> Option<FrequentItemset> {
    let line = line.trim();
    let rest = line.strip_prefix('[')?;
    let (items, rest) = rest.split_once(']')?;
    let support = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    let items = items
        .split(',')
        .map(|item| item.trim().parse::<i64>().ok())
        .collect::<Option<Vec<i64>>>()?;
    let support = support.trim().parse::<f64>().ok()?;
    Some(FrequentItemset::new(items, support))
}

/// Parses a whole result listing, skipping blank lines.
pub fn read_results<R: BufRead>(reader: R) -> Result<Vec<FrequentItemset>> {
    let mut itemsets = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(itemset) => itemsets.push(itemset),
            None => {
                return Err(Error::MalformedResultLine {
                    line: index + 1,
                    text: line,
                })
            }
        }
    }
    Ok(itemsets)
}

pub fn write_results<W: Write>(output: &mut W, itemsets: &[FrequentItemset]) -> io::Result<()> {
    for itemset in itemsets {
        writeln!(output, "{}", format_line(itemset))?;
    }
    Ok(())
}
