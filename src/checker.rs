use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::format::read_results;

/// Result of comparing two listings as sets of itemsets. Supports are
/// ignored.
#[derive(Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Expected itemsets absent from the actual listing.
    pub missed: Vec<Vec<i64>>,
    /// Itemsets in the actual listing that weren't expected.
    pub excess: Vec<Vec<i64>>,
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        self.missed.is_empty() && self.excess.is_empty()
    }

    /// Writes a human readable summary, listing at most `REPORT_LIMIT`
    /// itemsets of each kind.
    pub fn report<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.is_match() {
            return writeln!(output, "The files contain the same patterns");
        }
        if !self.missed.is_empty() {
            writeln!(output, "Missed itemsets from the expected file:")?;
            write_patterns(output, &self.missed)?;
        }
        if !self.excess.is_empty() {
            writeln!(output, "Unexpected itemsets:")?;
            write_patterns(output, &self.excess)?;
        }
        Ok(())
    }
}

const REPORT_LIMIT: usize = 10;

fn write_patterns<W: Write>(output: &mut W, patterns: &[Vec<i64>]) -> io::Result<()> {
    let shown = patterns.len().min(REPORT_LIMIT);
    for pattern in &patterns[..shown] {
        writeln!(output, "\t{:?}", pattern)?;
    }
    writeln!(output, "(Showed {} out of {})", shown, patterns.len())
}

pub fn read_patterns<R: BufRead>(reader: R) -> Result<BTreeSet<Vec<i64>>> {
    Ok(read_results(reader)?
        .into_iter()
        .map(|itemset| itemset.items)
        .collect())
}

pub fn read_patterns_file<P: AsRef<Path>>(path: P) -> Result<BTreeSet<Vec<i64>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| Error::open(path, err))?;
    read_patterns(BufReader::new(file))
}

pub fn compare(expected: &BTreeSet<Vec<i64>>, actual: &BTreeSet<Vec<i64>>) -> Comparison {
    Comparison {
        missed: expected.difference(actual).cloned().collect(),
        excess: actual.difference(expected).cloned().collect(),
    }
}

pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(expected: P, actual: Q) -> Result<Comparison> {
    Ok(compare(
        &read_patterns_file(expected)?,
        &read_patterns_file(actual)?,
    ))
}
