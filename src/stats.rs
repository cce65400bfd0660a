use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::database::Database;
use crate::error::Result;

/// Size of one dataset file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetSummary {
    pub database: String,
    pub items: usize,
    pub transactions: usize,
}

pub fn summarize<P: AsRef<Path>>(path: P) -> Result<DatasetSummary> {
    let path = path.as_ref();
    let database = Database::load(path)?;
    Ok(DatasetSummary {
        database: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        items: database.num_items(),
        transactions: database.num_transactions(),
    })
}

/// Loads the datasets in parallel. Summaries keep the order of `paths`.
pub fn summarize_all(paths: &[PathBuf]) -> Result<Vec<DatasetSummary>> {
    paths.par_iter().map(summarize).collect()
}

pub fn write_csv<W: Write>(output: W, summaries: &[DatasetSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(&["database", "items", "transactions"])?;
    for summary in summaries {
        writer.write_record(&[
            summary.database.clone(),
            summary.items.to_string(),
            summary.transactions.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
