use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use tracing::info;

use crate::apriori::{apriori, Pruning};
use crate::database::Database;
use crate::eclat::eclat;
use crate::error::Result;
use crate::index::VerticalIndex;
use crate::itemset::{sort_canonical, FrequentItemset, ItemSet};
use crate::support::{check_min_frequency, MinSupport};

/// Mining strategy. All three produce the same itemsets and supports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Apriori,
    AprioriNoPruning,
    Eclat,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Eclat,
        Algorithm::Apriori,
        Algorithm::AprioriNoPruning,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Algorithm::Apriori => "apriori",
            Algorithm::AprioriNoPruning => "apriori-no-pruning",
            Algorithm::Eclat => "eclat",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Algorithm, String> {
        Algorithm::ALL
            .iter()
            .find(|algorithm| algorithm.name() == s)
            .cloned()
            .ok_or_else(|| format!("unknown algorithm {:?}", s))
    }
}

/// Loads the dataset at `path` and returns its frequent itemsets in canonical
/// order. The frequency is validated before the file is read.
pub fn mine<P: AsRef<Path>>(
    path: P,
    min_frequency: f64,
    algorithm: Algorithm,
) -> Result<Vec<FrequentItemset>> {
    check_min_frequency(min_frequency)?;
    let database = Database::load(path)?;
    mine_database(&database, min_frequency, algorithm)
}

pub fn mine_database(
    database: &Database,
    min_frequency: f64,
    algorithm: Algorithm,
) -> Result<Vec<FrequentItemset>> {
    let min_support = MinSupport::new(min_frequency, database.num_transactions())?;
    let timer = Instant::now();
    let itemsets: Vec<ItemSet> = match algorithm {
        Algorithm::Apriori => apriori(database, &min_support, Pruning::Enabled),
        Algorithm::AprioriNoPruning => apriori(database, &min_support, Pruning::Disabled),
        Algorithm::Eclat => eclat(&VerticalIndex::new(database), &min_support),
    };
    info!(
        %algorithm,
        min_frequency,
        min_count = min_support.min_count(),
        itemsets = itemsets.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "mining done"
    );

    let mut frequent: Vec<FrequentItemset> = itemsets
        .iter()
        .map(|itemset| FrequentItemset::from_itemset(itemset, database))
        .collect();
    sort_canonical(&mut frequent);
    Ok(frequent)
}
