use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::item::Item;
use crate::item_counter::ItemCounter;
use crate::itemizer::Itemizer;
use crate::transaction_reader::{dedupe_sorted, TransactionReader};

/// An in-memory transaction database. Transaction ids are positions in
/// `transactions`, in file order. Each transaction is sorted ascending and
/// holds no duplicates.
pub struct Database {
    transactions: Vec<Vec<Item>>,
    itemizer: Itemizer,
    item_count: ItemCounter,
}

impl Database {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Database> {
        let path = path.as_ref();
        let timer = Instant::now();
        let file = File::open(path).map_err(|err| Error::open(path, err))?;
        let database = Database::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            transactions = database.num_transactions(),
            items = database.num_items(),
            elapsed_ms = timer.elapsed().as_millis() as u64,
            "loaded dataset"
        );
        Ok(database)
    }

    /// Parses every line before returning, so a malformed line yields an
    /// error and no database.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Database> {
        let mut itemizer = Itemizer::new();
        let transactions = TransactionReader::new(reader, &mut itemizer)
            .collect::<Result<Vec<Vec<Item>>>>()?;
        Ok(Database::build(transactions, itemizer))
    }

    /// Builds a database from label lists. Duplicate labels are merged and
    /// empty transactions are dropped, as blank lines are when reading.
    pub fn from_transactions(transactions: &[Vec<i64>]) -> Database {
        let mut itemizer = Itemizer::new();
        let transactions = transactions
            .iter()
            .map(|labels| {
                let mut items: Vec<Item> = labels.iter().map(|&l| itemizer.id_of(l)).collect();
                items.sort();
                dedupe_sorted(&mut items);
                items
            })
            .filter(|items| !items.is_empty())
            .collect();
        Database::build(transactions, itemizer)
    }

    // Item ids come out of the reader in first-seen order; renumber them so
    // that sorting by item sorts by label.
    fn build(mut transactions: Vec<Vec<Item>>, mut itemizer: Itemizer) -> Database {
        let remap = itemizer.reorder_sorted();
        let mut item_count = ItemCounter::new();
        for transaction in transactions.iter_mut() {
            for item in transaction.iter_mut() {
                *item = remap[item.as_index()];
                item_count.add(item, 1);
            }
            transaction.sort();
        }
        debug!(
            transactions = transactions.len(),
            items = itemizer.len(),
            "built transaction database"
        );
        Database {
            transactions,
            itemizer,
            item_count,
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn num_items(&self) -> usize {
        self.itemizer.len()
    }

    pub fn transactions(&self) -> &[Vec<Item>] {
        &self.transactions
    }

    pub fn item_count(&self) -> &ItemCounter {
        &self.item_count
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn labels_of(&self, items: &[Item]) -> Vec<i64> {
        self.itemizer.labels_of(items)
    }

    /// Converts labels to items. None if any label never occurs.
    pub fn items_of(&self, labels: &[i64]) -> Option<Vec<Item>> {
        let mut items = labels
            .iter()
            .map(|&label| self.itemizer.get(label))
            .collect::<Option<Vec<Item>>>()?;
        items.sort();
        dedupe_sorted(&mut items);
        Some(items)
    }
}
