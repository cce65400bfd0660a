//! Frequent itemset mining.
//!
//! Given a file of transactions (one per line, whitespace separated integer
//! items) and a minimum frequency, finds every itemset contained in at least
//! that fraction of the transactions. Three strategies are available and
//! return identical results: level-wise Apriori with and without subset
//! pruning, and depth-first Eclat over tid lists.
//!
//! ```no_run
//! use fim::{mine, Algorithm};
//!
//! for itemset in mine("toy.dat", 0.25, Algorithm::Eclat)? {
//!     println!("{}", fim::format::format_line(&itemset));
//! }
//! # Ok::<(), fim::Error>(())
//! ```

pub mod apriori;
pub mod benchmark;
pub mod checker;
pub mod database;
pub mod eclat;
pub mod error;
pub mod format;
pub mod index;
pub mod item;
pub mod item_counter;
pub mod itemizer;
pub mod itemset;
pub mod miner;
pub mod stats;
pub mod support;
pub mod transaction_reader;
pub mod vec_sets;

pub use database::Database;
pub use error::{Error, Result};
pub use itemset::FrequentItemset;
pub use miner::{mine, mine_database, Algorithm};
