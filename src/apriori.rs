// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Instant;

use fnv::FnvHashSet;
use itertools::Itertools;
use tracing::debug;

use crate::database::Database;
use crate::item::Item;
use crate::itemset::ItemSet;
use crate::support::{count_containing, MinSupport};
use crate::vec_sets::union;

/// Whether candidates with an infrequent subset are discarded before their
/// support is counted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pruning {
    Enabled,
    Disabled,
}

/// Level-wise frequent itemset search. Level k+1 candidates are joined from
/// the frequent k-itemsets, then counted with a full scan of the database.
pub fn apriori(database: &Database, min_support: &MinSupport, pruning: Pruning) -> Vec<ItemSet> {
    let mut itemsets: Vec<ItemSet> = vec![];

    // Level 1 comes straight from the item counts.
    let mut frequent: Vec<Vec<Item>> = database
        .item_count()
        .items_with_count_at_least(min_support.min_count())
        .into_iter()
        .map(|item| vec![item])
        .collect();
    for itemset in &frequent {
        let count = database.item_count().get(&itemset[0]) as usize;
        itemsets.push(ItemSet::new(itemset.clone(), count));
    }
    debug!(level = 1, frequent = frequent.len(), "apriori level done");

    let mut level = 1;
    while !frequent.is_empty() {
        level += 1;
        let timer = Instant::now();
        let candidates = generate_candidates(&frequent, pruning);
        let num_candidates = candidates.len();

        let mut next: Vec<Vec<Item>> = vec![];
        for candidate in candidates {
            let count = count_containing(database, &candidate);
            if min_support.is_frequent(count) {
                itemsets.push(ItemSet::new(candidate.clone(), count));
                next.push(candidate);
            }
        }
        debug!(
            level,
            candidates = num_candidates,
            frequent = next.len(),
            elapsed_ms = timer.elapsed().as_millis() as u64,
            "apriori level done"
        );
        frequent = next;
    }

    itemsets
}

// Joins every pair of frequent k-itemsets whose union has k+1 items. With
// pruning enabled, a candidate survives only if all of its k-subsets are
// frequent. Candidates are returned sorted.
fn generate_candidates(frequent: &[Vec<Item>], pruning: Pruning) -> Vec<Vec<Item>> {
    let k = match frequent.first() {
        Some(itemset) => itemset.len(),
        None => return vec![],
    };

    let mut candidates: FnvHashSet<Vec<Item>> = FnvHashSet::default();
    for (a, b) in frequent.iter().tuple_combinations() {
        let candidate = union(a, b);
        if candidate.len() == k + 1 {
            candidates.insert(candidate);
        }
    }

    let mut candidates: Vec<Vec<Item>> = match pruning {
        Pruning::Disabled => candidates.into_iter().collect(),
        Pruning::Enabled => {
            let frequent: FnvHashSet<&[Item]> = frequent.iter().map(|v| v.as_slice()).collect();
            candidates
                .into_iter()
                .filter(|candidate| {
                    candidate
                        .iter()
                        .cloned()
                        .combinations(k)
                        .all(|subset| frequent.contains(subset.as_slice()))
                })
                .collect()
        }
    };
    candidates.sort();
    candidates
}
