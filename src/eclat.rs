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

use crate::index::VerticalIndex;
use crate::item::Item;
use crate::itemset::ItemSet;
use crate::support::MinSupport;
use crate::vec_sets::intersection;

// Conditional database of a prefix: each candidate extension with the tids
// of the transactions containing both the prefix and the extension.
type Extensions = Vec<(Item, Vec<usize>)>;

/// Depth-first frequent itemset search over the vertical index. Each prefix
/// is only extended with items greater than its own, so every itemset is
/// visited once.
pub fn eclat(index: &VerticalIndex, min_support: &MinSupport) -> Vec<ItemSet> {
    let root: Extensions = index
        .items()
        .into_iter()
        .map(|item| (item, index.tids(item).to_vec()))
        .collect();
    extend(&[], &root, min_support)
}

fn extend(prefix: &[Item], extensions: &[(Item, Vec<usize>)], min_support: &MinSupport) -> Vec<ItemSet> {
    let mut itemsets: Vec<ItemSet> = vec![];
    for (position, (item, tids)) in extensions.iter().enumerate() {
        // Already restricted to the prefix's transactions.
        if !min_support.is_frequent(tids.len()) {
            continue;
        }
        let mut itemset: Vec<Item> = Vec::with_capacity(prefix.len() + 1);
        itemset.extend_from_slice(prefix);
        itemset.push(*item);

        let conditional: Extensions = extensions[position + 1..]
            .iter()
            .filter_map(|(other, other_tids)| {
                let shared = intersection(tids, other_tids);
                if min_support.is_frequent(shared.len()) {
                    Some((*other, shared))
                } else {
                    None
                }
            })
            .collect();

        if !conditional.is_empty() {
            itemsets.extend(extend(&itemset, &conditional, min_support));
        }
        itemsets.push(ItemSet::new(itemset, tids.len()));
    }
    itemsets
}
