use std::cmp;

use crate::database::Database;
use crate::item::Item;
use crate::support::support;

/// An itemset as produced by the mining engines: sorted dense items plus the
/// number of transactions containing them.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub count: usize,
}

impl ItemSet {
    pub fn new(mut items: Vec<Item>, count: usize) -> ItemSet {
        items.sort();
        ItemSet { items, count }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> cmp::Ordering {
        self.items
            .cmp(&other.items)
            .then(self.count.cmp(&other.count))
    }
}

/// A frequent itemset in terms of the dataset's own labels, sorted ascending,
/// with its relative support.
#[derive(Clone, PartialEq, Debug)]
pub struct FrequentItemset {
    pub items: Vec<i64>,
    pub support: f64,
}

impl FrequentItemset {
    pub fn new(mut items: Vec<i64>, support: f64) -> FrequentItemset {
        items.sort();
        FrequentItemset { items, support }
    }

    pub fn from_itemset(itemset: &ItemSet, database: &Database) -> FrequentItemset {
        FrequentItemset::new(
            database.labels_of(&itemset.items),
            support(itemset.count, database.num_transactions()),
        )
    }
}

/// Canonical result order: lexicographic over the sorted labels.
pub fn sort_canonical(itemsets: &mut [FrequentItemset]) {
    itemsets.sort_by(|a, b| a.items.cmp(&b.items));
}

#[cfg(test)]
mod tests {
    use super::{sort_canonical, FrequentItemset, ItemSet};
    use crate::database::Database;
    use crate::item::Item;

    #[test]
    fn test_itemset_order() {
        let a = ItemSet::new(vec![Item::with_id(2), Item::with_id(1)], 3);
        let b = ItemSet::new(vec![Item::with_id(1), Item::with_id(3)], 1);
        let c = ItemSet::new(vec![Item::with_id(1)], 5);
        assert_eq!(a.items, vec![Item::with_id(1), Item::with_id(2)]);
        let mut v = vec![b.clone(), a.clone(), c.clone()];
        v.sort();
        assert_eq!(v, vec![c, a, b]);
    }

    #[test]
    fn test_from_itemset_uses_labels() {
        let db = Database::from_transactions(&[vec![10, 200], vec![10], vec![3, 200, 10], vec![3]]);
        let items = db.items_of(&[200, 10]).unwrap();
        let frequent = FrequentItemset::from_itemset(&ItemSet::new(items, 2), &db);
        assert_eq!(frequent, FrequentItemset::new(vec![10, 200], 0.5));
    }

    #[test]
    fn test_sort_canonical_is_numeric() {
        let mut v = vec![
            FrequentItemset::new(vec![10], 0.5),
            FrequentItemset::new(vec![9, 10], 0.25),
            FrequentItemset::new(vec![9], 0.5),
            FrequentItemset::new(vec![2, 100], 0.25),
        ];
        sort_canonical(&mut v);
        let order: Vec<Vec<i64>> = v.into_iter().map(|f| f.items).collect();
        assert_eq!(order, vec![vec![2, 100], vec![9], vec![9, 10], vec![10]]);
    }
}
