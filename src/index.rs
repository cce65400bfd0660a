use crate::database::Database;
use crate::item::Item;

/// Vertical layout of a database: for each item, the sorted ids of the
/// transactions containing it. Items that never occur have an empty list and
/// are not reported by `items()`.
pub struct VerticalIndex {
    index: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl VerticalIndex {
    pub fn new(database: &Database) -> VerticalIndex {
        let mut index = VerticalIndex {
            index: vec![vec![]; database.num_items() + 1],
            transaction_count: 0,
        };
        for transaction in database.transactions() {
            index.insert(transaction);
        }
        index
    }

    fn insert(&mut self, transaction: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for item in transaction {
            let item_index = item.as_index();
            if self.index.len() <= item_index {
                self.index.resize(item_index + 1, vec![]);
            }
            self.index[item_index].push(tid);
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.transaction_count
    }

    /// Items with a non-empty tid list, ascending.
    pub fn items(&self) -> Vec<Item> {
        (1..self.index.len())
            .filter(|&i| !self.index[i].is_empty())
            .map(|i| Item::with_id(i as u32))
            .collect()
    }

    pub fn tids(&self, item: Item) -> &[usize] {
        match self.index.get(item.as_index()) {
            Some(tids) => tids.as_slice(),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VerticalIndex;
    use crate::database::Database;
    use crate::item::Item;
    use crate::support::count_containing;
    use crate::vec_sets::intersection;

    #[test]
    fn test_index() {
        let db = Database::from_transactions(&[
            vec![1, 2, 3, 4, 5, 6],
            vec![7, 8, 9, 10, 11, 12],
            vec![26, 24],
            vec![26, 24],
            vec![26, 24, 25],
            vec![26, 24, 25, 9],
        ]);
        let index = VerticalIndex::new(&db);
        let tids = |label: i64| index.tids(db.itemizer().get(label).unwrap()).to_vec();

        assert_eq!(index.num_transactions(), 6);
        assert_eq!(index.items().len(), 15);
        for label in &[1, 2, 3, 4, 5, 6] {
            assert_eq!(tids(*label), vec![0]);
        }
        assert_eq!(tids(9), vec![1, 5]);
        assert_eq!(tids(24), vec![2, 3, 4, 5]);
        assert_eq!(tids(25), vec![4, 5]);
        assert_eq!(index.tids(Item::with_id(99)), &[] as &[usize]);
    }

    #[test]
    fn test_tid_lists_agree_with_scan() {
        let db = Database::from_transactions(&[vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]]);
        let index = VerticalIndex::new(&db);
        for item in index.items() {
            assert_eq!(index.tids(item).len(), count_containing(&db, &[item]));
        }
        let one = db.itemizer().get(1).unwrap();
        let two = db.itemizer().get(2).unwrap();
        let both = intersection(index.tids(one), index.tids(two));
        assert_eq!(both.len(), count_containing(&db, &[one, two]));
    }
}
