use std::collections::{BTreeMap, BTreeSet};

use fim::{mine_database, Algorithm, Database, FrequentItemset};
use itertools::Itertools;
use proptest::prelude::*;

fn arb_transactions() -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(-4i64..4, 0..6), 0..24)
}

fn mined(db: &Database, min_frequency: f64, algorithm: Algorithm) -> BTreeMap<Vec<i64>, f64> {
    mine_database(db, min_frequency, algorithm)
        .unwrap()
        .into_iter()
        .map(|FrequentItemset { items, support }| (items, support))
        .collect()
}

fn count_containing(transactions: &[Vec<i64>], itemset: &[i64]) -> usize {
    transactions
        .iter()
        .filter(|t| itemset.iter().all(|item| t.contains(item)))
        .count()
}

proptest! {
    #[test]
    fn prop_strategies_agree(transactions in arb_transactions(), min_frequency in 0.05f64..1.0) {
        let db = Database::from_transactions(&transactions);
        let eclat = mine_database(&db, min_frequency, Algorithm::Eclat).unwrap();
        let apriori = mine_database(&db, min_frequency, Algorithm::Apriori).unwrap();
        let unpruned = mine_database(&db, min_frequency, Algorithm::AprioriNoPruning).unwrap();
        prop_assert_eq!(&eclat, &apriori);
        prop_assert_eq!(&eclat, &unpruned);
    }

    #[test]
    fn prop_output_is_canonical(transactions in arb_transactions(), min_frequency in 0.05f64..1.0) {
        let db = Database::from_transactions(&transactions);
        let itemsets = mine_database(&db, min_frequency, Algorithm::Eclat).unwrap();
        for itemset in &itemsets {
            prop_assert!(itemset.items.windows(2).all(|w| w[0] < w[1]));
        }
        for pair in itemsets.windows(2) {
            prop_assert!(pair[0].items < pair[1].items);
        }
    }

    #[test]
    fn prop_downward_closed(transactions in arb_transactions(), min_frequency in 0.05f64..1.0) {
        let db = Database::from_transactions(&transactions);
        let found = mined(&db, min_frequency, Algorithm::Apriori);
        for itemset in found.keys().filter(|s| s.len() > 1) {
            for subset in itemset.iter().cloned().powerset() {
                if !subset.is_empty() && subset.len() < itemset.len() {
                    prop_assert!(found.contains_key(&subset), "{:?} missing subset {:?}", itemset, subset);
                }
            }
        }
    }

    #[test]
    fn prop_supports_match_linear_scan(transactions in arb_transactions(), min_frequency in 0.05f64..1.0) {
        let db = Database::from_transactions(&transactions);
        let non_empty: Vec<Vec<i64>> = transactions.iter().filter(|t| !t.is_empty()).cloned().collect();
        for (items, support) in mined(&db, min_frequency, Algorithm::Eclat) {
            let count = count_containing(&non_empty, &items);
            prop_assert_eq!(support, count as f64 / non_empty.len() as f64);
        }
    }

    #[test]
    fn prop_complete(transactions in arb_transactions(), min_frequency in 0.05f64..1.0) {
        let db = Database::from_transactions(&transactions);
        let non_empty: Vec<Vec<i64>> = transactions.iter().filter(|t| !t.is_empty()).cloned().collect();
        let found = mined(&db, min_frequency, Algorithm::Eclat);
        let min_count = min_frequency * non_empty.len() as f64;
        for subset in (-4i64..4).powerset().filter(|s| !s.is_empty()) {
            let count = count_containing(&non_empty, &subset) as f64;
            // Stay clear of thresholds that land within rounding error of a count.
            if (count - min_count).abs() < 1e-6 {
                continue;
            }
            prop_assert_eq!(found.contains_key(&subset), count > 0.0 && count > min_count);
        }
    }

    #[test]
    fn prop_monotone_in_threshold(
        transactions in arb_transactions(),
        low in 0.05f64..1.0,
        high in 0.05f64..1.0,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let db = Database::from_transactions(&transactions);
        let at_low: BTreeSet<Vec<i64>> = mined(&db, low, Algorithm::Eclat).into_keys().collect();
        let at_high: BTreeSet<Vec<i64>> = mined(&db, high, Algorithm::AprioriNoPruning).into_keys().collect();
        prop_assert!(at_high.is_subset(&at_low));
    }
}
