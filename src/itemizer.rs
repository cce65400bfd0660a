use fnv::FnvHashMap;

use crate::item::Item;

/// Maps the integer labels found in a dataset to dense `Item` ids.
pub struct Itemizer {
    next_item_id: u32,
    label_to_id: FnvHashMap<i64, Item>,
    id_to_label: Vec<i64>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            label_to_id: FnvHashMap::default(),
            id_to_label: vec![],
        }
    }
    pub fn id_of(&mut self, label: i64) -> Item {
        if let Some(id) = self.label_to_id.get(&label) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.label_to_id.insert(label, Item::with_id(id));
        self.id_to_label.push(label);
        debug_assert_eq!(self.id_to_label.len(), id as usize);
        Item::with_id(id)
    }
    pub fn get(&self, label: i64) -> Option<Item> {
        self.label_to_id.get(&label).cloned()
    }
    pub fn label_of(&self, item: Item) -> i64 {
        self.id_to_label[item.as_index() - 1]
    }
    pub fn labels_of(&self, items: &[Item]) -> Vec<i64> {
        items.iter().map(|&item| self.label_of(item)).collect()
    }
    pub fn len(&self) -> usize {
        self.id_to_label.len()
    }
    pub fn is_empty(&self) -> bool {
        self.id_to_label.is_empty()
    }

    // Renumbers items so that id order matches label order. Returns a table
    // indexed by old id holding the new item.
    pub fn reorder_sorted(&mut self) -> Vec<Item> {
        self.id_to_label.sort();
        let mut remap = vec![Item::null(); self.id_to_label.len() + 1];
        for (index, &label) in self.id_to_label.iter().enumerate() {
            let new_id = Item::with_id((index + 1) as u32);
            let old_id = self.label_to_id[&label];
            remap[old_id.as_index()] = new_id;
            self.label_to_id.insert(label, new_id);
        }
        remap
    }
}

impl Default for Itemizer {
    fn default() -> Itemizer {
        Itemizer::new()
    }
}
