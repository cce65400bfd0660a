use crate::item::Item;

/// Item frequency table indexed by dense item id.
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counter: vec![] }
    }
    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }
    pub fn get(&self, item: &Item) -> u32 {
        let index = item.as_index();
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }
    // Ascending by item id.
    pub fn items_with_count_at_least(&self, min_count: usize) -> Vec<Item> {
        let mut v: Vec<Item> = vec![];
        for i in 1..self.counter.len() {
            if self.counter[i] as usize >= min_count {
                v.push(Item::with_id(i as u32));
            }
        }
        v
    }
}

impl Default for ItemCounter {
    fn default() -> ItemCounter {
        ItemCounter::new()
    }
}
