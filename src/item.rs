/// Dense item id. Ids are handed out by the `Itemizer` starting at 1; id 0 is
/// the null item. After a database is loaded, item order matches the numeric
/// order of the labels the items were read from.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
}
