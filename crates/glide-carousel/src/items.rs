/// Ordered items shown by the carousel. Only length and order matter to the
/// state machine; content is produced by the host's render callback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemSet<T> {
    items: Vec<T>,
}

/// One rendered item with its position flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSlot<R> {
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub is_active: bool,
    pub content: R,
}

impl<T> ItemSet<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `render` once per item, in order.
    pub fn render_with<R>(
        &self,
        active_index: usize,
        mut render: impl FnMut(&T) -> R,
    ) -> Vec<ItemSlot<R>> {
        let last = self.items.len().saturating_sub(1);
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemSlot {
                index,
                is_first: index == 0,
                is_last: index == last,
                is_active: index == active_index,
                content: render(item),
            })
            .collect()
    }
}

impl<T> From<Vec<T>> for ItemSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ItemSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
