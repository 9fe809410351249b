use color_eyre::eyre::{eyre, Result};

/// Cyclic index over a fixed, non-empty list
///
/// The list never changes after construction, so `index` is always a valid
/// position into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> RotationState<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self> {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(eyre!("a rotation needs at least one item"));
        }
        Ok(Self { items, index: 0 })
    }

    /// Move to the next item, wrapping at the end
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> &T {
        &self.items[self.index]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
