//! Field inventory list (`ZLIST`).

use std::collections::TryReserveError;

/// Tag under which a finished inventory is stored.
pub const INVENTORY_TAG: &str = "ZLIST";

const INITIAL_CAPACITY: usize = 4096;

/// Space separated list of the tags written during one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    tags: String,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory that already lists `tags`.
    #[must_use]
    pub fn with_tags(tags: &[&str]) -> Self {
        let mut inventory = Self::new();
        for tag in tags {
            inventory.push(tag);
        }
        inventory
    }

    pub fn push(&mut self, tag: &str) {
        if !self.tags.is_empty() {
            self.tags.push(' ');
        }
        self.tags.push_str(tag);
    }

    /// Append `tag`, doubling the buffer when it is full.
    ///
    /// Unlike [`Inventory::push`] an allocation failure is returned instead
    /// of aborting.
    pub fn try_push(&mut self, tag: &str) -> Result<(), TryReserveError> {
        let needed = self.tags.len() + 1 + tag.len();
        if needed > self.tags.capacity() {
            let target = (self.tags.capacity() * 2)
                .max(INITIAL_CAPACITY)
                .max(needed);
            self.tags.try_reserve_exact(target - self.tags.len())?;
        }
        self.push(tag);
        Ok(())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.split(' ').filter(|tag| !tag.is_empty())
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.iter().any(|listed| listed == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
