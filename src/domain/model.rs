use crate::utils::error::{FlipError, Result};
use std::fmt;

/// Integers in input order, backed by a single storage block.
///
/// Only the first `len()` slots of the block are ever exposed; the rest is
/// spare capacity left behind by growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberList {
    storage: Box<[i32]>,
    len: usize,
}

impl NumberList {
    /// Allocates a block of exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            storage: allocate(capacity)?,
            len: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.len]
    }

    /// Stores `value` in the next free slot without growing.
    ///
    /// Returns `false` and leaves the list untouched when the block is full.
    pub fn push_within(&mut self, value: i32) -> bool {
        match self.storage.get_mut(self.len) {
            Some(slot) => {
                *slot = value;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Appends `value`, doubling the block first once the list holds
    /// `capacity - 1` values.
    pub fn push(&mut self, value: i32) -> Result<()> {
        if self.len + 1 >= self.capacity() {
            self.grow()?;
        }
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let next_capacity = self
            .capacity()
            .max(1)
            .checked_mul(2)
            .ok_or(FlipError::Allocation {
                requested: usize::MAX,
            })?;

        let mut next = allocate(next_capacity)?;
        next[..self.len].copy_from_slice(&self.storage[..self.len]);
        // the old block is dropped by the assignment
        self.storage = next;

        tracing::trace!(capacity = next_capacity, len = self.len, "storage grown");
        Ok(())
    }
}

fn allocate(len: usize) -> Result<Box<[i32]>> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(len)
        .map_err(|_| FlipError::Allocation { requested: len })?;
    block.resize(len, 0);
    Ok(block.into_boxed_slice())
}

/// Which reader builds the [`NumberList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReadStrategy {
    /// Count, rewind, then fill an exactly sized block.
    #[default]
    Presize,
    /// Single pass into a block that doubles when full.
    Growable,
}

impl fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStrategy::Presize => f.write_str("presize"),
            ReadStrategy::Growable => f.write_str("growable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub strategy: ReadStrategy,
    pub count: usize,
    pub capacity: usize,
}
