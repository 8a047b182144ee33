/*!
 * Block List
 * Ordered sequence of blocks backing both the free and allocated lists
 */

use super::super::types::{Block, BlockEntry};
use crate::core::types::Size;
use std::collections::VecDeque;

/// Ordered block sequence
///
/// The list owns its blocks; moving a block to another list means removing it
/// here and inserting the returned value there. Insertions are linear scans,
/// which is fine for the handful of blocks a simulated partition holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: VecDeque<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self {
            blocks: VecDeque::new(),
        }
    }

    pub fn insert_front(&mut self, block: Block) {
        self.blocks.push_front(block);
    }

    pub fn insert_back(&mut self, block: Block) {
        self.blocks.push_back(block);
    }

    /// Keep the list sorted by start address
    pub fn insert_ascending_by_address(&mut self, block: Block) {
        self.insert_before_first(block, |existing, new| existing.start > new.start);
    }

    /// Keep the list sorted by size, smallest first
    /// Equal sizes keep discovery order: the new block lands after them.
    pub fn insert_ascending_by_size(&mut self, block: Block) {
        self.insert_before_first(block, |existing, new| existing.size() > new.size());
    }

    /// Keep the list sorted by size, largest first
    /// Equal sizes keep discovery order: the new block lands after them.
    pub fn insert_descending_by_size(&mut self, block: Block) {
        self.insert_before_first(block, |existing, new| existing.size() < new.size());
    }

    fn insert_before_first<F>(&mut self, block: Block, new_goes_before: F)
    where
        F: Fn(&Block, &Block) -> bool,
    {
        let idx = self
            .blocks
            .iter()
            .position(|existing| new_goes_before(existing, &block))
            .unwrap_or(self.blocks.len());
        self.blocks.insert(idx, block);
    }

    pub fn remove_front(&mut self) -> Option<Block> {
        self.blocks.pop_front()
    }

    /// Remove the block at `index`, `None` when out of range
    pub fn remove(&mut self, index: usize) -> Option<Block> {
        self.blocks.remove(index)
    }

    /// Position of the first block matching `pred`
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&Block) -> bool,
    {
        self.blocks.iter().position(pred)
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub(super) fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    /// Sum of all block sizes
    pub fn total_size(&self) -> Size {
        self.blocks.iter().map(Block::size).sum()
    }

    /// Indexed view for printing
    pub fn entries(&self) -> Vec<BlockEntry> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(index, b)| BlockEntry {
                index,
                start: b.start,
                end: b.end,
                owner: b.owner_pid(),
            })
            .collect()
    }
}

impl FromIterator<Block> for BlockList {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::collections::vec_deque::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
