/*!
 * Memory Statistics and Auditing
 * Usage figures and list invariant checks
 */

use super::super::types::{Block, MemoryError, MemoryResult, MemoryStats};
use super::MemoryManager;
use crate::core::types::Address;

impl MemoryManager {
    pub fn stats(&self) -> MemoryStats {
        let free = self.free_list.total_size();
        let used = self.alloc_list.total_size();
        let largest_free_block = self
            .free_list
            .iter()
            .map(Block::size)
            .max()
            .unwrap_or(0);

        let fragmentation = if free == 0 {
            0.0
        } else {
            1.0 - largest_free_block as f64 / free as f64
        };

        MemoryStats {
            partition_size: self.partition_size,
            used,
            free,
            allocated_blocks: self.alloc_list.len(),
            free_blocks: self.free_list.len(),
            largest_free_block,
            fragmentation,
        }
    }

    /// Audit both lists
    ///
    /// Checks owner tags, allocated-list address order, and that free and
    /// allocated blocks together tile the partition exactly.
    pub fn check_invariants(&self) -> MemoryResult<()> {
        if let Some(b) = self.free_list.iter().find(|b| !b.is_free()) {
            return Err(MemoryError::Corrupted(format!(
                "owned block {} in free list",
                b
            )));
        }
        if let Some(b) = self.alloc_list.iter().find(|b| b.is_free()) {
            return Err(MemoryError::Corrupted(format!(
                "free block {} in allocated list",
                b
            )));
        }
        if let Some(b) = self
            .free_list
            .iter()
            .chain(self.alloc_list.iter())
            .find(|b| b.start > b.end)
        {
            return Err(MemoryError::Corrupted(format!("inverted block {}", b)));
        }

        let unordered = self
            .alloc_list
            .iter()
            .zip(self.alloc_list.iter().skip(1))
            .find(|(a, b)| a.start >= b.start);
        if let Some((a, b)) = unordered {
            return Err(MemoryError::Corrupted(format!(
                "allocated list out of order: {} before {}",
                a, b
            )));
        }

        let mut all: Vec<&Block> = self
            .free_list
            .iter()
            .chain(self.alloc_list.iter())
            .collect();
        all.sort_by_key(|b| b.start);

        let mut expected: Address = 0;
        for block in all {
            if block.start != expected {
                let kind = if block.start > expected { "gap" } else { "overlap" };
                return Err(MemoryError::Corrupted(format!(
                    "{} at address {} (next block {})",
                    kind, expected, block
                )));
            }
            expected = block.end + 1;
        }
        if expected != self.partition_size {
            return Err(MemoryError::Corrupted(format!(
                "blocks cover [0, {}) but partition holds {} units",
                expected, self.partition_size
            )));
        }

        Ok(())
    }
}
