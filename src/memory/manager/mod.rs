/*!
 * Memory Management
 *
 * Contiguous partition allocator with pluggable placement policy.
 *
 * ## Lists
 *
 * - **Free list**: unowned blocks. Order depends on the policy so each
 *   policy's next scan sees its preferred order first:
 *   - FIFO: fragments and freed blocks appended at the back
 *   - Best fit: ascending by size
 *   - Worst fit: descending by size
 * - **Allocated list**: owned blocks, always ascending by address
 *
 * Together the two lists tile `[0, partition_size - 1]` with no gaps or
 * overlaps between operations.
 *
 * ## Features
 *
 * - **Block splitting**: the unused tail of a chosen block becomes a fragment
 * - **Coalescing**: adjacent free blocks are merged on demand
 * - **Statistics**: usage and external fragmentation
 * - **Invariant checking**: tiling and ordering audit for tests and `--check`
 */

mod allocator;
mod block_list;
mod coalesce;
mod stats;

pub use allocator::{allocate, deallocate, select_victim};
pub use block_list::BlockList;
pub use coalesce::coalesce;

use super::policy::Policy;
use super::traits::{Allocator, MemoryInfo};
use super::types::{Block, BlockEntry, MemoryError, MemoryResult, MemoryStats};
use crate::core::types::{Pid, Size};
use log::info;

/// Memory manager for one simulated partition
#[derive(Debug, Clone)]
pub struct MemoryManager {
    partition_size: Size,
    policy: Policy,
    free_list: BlockList,
    alloc_list: BlockList,
}

impl MemoryManager {
    /// Seed the free list with one block covering the whole partition
    pub fn new(partition_size: Size, policy: Policy) -> MemoryResult<Self> {
        if partition_size == 0 {
            return Err(MemoryError::InvalidPartition(partition_size));
        }

        let mut free_list = BlockList::new();
        free_list.insert_front(Block::free(0, partition_size - 1));

        info!(
            "Memory manager initialized with {} units under {} policy",
            partition_size, policy
        );

        Ok(Self {
            partition_size,
            policy,
            free_list,
            alloc_list: BlockList::new(),
        })
    }

    pub fn allocate(&mut self, pid: Pid, size: Size) -> MemoryResult<()> {
        allocate(
            &mut self.free_list,
            &mut self.alloc_list,
            pid,
            size,
            self.policy,
        )
    }

    pub fn deallocate(&mut self, pid: Pid) -> MemoryResult<()> {
        deallocate(&mut self.alloc_list, &mut self.free_list, pid, self.policy)
    }

    pub fn coalesce(&mut self) {
        let free_list = std::mem::take(&mut self.free_list);
        self.free_list = coalesce(free_list);
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn partition_size(&self) -> Size {
        self.partition_size
    }

    pub fn free_list(&self) -> &BlockList {
        &self.free_list
    }

    pub fn alloc_list(&self) -> &BlockList {
        &self.alloc_list
    }

    pub fn free_entries(&self) -> Vec<BlockEntry> {
        self.free_list.entries()
    }

    pub fn alloc_entries(&self) -> Vec<BlockEntry> {
        self.alloc_list.entries()
    }
}

impl Allocator for MemoryManager {
    fn allocate(&mut self, pid: Pid, size: Size) -> MemoryResult<()> {
        MemoryManager::allocate(self, pid, size)
    }

    fn deallocate(&mut self, pid: Pid) -> MemoryResult<()> {
        MemoryManager::deallocate(self, pid)
    }

    fn coalesce(&mut self) {
        MemoryManager::coalesce(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn free_entries(&self) -> Vec<BlockEntry> {
        MemoryManager::free_entries(self)
    }

    fn alloc_entries(&self) -> Vec<BlockEntry> {
        MemoryManager::alloc_entries(self)
    }

    fn check_invariants(&self) -> MemoryResult<()> {
        MemoryManager::check_invariants(self)
    }
}
