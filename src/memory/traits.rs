/*!
 * Memory Traits
 * Partition management abstractions
 */

use super::types::*;
use crate::core::types::{Pid, Size};

/// Partition allocator interface
pub trait Allocator {
    /// Allocate `size` units for a process
    fn allocate(&mut self, pid: Pid, size: Size) -> MemoryResult<()>;

    /// Return the memory held by a process to the free pool
    fn deallocate(&mut self, pid: Pid) -> MemoryResult<()>;

    /// Merge adjacent free blocks
    fn coalesce(&mut self);
}

/// Memory state provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Free list in list order
    fn free_entries(&self) -> Vec<BlockEntry>;

    /// Allocated list in address order
    fn alloc_entries(&self) -> Vec<BlockEntry>;

    /// Verify list invariants
    fn check_invariants(&self) -> MemoryResult<()>;
}

/// Everything the simulation driver needs from a memory manager
pub trait PartitionManager: Allocator + MemoryInfo {}

impl<T> PartitionManager for T where T: Allocator + MemoryInfo {}
