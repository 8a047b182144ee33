/*!
 * Memory Types
 * Common types for partition management
 */

use crate::core::types::{Address, Pid, Size, FREE_OWNER};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Every variant is recoverable at the event level: the lists are left exactly
/// as they were before the failing call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Out of memory: no free block can hold {0} units")]
    #[diagnostic(
        code(memory::out_of_memory),
        help("Free or coalesce blocks before retrying the allocation.")
    )]
    OutOfMemory(Size),

    #[error("Can't locate memory used by PID {0}")]
    #[diagnostic(
        code(memory::not_found),
        help("The process holds no allocated block. It may never have allocated or already freed it.")
    )]
    NotFound(Pid),

    #[error("Unknown memory management policy: {0}")]
    #[diagnostic(
        code(memory::invalid_policy),
        help("Use FIFO (first fit), BESTFIT or WORSTFIT.")
    )]
    InvalidPolicy(String),

    #[error("Invalid request: pid {pid}, size {size}")]
    #[diagnostic(
        code(memory::invalid_request),
        help("Allocations need a pid above 0 and a size above 0.")
    )]
    InvalidRequest { pid: Pid, size: Size },

    #[error("Invalid partition size: {0}")]
    #[diagnostic(
        code(memory::invalid_partition),
        help("The partition must hold at least one unit.")
    )]
    InvalidPartition(Size),

    #[error("Memory lists corrupted: {0}")]
    #[diagnostic(code(memory::corrupted))]
    Corrupted(String),
}

/// One contiguous region of the partition, `[start, end]` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub owner: Pid,
    pub start: Address,
    pub end: Address,
}

impl Block {
    pub fn new(owner: Pid, start: Address, end: Address) -> Self {
        debug_assert!(start <= end, "block [{}, {}] is inverted", start, end);
        Self { owner, start, end }
    }

    /// Unowned block spanning `[start, end]`
    pub fn free(start: Address, end: Address) -> Self {
        Self::new(FREE_OWNER, start, end)
    }

    /// Block of `size` units starting at `start`
    pub fn with_size(owner: Pid, start: Address, size: Size) -> Self {
        debug_assert!(size > 0);
        Self::new(owner, start, start + size - 1)
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner == FREE_OWNER
    }

    /// Owning pid, `None` for free blocks
    #[inline]
    pub fn owner_pid(&self) -> Option<Pid> {
        (!self.is_free()).then_some(self.owner)
    }

    /// True when `next` starts right after this block ends
    #[inline]
    pub fn is_adjacent_to(&self, next: &Block) -> bool {
        self.end + 1 == next.start
    }

    /// Hand the block back to the free pool
    pub fn release(&mut self) {
        self.owner = FREE_OWNER;
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.owner_pid() {
            Some(pid) => write!(f, "[{}, {}] pid {}", self.start, self.end, pid),
            None => write!(f, "[{}, {}] free", self.start, self.end),
        }
    }
}

/// Rendering view of one list element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    pub index: usize,
    pub start: Address,
    pub end: Address,
    pub owner: Option<Pid>,
}

/// Partition statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub partition_size: Size,
    pub used: Size,
    pub free: Size,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    /// Share of free space outside the largest free block (0.0 to 1.0)
    pub fragmentation: f64,
}

impl MemoryStats {
    pub fn usage_percentage(&self) -> f64 {
        if self.partition_size == 0 {
            return 0.0;
        }
        (self.used as f64 / self.partition_size as f64) * 100.0
    }
}
