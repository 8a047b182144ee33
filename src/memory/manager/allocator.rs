/*!
 * Memory Allocator Implementation
 * Victim selection, block splitting, allocation and deallocation
 */

use super::super::policy::Policy;
use super::super::types::{Block, MemoryError, MemoryResult};
use super::block_list::BlockList;
use crate::core::types::{Pid, Size};
use log::{debug, info, warn};

/// Reinsert a free block using the policy's ordering discipline
pub(super) fn insert_free(free_list: &mut BlockList, block: Block, policy: Policy) {
    debug_assert!(block.is_free());
    match policy {
        Policy::Fifo => free_list.insert_back(block),
        Policy::BestFit => free_list.insert_ascending_by_size(block),
        Policy::WorstFit => free_list.insert_descending_by_size(block),
    }
}

/// Pick the free block that satisfies `size` under `policy`
///
/// Single scan. Best and worst fit only replace the incumbent on a strictly
/// better difference, so the first-encountered block wins ties.
pub fn select_victim(free_list: &BlockList, size: Size, policy: Policy) -> Option<usize> {
    let mut candidates = free_list
        .iter()
        .enumerate()
        .filter(|(_, b)| b.size() >= size)
        .map(|(idx, b)| (idx, b.size() - size));

    match policy {
        Policy::Fifo => candidates.next().map(|(idx, _)| idx),
        Policy::BestFit => candidates
            .fold(None, |best: Option<(usize, Size)>, (idx, diff)| match best {
                Some((_, best_diff)) if diff >= best_diff => best,
                _ => Some((idx, diff)),
            })
            .map(|(idx, _)| idx),
        Policy::WorstFit => candidates
            .fold(None, |worst: Option<(usize, Size)>, (idx, diff)| match worst {
                Some((_, worst_diff)) if diff <= worst_diff => worst,
                _ => Some((idx, diff)),
            })
            .map(|(idx, _)| idx),
    }
}

/// Allocate `size` units to `pid` from the free list
///
/// On success the allocated block lands in `alloc_list` in address order and
/// any leftover fragment goes back to `free_list` under `policy`. On failure
/// neither list is touched.
pub fn allocate(
    free_list: &mut BlockList,
    alloc_list: &mut BlockList,
    pid: Pid,
    size: Size,
    policy: Policy,
) -> MemoryResult<()> {
    if pid == 0 || size == 0 {
        warn!("Rejected allocation request: pid {} size {}", pid, size);
        return Err(MemoryError::InvalidRequest { pid, size });
    }

    let Some(idx) = select_victim(free_list, size, policy) else {
        warn!(
            "OOM: PID {} requested {} units, no free block large enough ({} free blocks, {} units free)",
            pid,
            size,
            free_list.len(),
            free_list.total_size()
        );
        return Err(MemoryError::OutOfMemory(size));
    };

    let victim = free_list
        .remove(idx)
        .ok_or_else(|| MemoryError::Corrupted(format!("victim index {} vanished", idx)))?;
    debug!(
        "{} selected free block {} (index {}) for {} units",
        policy, victim, idx, size
    );

    let allocated = Block::with_size(pid, victim.start, size);
    alloc_list.insert_ascending_by_address(allocated);

    let remaining = victim.size() - size;
    if remaining > 0 {
        let fragment = Block::free(allocated.end + 1, victim.end);
        insert_free(free_list, fragment, policy);
        info!(
            "Split block [{}, {}]: {} units to PID {}, fragment {} returned to free list",
            victim.start, victim.end, size, pid, fragment
        );
    } else {
        info!(
            "Block [{}, {}] fully consumed by PID {}",
            victim.start, victim.end, pid
        );
    }

    Ok(())
}

/// Return the first block owned by `pid` to the free list
pub fn deallocate(
    alloc_list: &mut BlockList,
    free_list: &mut BlockList,
    pid: Pid,
    policy: Policy,
) -> MemoryResult<()> {
    let Some(idx) = alloc_list.position(|b| b.owner == pid) else {
        warn!("Attempted to deallocate memory of PID {} which holds none", pid);
        return Err(MemoryError::NotFound(pid));
    };

    let mut block = alloc_list
        .remove(idx)
        .ok_or_else(|| MemoryError::Corrupted(format!("allocated index {} vanished", idx)))?;
    block.release();
    info!(
        "Deallocated [{}, {}] ({} units) from PID {}",
        block.start,
        block.end,
        block.size(),
        pid
    );
    insert_free(free_list, block, policy);

    Ok(())
}
