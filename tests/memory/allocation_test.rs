/*!
 * Allocation Tests
 * Victim selection, splitting and out-of-memory handling per policy
 */

use mmu_sim::memory::manager::{allocate, BlockList};
use mmu_sim::memory::{Block, MemoryError, MemoryManager, Policy};
use pretty_assertions::assert_eq;

fn spans(list: &BlockList) -> Vec<(usize, usize)> {
    list.iter().map(|b| (b.start, b.end)).collect()
}

fn free_list(blocks: &[(usize, usize)]) -> BlockList {
    blocks.iter().map(|&(s, e)| Block::free(s, e)).collect()
}

#[test]
fn test_initial_partition() {
    let mm = MemoryManager::new(100, Policy::Fifo).unwrap();
    assert_eq!(spans(mm.free_list()), vec![(0, 99)]);
    assert!(mm.alloc_list().is_empty());
}

#[test]
fn test_zero_partition_rejected() {
    assert_eq!(
        MemoryManager::new(0, Policy::Fifo).unwrap_err(),
        MemoryError::InvalidPartition(0)
    );
}

#[test]
fn test_split_produces_contiguous_fragment() {
    for policy in Policy::ALL {
        let mut mm = MemoryManager::new(50, policy).unwrap();
        mm.allocate(7, 12).unwrap();

        let allocated: Vec<_> = mm.alloc_list().iter().copied().collect();
        assert_eq!(allocated, vec![Block::new(7, 0, 11)]);
        assert_eq!(spans(mm.free_list()), vec![(12, 49)]);
        assert_eq!(allocated[0].size() + mm.free_list().total_size(), 50);
    }
}

#[test]
fn test_exact_fit_consumes_block() {
    let mut free = free_list(&[(0, 9), (20, 29)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 3, 10, Policy::Fifo).unwrap();

    assert_eq!(spans(&free), vec![(20, 29)]);
    assert!(free.iter().all(|b| b.size() > 0));
    assert_eq!(spans(&alloc), vec![(0, 9)]);
}

#[test]
fn test_out_of_memory_leaves_lists_unchanged() {
    let mut mm = MemoryManager::new(10, Policy::Fifo).unwrap();
    let before = mm.clone();

    assert_eq!(mm.allocate(1, 20), Err(MemoryError::OutOfMemory(20)));
    assert_eq!(mm.free_list(), before.free_list());
    assert_eq!(mm.alloc_list(), before.alloc_list());
}

#[test]
fn test_fragmented_space_is_not_enough() {
    // 25 units end up free, but no single block of 12
    let mut mm = MemoryManager::new(30, Policy::WorstFit).unwrap();
    mm.allocate(1, 5).unwrap();
    mm.allocate(2, 10).unwrap();
    mm.allocate(3, 5).unwrap();
    mm.allocate(4, 10).unwrap();
    mm.deallocate(2).unwrap();
    mm.deallocate(4).unwrap();
    assert_eq!(mm.free_list().total_size(), 20);

    mm.deallocate(1).unwrap();
    assert_eq!(mm.allocate(5, 12), Err(MemoryError::OutOfMemory(12)));
}

#[test]
fn test_first_fit_fragment_goes_to_back() {
    let mut free = free_list(&[(0, 19), (50, 59)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 1, 5, Policy::Fifo).unwrap();
    assert_eq!(spans(&free), vec![(50, 59), (5, 19)]);
}

#[test]
fn test_best_fit_picks_smallest_sufficient() {
    let mut free = free_list(&[(0, 29), (40, 51), (60, 99)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 1, 10, Policy::BestFit).unwrap();
    assert_eq!(spans(&alloc), vec![(40, 49)]);
    // 2-unit fragment sorts ahead of the rest
    assert_eq!(spans(&free)[0], (50, 51));
}

#[test]
fn test_best_fit_tie_goes_to_first_encountered() {
    let mut free = free_list(&[(30, 39), (0, 9)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 1, 8, Policy::BestFit).unwrap();
    assert_eq!(spans(&alloc), vec![(30, 37)]);
}

#[test]
fn test_worst_fit_picks_largest() {
    let mut free = free_list(&[(0, 29), (40, 49), (60, 99)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 1, 10, Policy::WorstFit).unwrap();
    assert_eq!(spans(&alloc), vec![(60, 69)]);
    // 30-unit fragment ties with [0,29] and lands after it
    assert_eq!(spans(&free), vec![(0, 29), (70, 99), (40, 49)]);
}

#[test]
fn test_worst_fit_tie_goes_to_first_encountered() {
    let mut free = free_list(&[(50, 59), (0, 9)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 1, 4, Policy::WorstFit).unwrap();
    assert_eq!(spans(&alloc), vec![(50, 53)]);
}

#[test]
fn test_allocated_list_stays_address_ordered() {
    let mut free = free_list(&[(60, 99), (0, 19), (30, 49)]);
    let mut alloc = BlockList::new();
    allocate(&mut free, &mut alloc, 1, 30, Policy::Fifo).unwrap();
    allocate(&mut free, &mut alloc, 2, 15, Policy::Fifo).unwrap();
    allocate(&mut free, &mut alloc, 3, 10, Policy::Fifo).unwrap();

    let starts: Vec<_> = alloc.iter().map(|b| b.start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(alloc.len(), 3);
}
