/*!
 * Coalescing Tests
 * Address-order rebuild and merging of adjacent free blocks
 */

use mmu_sim::memory::manager::{coalesce, BlockList};
use mmu_sim::memory::{Block, MemoryManager, Policy};
use pretty_assertions::assert_eq;

fn spans(list: &BlockList) -> Vec<(usize, usize)> {
    list.iter().map(|b| (b.start, b.end)).collect()
}

#[test]
fn test_non_adjacent_blocks_stay_separate() {
    let free: BlockList = [Block::free(60, 99), Block::free(0, 39)].into_iter().collect();
    assert_eq!(spans(&coalesce(free)), vec![(0, 39), (60, 99)]);
}

#[test]
fn test_long_run_collapses_in_one_pass() {
    let free: BlockList = [
        Block::free(30, 39),
        Block::free(10, 19),
        Block::free(40, 49),
        Block::free(0, 9),
        Block::free(20, 29),
    ]
    .into_iter()
    .collect();

    assert_eq!(spans(&coalesce(free)), vec![(0, 49)]);
}

#[test]
fn test_mixed_runs() {
    let free: BlockList = [
        Block::free(90, 99),
        Block::free(5, 9),
        Block::free(50, 59),
        Block::free(0, 4),
        Block::free(60, 64),
    ]
    .into_iter()
    .collect();

    assert_eq!(spans(&coalesce(free)), vec![(0, 9), (50, 64), (90, 99)]);
}

#[test]
fn test_no_adjacent_free_blocks_after_coalesce() {
    let mut mm = MemoryManager::new(100, Policy::BestFit).unwrap();
    for pid in 1..=10 {
        mm.allocate(pid, 10).unwrap();
    }
    for pid in [2, 3, 4, 7, 8, 10] {
        mm.deallocate(pid).unwrap();
    }

    mm.coalesce();

    let free: Vec<_> = mm.free_list().iter().copied().collect();
    assert!(free.windows(2).all(|w| !w[0].is_adjacent_to(&w[1])));
    assert_eq!(
        spans(mm.free_list()),
        vec![(10, 39), (60, 79), (90, 99)]
    );
    assert!(mm.check_invariants().is_ok());
}

#[test]
fn test_allocated_list_untouched() {
    let mut mm = MemoryManager::new(40, Policy::Fifo).unwrap();
    mm.allocate(1, 10).unwrap();
    mm.allocate(2, 10).unwrap();
    mm.allocate(3, 10).unwrap();
    mm.deallocate(2).unwrap();
    let before = mm.alloc_list().clone();

    mm.coalesce();
    assert_eq!(mm.alloc_list(), &before);
}
