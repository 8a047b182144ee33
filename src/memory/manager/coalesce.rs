/*!
 * Free Block Coalescing
 * Merge physically adjacent free blocks to counter fragmentation
 */

use super::block_list::BlockList;
use log::info;

/// Rebuild the free list in address order and merge adjacent blocks
///
/// Runs of three or more adjacent blocks collapse in the single pass because
/// the merged block is checked again against its new right neighbour.
pub fn coalesce(mut free_list: BlockList) -> BlockList {
    let mut sorted = BlockList::new();
    while let Some(block) = free_list.remove_front() {
        sorted.insert_ascending_by_address(block);
    }

    let before = sorted.len();
    let mut i = 0;
    while i + 1 < sorted.len() {
        let adjacent = match (sorted.get(i), sorted.get(i + 1)) {
            (Some(current), Some(next)) => current.is_adjacent_to(next),
            _ => false,
        };

        if adjacent {
            if let Some(next) = sorted.remove(i + 1) {
                if let Some(current) = sorted.get_mut(i) {
                    current.end = next.end;
                }
            }
        } else {
            i += 1;
        }
    }

    if sorted.len() < before {
        info!(
            "Coalesced {} adjacent free blocks, reduced from {} to {} blocks",
            before - sorted.len(),
            before,
            sorted.len()
        );
    }

    sorted
}
