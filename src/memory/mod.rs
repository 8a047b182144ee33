/*!
 * Memory Module
 * Partition allocation, deallocation and coalescing
 */

pub mod manager;
pub mod policy;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::{BlockList, MemoryManager};
pub use policy::Policy;
pub use traits::*;
pub use types::*;
