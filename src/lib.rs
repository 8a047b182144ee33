/*!
 * MMU Simulator Library
 * Contiguous partition allocation under first, best and worst fit
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod simulation;

// Re-exports
pub use crate::core::errors::{SimulationError, SimulationResult};
pub use crate::core::types::{Address, Pid, Size};
pub use memory::{
    Block, BlockEntry, BlockList, MemoryError, MemoryManager, MemoryResult, MemoryStats, Policy,
};
pub use monitoring::init_tracing;
pub use simulation::{Config, ConfigAction, Event, Script, Simulator, StepReport};
