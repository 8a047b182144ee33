/*!
 * Simulation Driver
 * Feeds scripted events to the memory manager one at a time
 */

use super::script::{Event, Script};
use crate::core::errors::SimulationResult;
use crate::memory::{
    Allocator, BlockEntry, MemoryError, MemoryInfo, MemoryManager, MemoryResult, MemoryStats,
    PartitionManager, Policy,
};
use crate::monitoring::span_run;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// State of both lists after one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: usize,
    pub event: Event,
    /// Engine error for this event; the lists are unchanged when set
    pub error: Option<MemoryError>,
    pub free: Vec<BlockEntry>,
    pub allocated: Vec<BlockEntry>,
}

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Correlates the run with its log records
    pub run_id: String,
    pub steps: usize,
    pub failed: usize,
    pub stats: MemoryStats,
}

/// Dispatch one event to an allocator
pub fn apply_event<A: Allocator + ?Sized>(allocator: &mut A, event: Event) -> MemoryResult<()> {
    match event {
        Event::Allocate { pid, size } => allocator.allocate(pid, size),
        Event::Deallocate { pid } => allocator.deallocate(pid),
        Event::Coalesce => {
            allocator.coalesce();
            Ok(())
        }
    }
}

/// Capture a step report from any memory state provider
pub fn snapshot<M: MemoryInfo + ?Sized>(
    info: &M,
    step: usize,
    event: Event,
    error: Option<MemoryError>,
) -> StepReport {
    StepReport {
        step,
        event,
        error,
        free: info.free_entries(),
        allocated: info.alloc_entries(),
    }
}

/// Apply one event to a partition manager and report the resulting state
///
/// Engine errors are recorded in the report rather than returned.
pub fn execute_step<M: PartitionManager + ?Sized>(
    manager: &mut M,
    step: usize,
    event: Event,
) -> StepReport {
    let error = match apply_event(&mut *manager, event) {
        Ok(()) => None,
        Err(e) => {
            warn!(step, event = %event, error = %e, "event rejected");
            Some(e)
        }
    };
    snapshot(&*manager, step, event, error)
}

/// Runs a script against a fresh partition
#[derive(Debug, Clone)]
pub struct Simulator {
    manager: MemoryManager,
    events: Vec<Event>,
    check: bool,
}

impl Simulator {
    pub fn new(script: Script, policy: Policy) -> SimulationResult<Self> {
        let manager = MemoryManager::new(script.partition_size, policy)?;
        Ok(Self {
            manager,
            events: script.events,
            check: false,
        })
    }

    /// Audit list invariants after every step; a violation aborts the run
    pub fn with_invariant_checks(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn manager(&self) -> &MemoryManager {
        &self.manager
    }

    /// Apply one event and report the resulting state
    pub fn step(&mut self, step: usize, event: Event) -> SimulationResult<StepReport> {
        let report = execute_step(&mut self.manager, step, event);

        if self.check {
            self.manager.check_invariants()?;
        }

        Ok(report)
    }

    /// Run every event, handing each report to `sink`
    pub fn run_with<F>(&mut self, mut sink: F) -> SimulationResult<RunSummary>
    where
        F: FnMut(&StepReport) -> SimulationResult<()>,
    {
        let run_span = span_run(
            self.manager.policy(),
            self.manager.partition_size(),
            self.events.len(),
        );
        let _entered = run_span.enter();

        let mut failed = 0;
        for step in 0..self.events.len() {
            let event = self.events[step];
            let report = self.step(step, event)?;
            if report.error.is_some() {
                failed += 1;
            }
            sink(&report)?;
        }

        run_span.record_failures(failed);
        let stats = self.manager.stats();
        info!(
            run_id = run_span.run_id(),
            steps = self.events.len(),
            failed,
            used = stats.used,
            free = stats.free,
            free_blocks = stats.free_blocks,
            fragmentation = stats.fragmentation,
            "simulation finished"
        );

        Ok(RunSummary {
            run_id: run_span.run_id().to_string(),
            steps: self.events.len(),
            failed,
            stats,
        })
    }

    /// Run every event and collect the reports
    pub fn run(&mut self) -> SimulationResult<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.events.len());
        self.run_with(|report| {
            reports.push(report.clone());
            Ok(())
        })?;
        Ok(reports)
    }
}
