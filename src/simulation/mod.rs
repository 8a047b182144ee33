/*!
 * Simulation Module
 * Script parsing, configuration, the step loop and rendering
 */

pub mod config;
pub mod driver;
pub mod render;
pub mod script;

pub use config::{help_text, Config, ConfigAction, OutputFormat};
pub use driver::{apply_event, execute_step, snapshot, RunSummary, Simulator, StepReport};
pub use render::{render, render_json, render_list, render_text};
pub use script::{Event, Script};

use crate::core::errors::SimulationResult;
use std::io::Write;

/// Load the configured script, run it and write every step to `out`
pub fn run<W: Write>(config: &Config, out: &mut W) -> SimulationResult<RunSummary> {
    let script = Script::from_file(&config.script_path)?;
    let mut simulator = Simulator::new(script, config.policy)?.with_invariant_checks(config.check);
    let summary = simulator.run_with(|report| render(out, report, config.output))?;
    out.flush()?;
    Ok(summary)
}
