/*!
 * MMU Simulator - Main Entry Point
 *
 * Usage: mmu [OPTIONS] <input file> -{F | B | W}
 *
 * Replays an event script against a contiguous partition and prints the free
 * and allocated lists after every event.
 */

use std::io;

use mmu_sim::simulation::{self, help_text};
use mmu_sim::{init_tracing, Config, ConfigAction};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = match Config::from_args(std::env::args().skip(1))? {
        ConfigAction::Help => {
            println!("{}", help_text());
            return Ok(());
        }
        ConfigAction::Run(config) => config,
    };

    info!(
        script = %config.script_path.display(),
        policy = %config.policy,
        "Starting simulation"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = simulation::run(&config, &mut out)?;

    info!(
        steps = summary.steps,
        failed = summary.failed,
        usage_pct = summary.stats.usage_percentage(),
        "Simulation complete"
    );

    Ok(())
}
