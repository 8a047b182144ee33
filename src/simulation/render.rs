/*!
 * Step Rendering
 * Text listing in the classic MMU layout, or JSON lines
 */

use super::config::OutputFormat;
use super::driver::StepReport;
use crate::core::errors::SimulationResult;
use crate::core::limits::STEP_BANNER;
use crate::memory::BlockEntry;
use std::io::Write;

/// Write one report in the requested format
pub fn render<W: Write>(out: &mut W, report: &StepReport, format: OutputFormat) -> SimulationResult<()> {
    match format {
        OutputFormat::Text => render_text(out, report)?,
        OutputFormat::Json => render_json(out, report)?,
    }
    Ok(())
}

pub fn render_text<W: Write>(out: &mut W, report: &StepReport) -> std::io::Result<()> {
    writeln!(out, "{}", STEP_BANNER)?;
    writeln!(out, "{}", report.event)?;
    if let Some(error) = &report.error {
        writeln!(out, "Error: {}", error)?;
    }
    writeln!(out, "{}", STEP_BANNER)?;
    render_list(out, &report.free, "Free Memory")?;
    render_list(out, &report.allocated, "\nAllocated Memory")?;
    writeln!(out, "\n")?;
    Ok(())
}

/// Block listing under a heading; the owner column only appears for owned blocks
pub fn render_list<W: Write>(out: &mut W, entries: &[BlockEntry], heading: &str) -> std::io::Result<()> {
    writeln!(out, "{}:", heading)?;
    for entry in entries {
        write!(
            out,
            "Block {}:\t START: {}\t END: {}",
            entry.index, entry.start, entry.end
        )?;
        match entry.owner {
            Some(pid) => writeln!(out, "\t PID: {}", pid)?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, report: &StepReport) -> SimulationResult<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
