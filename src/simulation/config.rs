/*!
 * Simulation Configuration
 * Command-line parsing for the `mmu` binary
 */

use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::USAGE;
use crate::memory::Policy;
use std::path::PathBuf;

/// How step reports are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Block listing in the classic MMU layout
    #[default]
    Text,
    /// One JSON step report per line
    Json,
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub script_path: PathBuf,
    pub policy: Policy,
    pub output: OutputFormat,
    /// Audit list invariants after every step
    pub check: bool,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Run(Config),
    Help,
}

impl Config {
    pub fn new(script_path: impl Into<PathBuf>, policy: Policy) -> Self {
        Self {
            script_path: script_path.into(),
            policy,
            output: OutputFormat::Text,
            check: false,
        }
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Parse arguments, program name excluded
    ///
    /// Policy flags look like short options (`-F`), so only `-h` and `--`
    /// prefixed words are treated as options.
    pub fn from_args<I, S>(args: I) -> SimulationResult<ConfigAction>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut output = OutputFormat::Text;
        let mut check = false;
        let mut positional: Vec<String> = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => return Ok(ConfigAction::Help),
                "--json" => output = OutputFormat::Json,
                "--check" => check = true,
                _ if arg.starts_with("--") => {
                    return Err(SimulationError::Usage(format!(
                        "Unknown option: {}\n{}",
                        arg, USAGE
                    )));
                }
                _ => positional.push(arg.to_string()),
            }
        }

        if positional.len() != 2 {
            return Err(SimulationError::Usage(USAGE.to_string()));
        }

        let policy = Policy::from_flag(&positional[1])
            .map_err(|e| SimulationError::Usage(format!("{}\n{}", e, USAGE)))?;

        Ok(ConfigAction::Run(
            Config::new(&positional[0], policy)
                .with_output(output)
                .with_check(check),
        ))
    }
}

/// Long help for `-h`
pub fn help_text() -> String {
    format!(
        "Partition MMU simulator - first fit, best fit and worst fit placement\n\n\
         {}\n\n\
         Options:\n  \
         --json     Emit one JSON step report per line\n  \
         --check    Verify list invariants after every step\n  \
         -h, --help Print this help message\n\n\
         Environment:\n  \
         RUST_LOG        Log filter (default: warn)\n  \
         MMU_TRACE_JSON  Set to 1 for JSON logs on stderr",
        USAGE
    )
}
