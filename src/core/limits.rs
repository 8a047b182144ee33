/*!
 * Simulator Limits and Constants
 *
 * Centralized location for script markers, output markers and defaults.
 */

// =============================================================================
// EVENT SCRIPT
// =============================================================================

/// Pid value that marks a coalesce event in an event script
pub const COALESCE_SENTINEL: i64 = -99999;

/// Comment prefix for event script lines
pub const SCRIPT_COMMENT_PREFIX: char = '#';

// =============================================================================
// OUTPUT
// =============================================================================

/// Banner printed around every event header
pub const STEP_BANNER: &str = "************************";

/// Usage line printed on bad arguments
pub const USAGE: &str =
    "usage: ./mmu <input file> -{F | B | W }  \n(F=FIFO | B=BESTFIT | W-WORSTFIT)";

// =============================================================================
// LOGGING
// =============================================================================

/// Default log filter when RUST_LOG is unset
/// Kept at warn so log lines do not interleave with the listing on stdout runs
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable enabling JSON-formatted logs
pub const TRACE_JSON_ENV: &str = "MMU_TRACE_JSON";
