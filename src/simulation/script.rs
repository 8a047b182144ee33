/*!
 * Event Script
 * Parsing of allocate/deallocate/coalesce scripts
 *
 * Format, one record per line:
 * - first significant line: partition size
 * - then `pid size`: positive pid allocates `size`, negative pid frees
 *   `|pid|`, pid -99999 or 0 coalesces (size optional and unread for all three)
 * - blank lines and `#` comments are skipped
 */

use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::{COALESCE_SENTINEL, SCRIPT_COMMENT_PREFIX};
use crate::core::types::{Pid, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// One scripted simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Allocate { pid: Pid, size: Size },
    Deallocate { pid: Pid },
    Coalesce,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Event::Allocate { pid, size } => write!(f, "ALLOCATE: {} FROM PID: {}", size, pid),
            Event::Deallocate { pid } => write!(f, "DEALLOCATE MEM: PID {}", pid),
            Event::Coalesce => write!(f, "COALESCE/COMPACT"),
        }
    }
}

/// Parsed event script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub partition_size: Size,
    pub events: Vec<Event>,
}

impl Script {
    pub fn new(partition_size: Size, events: Vec<Event>) -> Self {
        Self {
            partition_size,
            events,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SimulationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> SimulationResult<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with(SCRIPT_COMMENT_PREFIX));

        let (line_no, first) = lines
            .next()
            .ok_or_else(|| SimulationError::parse(1, "missing partition size"))?;
        let partition_size = Self::parse_partition_size(line_no, first)?;

        let events = lines
            .map(|(line_no, line)| Self::parse_event(line_no, line))
            .collect::<SimulationResult<Vec<_>>>()?;

        Ok(Script {
            partition_size,
            events,
        })
    }

    fn parse_partition_size(line_no: usize, line: &str) -> SimulationResult<Size> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 1 {
            return Err(SimulationError::parse(
                line_no,
                format!("expected a single partition size, got {} tokens", tokens.len()),
            ));
        }
        let size: Size = tokens[0].parse().map_err(|_| {
            SimulationError::parse(line_no, format!("invalid partition size: {}", tokens[0]))
        })?;
        if size == 0 {
            return Err(SimulationError::parse(line_no, "partition size must be positive"));
        }
        Ok(size)
    }

    fn parse_event(line_no: usize, line: &str) -> SimulationResult<Event> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() > 2 {
            return Err(SimulationError::parse(
                line_no,
                format!("expected `pid size`, got {} tokens", tokens.len()),
            ));
        }

        let pid: i64 = tokens[0]
            .parse()
            .map_err(|_| SimulationError::parse(line_no, format!("invalid pid: {}", tokens[0])))?;

        // Only allocations read the size column
        if pid == COALESCE_SENTINEL || pid == 0 {
            return Ok(Event::Coalesce);
        }

        let pid_value = Pid::try_from(pid.unsigned_abs())
            .map_err(|_| SimulationError::parse(line_no, format!("pid out of range: {}", pid)))?;
        if pid < 0 {
            return Ok(Event::Deallocate { pid: pid_value });
        }

        let Some(token) = tokens.get(1) else {
            return Err(SimulationError::parse(
                line_no,
                format!("allocation for pid {} is missing a size", pid),
            ));
        };
        let size: i64 = token
            .parse()
            .map_err(|_| SimulationError::parse(line_no, format!("invalid size: {}", token)))?;
        if size <= 0 {
            return Err(SimulationError::parse(
                line_no,
                format!("allocation size must be positive, got {}", size),
            ));
        }
        let size = Size::try_from(size)
            .map_err(|_| SimulationError::parse(line_no, format!("size out of range: {}", size)))?;

        Ok(Event::Allocate {
            pid: pid_value,
            size,
        })
    }
}
