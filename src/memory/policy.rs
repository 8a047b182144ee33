/*!
 * Placement Policy
 * Victim selection and free-list reinsertion discipline
 */

use super::types::MemoryError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Placement policy for a run
///
/// The policy decides both which free block satisfies a request and how
/// blocks re-enter the free list, so each policy keeps its list pre-sorted
/// for its own next scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First fit; fragments and freed blocks go to the back
    Fifo,
    /// Smallest sufficient block; free list kept ascending by size
    BestFit,
    /// Largest block; free list kept descending by size
    WorstFit,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::BestFit, Policy::WorstFit];

    /// Parse a command-line flag such as `-F`, `-bestfit` or `-W`
    pub fn from_flag(flag: &str) -> Result<Self, MemoryError> {
        match flag.to_uppercase().as_str() {
            "-F" | "-FIFO" => Ok(Self::Fifo),
            "-B" | "-BESTFIT" => Ok(Self::BestFit),
            "-W" | "-WORSTFIT" => Ok(Self::WorstFit),
            _ => Err(MemoryError::InvalidPolicy(flag.to_string())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::BestFit => "best_fit",
            Self::WorstFit => "worst_fit",
        }
    }
}

impl FromStr for Policy {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" | "first_fit" | "firstfit" | "first" | "f" => Ok(Self::Fifo),
            "best_fit" | "bestfit" | "best" | "b" => Ok(Self::BestFit),
            "worst_fit" | "worstfit" | "worst" | "w" => Ok(Self::WorstFit),
            _ => Err(MemoryError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::BestFit => write!(f, "BESTFIT"),
            Policy::WorstFit => write!(f, "WORSTFIT"),
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
