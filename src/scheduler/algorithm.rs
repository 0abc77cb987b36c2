//! Algorithm identifiers and metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come First-Served.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "sjf")]
    Sjf,
    /// Shortest Remaining Time First.
    #[serde(rename = "srtf")]
    Srtf,
    /// Round Robin.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Priority scheduling (optionally preemptive).
    #[serde(rename = "priority")]
    Priority,
    /// Fixed three-level Multilevel Queue.
    #[serde(rename = "mlq")]
    MultilevelQueue,
}

/// Whether a policy may interrupt a running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preemption {
    /// Runs every dispatched process to completion.
    NonPreemptive,
    /// May interrupt.
    Preemptive,
    /// Caller chooses (Priority).
    Optional,
    /// Depends on the queue (Multilevel Queue).
    Mixed,
}

impl Algorithm {
    /// All algorithms in display order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::MultilevelQueue,
    ];

    /// Stable identifier (e.g., "rr").
    pub fn id(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "rr",
            Self::Priority => "priority",
            Self::MultilevelQueue => "mlq",
        }
    }

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come First-Served (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::Srtf => "Shortest Remaining Time First (SRTF)",
            Self::RoundRobin => "Round Robin (RR)",
            Self::Priority => "Priority Scheduling",
            Self::MultilevelQueue => "Multilevel Queue (MLQ)",
        }
    }

    /// Short label for tables and charts.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
            Self::MultilevelQueue => "MLQ",
        }
    }

    /// One-line description of the selection criterion.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fcfs => "Arrival order",
            Self::Sjf => "Smallest burst",
            Self::Srtf => "Smallest remaining time",
            Self::RoundRobin => "Time quantum",
            Self::Priority => "Highest priority first",
            Self::MultilevelQueue => "Multiple queues",
        }
    }

    /// Preemption behavior.
    pub fn preemption(self) -> Preemption {
        match self {
            Self::Fcfs | Self::Sjf => Preemption::NonPreemptive,
            Self::Srtf | Self::RoundRobin => Preemption::Preemptive,
            Self::Priority => Preemption::Optional,
            Self::MultilevelQueue => Preemption::Mixed,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the stable id or short name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| {
                a.id().eq_ignore_ascii_case(needle) || a.short_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.id().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("SRTF".parse::<Algorithm>(), Ok(Algorithm::Srtf));
        assert_eq!(" mlq ".parse::<Algorithm>(), Ok(Algorithm::MultilevelQueue));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lottery".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scheduling algorithm 'lottery'");
    }

    #[test]
    fn test_preemption() {
        assert_eq!(Algorithm::Fcfs.preemption(), Preemption::NonPreemptive);
        assert_eq!(Algorithm::RoundRobin.preemption(), Preemption::Preemptive);
        assert_eq!(Algorithm::Priority.preemption(), Preemption::Optional);
        assert_eq!(Algorithm::MultilevelQueue.preemption(), Preemption::Mixed);
    }

    #[test]
    fn test_serde_ids_match() {
        for algo in Algorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{}\"", algo.id()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Algorithm::RoundRobin.to_string(), "Round Robin (RR)");
    }
}
