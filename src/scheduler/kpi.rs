//! Simulation quality metrics (KPIs).
//!
//! Reduces a [`SimulationResult`] to scalar statistics. Works on the
//! shared output contract only, so it does not care which policy
//! produced the result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Response | mean(first run - arrival) |
//! | CPU Utilization | 100 × busy time / total time |
//! | Throughput | processes / total time |
//! | Context Switches | as counted by the policy |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{SimulationResult, Time, TimelineBlock};

/// Simulation performance indicators.
///
/// Time averages are in CPU-time units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Busy share of the timeline (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Context switches reported by the policy.
    pub context_switches: u32,
    /// Longest waiting time of any process.
    pub max_waiting_time: Time,
    /// Longest turnaround time of any process.
    pub max_turnaround_time: Time,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    ///
    /// An empty timeline yields all-zero metrics.
    pub fn calculate(result: &SimulationResult) -> Self {
        if result.timeline.is_empty() {
            return Self::default();
        }

        let rows = &result.process_results;
        let n = rows.len();
        let mean = |sum: Time| {
            if n == 0 {
                0.0
            } else {
                sum as f64 / n as f64
            }
        };

        let (cpu_utilization, throughput) = if result.total_time > 0 {
            let total = result.total_time as f64;
            (
                result.busy_time() as f64 / total * 100.0,
                n as f64 / total,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_waiting_time: mean(rows.iter().map(|r| r.waiting_time).sum()),
            avg_turnaround_time: mean(rows.iter().map(|r| r.turnaround_time).sum()),
            avg_response_time: mean(rows.iter().map(|r| r.response_time).sum()),
            cpu_utilization,
            throughput,
            context_switches: result.context_switches,
            max_waiting_time: rows.iter().map(|r| r.waiting_time).max().unwrap_or(0),
            max_turnaround_time: rows.iter().map(|r| r.turnaround_time).max().unwrap_or(0),
        }
    }
}

/// Recomputes context switches from the timeline alone.
///
/// Counts one switch per block boundary, the first block included, which
/// is the rule every policy applies while building its timeline. SRTF
/// reports more: one extra per run segment that ended with work left.
pub fn context_switches_from_timeline(timeline: &[TimelineBlock]) -> u32 {
    u32::try_from(timeline.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessResult;

    fn row(pid: &str, arrival: Time, burst: Time, finish: Time, first: Time) -> ProcessResult {
        ProcessResult {
            pid: pid.into(),
            arrival,
            burst,
            attribute: None,
            finish_time: finish,
            waiting_time: finish - arrival - burst,
            turnaround_time: finish - arrival,
            response_time: first - arrival,
        }
    }

    fn sample() -> SimulationResult {
        SimulationResult {
            timeline: vec![
                TimelineBlock::idle(0, 2),
                TimelineBlock::execution("P1", 2, 6),
                TimelineBlock::execution("P2", 6, 8),
            ],
            process_results: vec![row("P1", 2, 4, 6, 2), row("P2", 3, 2, 8, 6)],
            total_time: 8,
            context_switches: 3,
        }
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = SimulationKpi::calculate(&sample());
        // waiting: 0, 3 → 1.5; turnaround: 4, 5 → 4.5; response: 0, 3 → 1.5
        assert!((kpi.avg_waiting_time - 1.5).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 4.5).abs() < 1e-10);
        assert!((kpi.avg_response_time - 1.5).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 3);
        assert_eq!(kpi.max_waiting_time, 3);
        assert_eq!(kpi.max_turnaround_time, 5);
    }

    #[test]
    fn test_kpi_utilization_and_throughput() {
        let kpi = SimulationKpi::calculate(&sample());
        assert!((kpi.cpu_utilization - 75.0).abs() < 1e-10); // 6 busy / 8
        assert!((kpi.throughput - 0.25).abs() < 1e-10); // 2 / 8
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&SimulationResult::empty());
        assert_eq!(kpi, SimulationKpi::default());
    }

    #[test]
    fn test_kpi_uses_reported_switches() {
        let mut result = sample();
        result.context_switches = 42;
        assert_eq!(SimulationKpi::calculate(&result).context_switches, 42);
    }

    #[test]
    fn test_switches_from_timeline() {
        assert_eq!(context_switches_from_timeline(&sample().timeline), 3);
        assert_eq!(context_switches_from_timeline(&[]), 0);
    }

    #[test]
    fn test_switches_from_timeline_counts_repeated_pid() {
        // Back-to-back segments of one process are separate dispatches.
        let timeline = vec![
            TimelineBlock::execution("P1", 0, 2),
            TimelineBlock::execution("P1", 2, 4),
            TimelineBlock::execution("P2", 4, 5),
        ];
        assert_eq!(context_switches_from_timeline(&timeline), 3);
    }
}
