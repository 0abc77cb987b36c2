//! Side-by-side comparison of all policies.
//!
//! Runs every [`Algorithm`] over the same process set and parameters and
//! keeps one KPI row per algorithm for ranking.
//!
//! ```
//! use u_cpu_sched::comparison::{compare, Metric};
//! use u_cpu_sched::config::SimulationConfig;
//! use u_cpu_sched::models::Process;
//! use u_cpu_sched::scheduler::Algorithm;
//!
//! let procs = vec![Process::new("long", 0, 9), Process::new("short", 1, 1)];
//! let cmp = compare(&procs, &SimulationConfig::default());
//! assert_eq!(cmp.rows.len(), 6);
//! assert_ne!(cmp.best(Metric::AvgWaitingTime), Some(Algorithm::Fcfs));
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SimulationConfig;
use crate::models::Process;
use crate::scheduler::{Algorithm, SimulationKpi};

/// A comparable KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Mean waiting time.
    AvgWaitingTime,
    /// Mean turnaround time.
    AvgTurnaroundTime,
    /// Mean response time.
    AvgResponseTime,
    /// CPU utilization percentage.
    CpuUtilization,
    /// Processes per time unit.
    Throughput,
    /// Context switches.
    ContextSwitches,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 6] = [
        Metric::AvgWaitingTime,
        Metric::AvgTurnaroundTime,
        Metric::AvgResponseTime,
        Metric::CpuUtilization,
        Metric::Throughput,
        Metric::ContextSwitches,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AvgWaitingTime => "Avg waiting time",
            Self::AvgTurnaroundTime => "Avg turnaround time",
            Self::AvgResponseTime => "Avg response time",
            Self::CpuUtilization => "CPU utilization %",
            Self::Throughput => "Throughput",
            Self::ContextSwitches => "Context switches",
        }
    }

    /// Whether smaller values rank better.
    pub fn is_lower_better(self) -> bool {
        !matches!(self, Self::CpuUtilization | Self::Throughput)
    }

    /// Reads this metric from a KPI record.
    pub fn value(self, kpi: &SimulationKpi) -> f64 {
        match self {
            Self::AvgWaitingTime => kpi.avg_waiting_time,
            Self::AvgTurnaroundTime => kpi.avg_turnaround_time,
            Self::AvgResponseTime => kpi.avg_response_time,
            Self::CpuUtilization => kpi.cpu_utilization,
            Self::Throughput => kpi.throughput,
            Self::ContextSwitches => f64::from(kpi.context_switches),
        }
    }
}

/// KPIs of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Algorithm that produced the row.
    pub algorithm: Algorithm,
    /// Its metrics.
    pub kpi: SimulationKpi,
}

/// One row per algorithm, in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Rows in [`Algorithm::ALL`] order.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Row for one algorithm.
    pub fn row(&self, algorithm: Algorithm) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }

    /// Algorithms ordered best-first by `metric`. Ties keep row order.
    pub fn ranking(&self, metric: Metric) -> Vec<Algorithm> {
        let mut rows: Vec<&ComparisonRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            let va = metric.value(&a.kpi);
            let vb = metric.value(&b.kpi);
            let ord = va.partial_cmp(&vb).unwrap_or(Ordering::Equal);
            if metric.is_lower_better() {
                ord
            } else {
                ord.reverse()
            }
        });
        rows.into_iter().map(|r| r.algorithm).collect()
    }

    /// Best algorithm for `metric`, `None` when there are no rows.
    pub fn best(&self, metric: Metric) -> Option<Algorithm> {
        self.ranking(metric).first().copied()
    }
}

/// Runs every algorithm over `processes` with the same `config`.
///
/// Empty input yields six all-zero rows.
pub fn compare(processes: &[Process], config: &SimulationConfig) -> Comparison {
    let rows = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let result = config.simulate(algorithm, processes);
            ComparisonRow {
                algorithm,
                kpi: SimulationKpi::calculate(&result),
            }
        })
        .collect();

    debug!(
        process_count = processes.len(),
        time_quantum = config.time_quantum,
        priority_preemptive = config.priority_preemptive,
        "comparison complete"
    );

    Comparison { rows }
}
