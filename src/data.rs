//! Data structures for benchmark measurements and comparison results

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single benchmark measurement parsed from a results file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRecord {
    /// Name of the benchmark
    pub name: String,
    /// The measured central value (e.g., median time or throughput)
    pub score: f64,
    /// Measurement uncertainty/spread (0.0 when the source format has none)
    pub error: f64,
    /// Unit of measurement (e.g., "ns", "ops/s")
    pub unit: String,
    /// Execution mode label, carried through for display only
    pub mode: String,
}

impl BenchmarkRecord {
    /// Whether this measurement is time-like (an increase means worse
    /// performance). Matched by the `"time"` or `"ns"` substring in the
    /// unit, case-insensitive; anything else is throughput-like.
    pub fn is_time_like(&self) -> bool {
        let unit = self.unit.to_lowercase();
        unit.contains("time") || unit.contains("ns")
    }
}

/// Severity bucket assigned to a comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Minor => write!(f, "minor"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Comparison between the baseline and current measurement of one benchmark
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    /// Benchmark name, present in both runs
    #[serde(rename = "benchmark")]
    pub benchmark_name: String,
    /// Score from the baseline run
    pub baseline_score: f64,
    /// Score from the current run
    pub current_score: f64,
    /// Signed percentage change: (current - baseline) / baseline * 100
    pub change_percent: f64,
    /// Whether the change is in the direction of worse performance
    pub is_regression: bool,
    /// Whether the change is a better-performance move beyond the 5% deadband
    pub is_improvement: bool,
    /// Severity bucket; non-regressions are always minor
    pub severity: Severity,
}
