//! Benchmark comparison logic

use crate::data::{BenchmarkRecord, ComparisonResult, Severity};
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::warn;

/// Improvement deadband in percentage points, independent of the configured
/// thresholds. Changes smaller than this are noise, not improvements.
const IMPROVEMENT_DEADBAND: f64 = 5.0;

/// Threshold configuration for severity classification
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Regression percentage above which a comparison is a warning
    pub warning_threshold: f64,
    /// Regression percentage above which a comparison is critical
    pub critical_threshold: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            warning_threshold: 20.0,
            critical_threshold: 50.0,
        }
    }
}

impl CompareConfig {
    /// Create a config from warning/critical percentages.
    pub fn new(warning_threshold: f64, critical_threshold: f64) -> Result<Self> {
        if warning_threshold <= 0.0 || critical_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "thresholds must be positive percentages".to_string(),
            ));
        }
        if critical_threshold < warning_threshold {
            return Err(Error::ConfigError(
                "critical-threshold must be >= warning-threshold".to_string(),
            ));
        }

        Ok(Self {
            warning_threshold,
            critical_threshold,
        })
    }
}

/// Compare two benchmark runs, matching records by name.
///
/// One result is produced per benchmark present in both runs, sorted by name
/// so the output is reproducible. Names present on only one side are dropped.
/// A duplicate name within one run resolves to the last record in list order.
pub fn compare_records(
    baseline: &[BenchmarkRecord],
    current: &[BenchmarkRecord],
    config: &CompareConfig,
) -> Vec<ComparisonResult> {
    let baseline_map: HashMap<&str, &BenchmarkRecord> =
        baseline.iter().map(|r| (r.name.as_str(), r)).collect();
    let current_map: HashMap<&str, &BenchmarkRecord> =
        current.iter().map(|r| (r.name.as_str(), r)).collect();

    let mut common: Vec<&str> = baseline_map
        .keys()
        .filter(|name| current_map.contains_key(*name))
        .copied()
        .collect();
    common.sort_unstable();

    let mut comparisons = Vec::with_capacity(common.len());
    for name in common {
        let base = baseline_map[name];
        let curr = current_map[name];

        if base.score == 0.0 {
            warn!(
                "Skipping {}: baseline score is zero, change is undefined",
                name
            );
            continue;
        }

        let change_percent = (curr.score - base.score) / base.score * 100.0;

        // For time metrics an increase is a regression; for throughput a
        // decrease is. Improvements must clear the deadband in the other
        // direction.
        let (is_regression, is_improvement) = if base.is_time_like() {
            (
                change_percent > 0.0,
                change_percent < -IMPROVEMENT_DEADBAND,
            )
        } else {
            (change_percent < 0.0, change_percent > IMPROVEMENT_DEADBAND)
        };

        let severity = if is_regression {
            let abs_change = change_percent.abs();
            if abs_change > config.critical_threshold {
                Severity::Critical
            } else if abs_change > config.warning_threshold {
                Severity::Warning
            } else {
                Severity::Minor
            }
        } else {
            Severity::Minor
        };

        comparisons.push(ComparisonResult {
            benchmark_name: name.to_string(),
            baseline_score: base.score,
            current_score: curr.score,
            change_percent,
            is_regression,
            is_improvement,
            severity,
        });
    }

    comparisons
}
