//! Report rendering for comparison results
//!
//! Pure functions of their inputs; the driver decides where the string goes.

use crate::data::{ComparisonResult, Severity};
use crate::error::Result;
use clap::ValueEnum;

/// Output format for the comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Json,
    Text,
}

/// Message returned for every format when there is nothing to compare
const NO_DATA_MESSAGE: &str = "No benchmark data to compare.";

/// Groups of comparison results, recomputed for every render call.
///
/// The severity groups partition the results; `improvements` overlaps with
/// `minor` (a non-regression is always minor), and the renderers preserve
/// that overlap.
struct Groups<'a> {
    critical: Vec<&'a ComparisonResult>,
    warnings: Vec<&'a ComparisonResult>,
    improvements: Vec<&'a ComparisonResult>,
    minor: Vec<&'a ComparisonResult>,
}

impl<'a> Groups<'a> {
    fn new(results: &'a [ComparisonResult]) -> Self {
        Self {
            critical: results
                .iter()
                .filter(|c| c.severity == Severity::Critical)
                .collect(),
            warnings: results
                .iter()
                .filter(|c| c.severity == Severity::Warning && c.is_regression)
                .collect(),
            improvements: results.iter().filter(|c| c.is_improvement).collect(),
            minor: results
                .iter()
                .filter(|c| c.severity == Severity::Minor)
                .collect(),
        }
    }
}

/// Render a comparison report in the requested format.
pub fn render_report(results: &[ComparisonResult], format: ReportFormat) -> Result<String> {
    if results.is_empty() {
        return Ok(NO_DATA_MESSAGE.to_string());
    }

    match format {
        ReportFormat::Markdown => Ok(render_markdown(results)),
        ReportFormat::Json => render_json(results),
        ReportFormat::Text => Ok(render_text(results)),
    }
}

fn render_markdown(results: &[ComparisonResult]) -> String {
    let groups = Groups::new(results);
    let mut lines = vec!["# 📊 Performance Comparison Report".to_string(), String::new()];

    lines.extend([
        "## 📋 Summary".to_string(),
        String::new(),
        format!("- **Total benchmarks compared**: {}", results.len()),
        format!("- 🚨 **Critical regressions**: {}", groups.critical.len()),
        format!("- ⚠️ **Warning regressions**: {}", groups.warnings.len()),
        format!("- ✅ **Improvements**: {}", groups.improvements.len()),
        format!("- 📊 **Minor changes**: {}", groups.minor.len()),
        String::new(),
    ]);

    if !groups.critical.is_empty() {
        lines.extend([
            "## 🚨 Critical Performance Regressions".to_string(),
            String::new(),
            "| Benchmark | Baseline | Current | Change | Severity |".to_string(),
            "|-----------|----------|---------|--------|----------|".to_string(),
        ]);
        for comp in &groups.critical {
            lines.push(format!(
                "| `{}` | {:.2} | {:.2} | **{:+.1}%** | 🚨 Critical |",
                comp.benchmark_name, comp.baseline_score, comp.current_score, comp.change_percent
            ));
        }
        lines.push(String::new());
    }

    if !groups.warnings.is_empty() {
        lines.extend([
            "## ⚠️ Performance Warnings".to_string(),
            String::new(),
            "| Benchmark | Baseline | Current | Change |".to_string(),
            "|-----------|----------|---------|--------|".to_string(),
        ]);
        for comp in &groups.warnings {
            lines.push(format!(
                "| `{}` | {:.2} | {:.2} | **{:+.1}%** |",
                comp.benchmark_name, comp.baseline_score, comp.current_score, comp.change_percent
            ));
        }
        lines.push(String::new());
    }

    if !groups.improvements.is_empty() {
        lines.extend([
            "## ✅ Performance Improvements".to_string(),
            String::new(),
            "| Benchmark | Baseline | Current | Change |".to_string(),
            "|-----------|----------|---------|--------|".to_string(),
        ]);
        for comp in &groups.improvements {
            lines.push(format!(
                "| `{}` | {:.2} | {:.2} | **{:+.1}%** |",
                comp.benchmark_name, comp.baseline_score, comp.current_score, comp.change_percent
            ));
        }
        lines.push(String::new());
    }

    lines.extend(["## 🎯 Recommendations".to_string(), String::new()]);

    if !groups.critical.is_empty() {
        lines.push(
            "- 🚨 **Critical regressions detected** - immediate investigation required".to_string(),
        );
    }
    if !groups.warnings.is_empty() {
        lines.push("- ⚠️ **Performance warnings** - consider optimization".to_string());
    }
    if !groups.improvements.is_empty() {
        lines.push(
            "- ✅ **Performance improvements detected** - consider updating baseline".to_string(),
        );
    }
    if groups.critical.is_empty() && groups.warnings.is_empty() {
        lines.push("- ✅ **No significant performance regressions detected**".to_string());
    }

    lines.join("\n")
}

fn render_json(results: &[ComparisonResult]) -> Result<String> {
    let groups = Groups::new(results);

    let report = serde_json::json!({
        "summary": {
            "total_benchmarks": results.len(),
            "critical_regressions": groups.critical.len(),
            "warning_regressions": groups.warnings.len(),
            "improvements": groups.improvements.len(),
            "minor_changes": groups.minor.len(),
        },
        "comparisons": results,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_text(results: &[ComparisonResult]) -> String {
    let groups = Groups::new(results);
    let mut lines = vec![
        "Performance Comparison Report".to_string(),
        "=".repeat(40),
        String::new(),
    ];

    lines.extend([
        format!("Total benchmarks: {}", results.len()),
        format!("Critical regressions: {}", groups.critical.len()),
        format!("Warning regressions: {}", groups.warnings.len()),
        format!("Improvements: {}", groups.improvements.len()),
        format!("Minor changes: {}", groups.minor.len()),
        String::new(),
    ]);

    if !groups.critical.is_empty() {
        lines.push("CRITICAL REGRESSIONS:".to_string());
        lines.push("-".repeat(20));
        for comp in &groups.critical {
            lines.push(format!(
                "{}: {:+.1}% change",
                comp.benchmark_name, comp.change_percent
            ));
        }
        lines.push(String::new());
    }

    if !groups.warnings.is_empty() {
        lines.push("WARNING REGRESSIONS:".to_string());
        lines.push("-".repeat(18));
        for comp in &groups.warnings {
            lines.push(format!(
                "{}: {:+.1}% change",
                comp.benchmark_name, comp.change_percent
            ));
        }
        lines.push(String::new());
    }

    if !groups.improvements.is_empty() {
        lines.push("IMPROVEMENTS:".to_string());
        lines.push("-".repeat(12));
        for comp in &groups.improvements {
            lines.push(format!(
                "{}: {:+.1}% improvement",
                comp.benchmark_name, comp.change_percent
            ));
        }
    }

    lines.join("\n")
}
