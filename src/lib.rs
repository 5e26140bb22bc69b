//! perf-compare - Benchmark regression detection for CI
//!
//! This library compares two sets of benchmark results (a baseline run and a
//! current run), classifies each change by severity, and renders a report
//! suitable for CI gating.
//!
//! # Features
//!
//! - Parse JMH, Android Benchmark, and kotlinx.benchmark JSON result files
//! - Compare runs by benchmark name with metric-direction-aware semantics
//! - Classify regressions as minor, warning, or critical
//! - Render Markdown, JSON, or plain-text reports
//!
//! # Example
//!
//! ```no_run
//! use perf_compare::{compare, loader, report};
//! use std::path::Path;
//!
//! let baseline = loader::load_records(Path::new("baseline.json"));
//! let current = loader::load_records(Path::new("current.json"));
//!
//! let config = compare::CompareConfig::default();
//! let results = compare::compare_records(&baseline, &current, &config);
//!
//! let rendered = report::render_report(&results, report::ReportFormat::Markdown).unwrap();
//! println!("{}", rendered);
//! ```

pub mod compare;
pub mod data;
pub mod error;
pub mod loader;
pub mod report;

pub use compare::{compare_records, CompareConfig};
pub use data::{BenchmarkRecord, ComparisonResult, Severity};
pub use error::{Error, Result};
pub use loader::{load_records, parse_records};
pub use report::{render_report, ReportFormat};
