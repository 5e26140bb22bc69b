//! Loader for benchmark result files
//!
//! Three JSON shapes are recognized, detected structurally rather than by a
//! format flag:
//!
//! - JMH: a top-level array of objects with `benchmark` and `primaryMetric`
//! - Android Benchmark: an object with a `benchmarks` array and
//!   `metrics.timeNs` per entry
//! - kotlinx.benchmark: an object with a `results` array of flat entries

use crate::data::BenchmarkRecord;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, warn};

/// Load benchmark records from a JSON results file.
///
/// Any read or parse failure is logged and yields an empty list rather than
/// an error; the caller decides whether an empty result is fatal.
pub fn load_records(path: &Path) -> Vec<BenchmarkRecord> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse {} as JSON: {}", path.display(), e);
            return Vec::new();
        }
    };

    let records = parse_records(&value);
    if records.is_empty() {
        warn!(
            "No benchmark records recognized in {} (unknown format?)",
            path.display()
        );
    }
    records
}

/// Parse benchmark records out of a generically-decoded JSON value.
///
/// The shape recognizers are tried in a fixed order; the first one whose
/// discriminating keys are present wins. A value matching no shape yields an
/// empty list.
pub fn parse_records(value: &Value) -> Vec<BenchmarkRecord> {
    try_parse_jmh(value)
        .or_else(|| try_parse_android(value))
        .or_else(|| try_parse_kotlinx(value))
        .unwrap_or_default()
}

/// JMH format: a top-level array of benchmark objects
fn try_parse_jmh(value: &Value) -> Option<Vec<BenchmarkRecord>> {
    let items = value.as_array()?;

    let mut records = Vec::new();
    for item in items {
        let Some(name) = item.get("benchmark").and_then(Value::as_str) else {
            debug!("Skipping JMH entry without a benchmark name");
            continue;
        };
        let Some(metric) = item.get("primaryMetric") else {
            debug!("Skipping JMH entry without a primaryMetric: {}", name);
            continue;
        };
        let Some(score) = metric.get("score").and_then(Value::as_f64) else {
            debug!("Skipping JMH entry without a score: {}", name);
            continue;
        };
        let Some(unit) = metric.get("scoreUnit").and_then(Value::as_str) else {
            debug!("Skipping JMH entry without a scoreUnit: {}", name);
            continue;
        };

        records.push(BenchmarkRecord {
            name: name.to_string(),
            score,
            error: metric
                .get("scoreError")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            unit: unit.to_string(),
            mode: item
                .get("mode")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        });
    }

    Some(records)
}

/// Android Benchmark format: `{"benchmarks": [{"metrics": {"timeNs": ...}}]}`
fn try_parse_android(value: &Value) -> Option<Vec<BenchmarkRecord>> {
    let items = value.get("benchmarks")?.as_array()?;

    let mut records = Vec::new();
    for item in items {
        let Some(name) = item.get("name").and_then(Value::as_str) else {
            debug!("Skipping Android entry without a name");
            continue;
        };
        let Some(time_ns) = item.get("metrics").and_then(|m| m.get("timeNs")) else {
            debug!("Skipping Android entry without metrics.timeNs: {}", name);
            continue;
        };
        let median = time_ns.get("median").and_then(Value::as_f64);
        let maximum = time_ns.get("maximum").and_then(Value::as_f64);
        let minimum = time_ns.get("minimum").and_then(Value::as_f64);
        let (Some(median), Some(maximum), Some(minimum)) = (median, maximum, minimum) else {
            debug!("Skipping Android entry with incomplete timeNs stats: {}", name);
            continue;
        };

        records.push(BenchmarkRecord {
            name: name.to_string(),
            score: median,
            error: maximum - minimum,
            unit: "ns".to_string(),
            mode: "avgt".to_string(),
        });
    }

    Some(records)
}

/// kotlinx.benchmark format: `{"results": [{"benchmark": ..., "score": ...}]}`
fn try_parse_kotlinx(value: &Value) -> Option<Vec<BenchmarkRecord>> {
    let items = value.get("results")?.as_array()?;

    let mut records = Vec::new();
    for item in items {
        let name = item.get("benchmark").and_then(Value::as_str);
        let score = item.get("score").and_then(Value::as_f64);
        let unit = item.get("unit").and_then(Value::as_str);
        let (Some(name), Some(score), Some(unit)) = (name, score, unit) else {
            debug!("Skipping kotlinx entry with missing required keys");
            continue;
        };

        records.push(BenchmarkRecord {
            name: name.to_string(),
            score,
            error: item.get("error").and_then(Value::as_f64).unwrap_or(0.0),
            unit: unit.to_string(),
            mode: item
                .get("mode")
                .and_then(Value::as_str)
                .unwrap_or("avgt")
                .to_string(),
        });
    }

    Some(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_parse_jmh_format() {
        let value = json!([
            {
                "benchmark": "com.example.StringBench.concat",
                "mode": "thrpt",
                "primaryMetric": {
                    "score": 1234.5,
                    "scoreError": 12.3,
                    "scoreUnit": "ops/s"
                }
            },
            {
                "benchmark": "com.example.StringBench.builder",
                "primaryMetric": {
                    "score": 99.0,
                    "scoreUnit": "ns/op"
                }
            }
        ]);

        let records = parse_records(&value);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "com.example.StringBench.concat");
        assert_eq!(records[0].score, 1234.5);
        assert_eq!(records[0].error, 12.3);
        assert_eq!(records[0].unit, "ops/s");
        assert_eq!(records[0].mode, "thrpt");

        // scoreError and mode default when absent
        assert_eq!(records[1].error, 0.0);
        assert_eq!(records[1].mode, "unknown");
    }

    #[test]
    fn test_parse_jmh_skips_incomplete_entries() {
        let value = json!([
            { "benchmark": "no_metric" },
            { "primaryMetric": { "score": 1.0, "scoreUnit": "ns" } },
            {
                "benchmark": "ok",
                "primaryMetric": { "score": 1.0, "scoreUnit": "ns" }
            }
        ]);

        let records = parse_records(&value);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "ok");
    }

    #[test]
    fn test_parse_jmh_skips_entry_without_score_unit() {
        // scoreUnit is required; without it the record cannot be classified
        // as time- or throughput-like, so the element is skipped.
        let value = json!([
            {
                "benchmark": "no_unit",
                "primaryMetric": { "score": 1.0 }
            },
            {
                "benchmark": "ok",
                "primaryMetric": { "score": 1.0, "scoreUnit": "ops/s" }
            }
        ]);

        let records = parse_records(&value);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "ok");
    }

    #[test]
    fn test_parse_android_format() {
        let value = json!({
            "benchmarks": [
                {
                    "name": "startupTime",
                    "metrics": {
                        "timeNs": {
                            "median": 1500.0,
                            "minimum": 1400.0,
                            "maximum": 1700.0
                        }
                    }
                },
                { "name": "noMetrics" }
            ]
        });

        let records = parse_records(&value);
        assert_eq!(records.len(), 1);

        assert_eq!(records[0].name, "startupTime");
        assert_eq!(records[0].score, 1500.0);
        // error is the max-min spread
        assert_eq!(records[0].error, 300.0);
        assert_eq!(records[0].unit, "ns");
        assert_eq!(records[0].mode, "avgt");
    }

    #[test]
    fn test_parse_kotlinx_format() {
        let value = json!({
            "results": [
                {
                    "benchmark": "fib",
                    "score": 42.0,
                    "error": 1.5,
                    "unit": "ms/op",
                    "mode": "avgt"
                },
                {
                    "benchmark": "sort",
                    "score": 7.0,
                    "unit": "ops/ms"
                },
                { "benchmark": "missing_score" }
            ]
        });

        let records = parse_records(&value);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "fib");
        assert_eq!(records[0].error, 1.5);

        assert_eq!(records[1].name, "sort");
        assert_eq!(records[1].error, 0.0);
        assert_eq!(records[1].mode, "avgt");
    }

    #[test]
    fn test_parse_unknown_shape_yields_empty() {
        let value = json!({ "something": "else" });
        assert!(parse_records(&value).is_empty());

        let value = json!(42);
        assert!(parse_records(&value).is_empty());
    }

    #[test]
    fn test_array_shape_takes_priority() {
        // A top-level array is always treated as JMH, even if its elements
        // would not match; it never falls through to the keyed shapes.
        let value = json!([{ "results": [] }]);
        assert!(parse_records(&value).is_empty());
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = json!({
            "results": [
                { "benchmark": "b1", "score": 10.0, "unit": "ns" }
            ]
        });
        write!(file, "{}", content).unwrap();

        let records = load_records(file.path());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "b1");
    }

    #[test]
    fn test_load_records_missing_file() {
        let records = load_records(Path::new("/nonexistent/results.json"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_records_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let records = load_records(file.path());
        assert!(records.is_empty());
    }
}
