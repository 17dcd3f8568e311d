//! End-to-end isolation pipeline and its report
//!
//! Runs diff, optional Replacement coalescing, repeated minimization and the
//! bounded artifact filter, counting oracle calls through a [`CachedOracle`].

use crate::config::IsolationConfig;
use crate::dd::{dd_repeat_deltas, filter_artifacts};
use crate::delta::{coalesce_replacements, describe_edit_script, diff, EditOperation};
use crate::error::IsolationError;
use crate::oracle::{CachedOracle, OracleCache, TestOracle};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Outcome of one isolation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsolationReport {
    /// Size of the edit script between base and target
    pub total_deltas: usize,

    /// Deltas isolated by repeated minimization, in canonical order
    pub isolated: Vec<EditOperation>,

    /// Passing frontier left after the last minimization round
    pub residual_pass: Vec<EditOperation>,

    /// Isolated deltas after artifact filtering
    ///
    /// `None` when the filter was disabled, had nothing to do, or refused
    /// the store (see `filter_note`).
    pub filtered: Option<Vec<EditOperation>>,

    /// Deltas the artifact filter confirmed as artifacts
    pub artifacts_removed: usize,

    /// Why the artifact filter did not run
    pub filter_note: Option<String>,

    /// Completed minimization rounds
    pub rounds: usize,

    /// Whether an oracle precondition failure ended the rounds
    pub stopped_early: bool,

    /// The precondition failure that ended the rounds
    pub stop_reason: Option<String>,

    /// Oracle evaluations requested, cache hits included
    pub oracle_calls: usize,

    /// Oracle evaluations that reached the oracle
    pub oracle_calls_uncached: usize,

    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

impl IsolationReport {
    /// The failure-inducing deltas: filtered if filtering ran, isolated otherwise
    pub fn final_deltas(&self) -> &[EditOperation] {
        self.filtered.as_deref().unwrap_or(&self.isolated)
    }

    /// One line per final delta, showing the elements it touches
    pub fn describe<T: fmt::Debug>(&self, base: &[T], target: &[T]) -> Vec<String> {
        describe_edit_script(self.final_deltas(), base, target)
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();
        let deltas = self.final_deltas();

        if deltas.is_empty() {
            report.push_str("⚠️  NO FAILURE-INDUCING DELTAS ISOLATED\n\n");
        } else {
            report.push_str(&format!(
                "🎯 ISOLATED {} OF {} DELTAS\n\n",
                deltas.len(),
                self.total_deltas
            ));
        }

        report.push_str(&format!("Minimization rounds: {}\n", self.rounds));
        if let Some(reason) = &self.stop_reason {
            report.push_str(&format!("Stopped: {}\n", reason));
        }
        report.push_str(&format!(
            "Oracle calls: {} ({} uncached)\n",
            self.oracle_calls, self.oracle_calls_uncached
        ));
        report.push_str(&format!("Elapsed: {} ms\n", self.elapsed_ms));

        if self.artifacts_removed > 0 {
            report.push_str(&format!(
                "\n🧹 Artifacts removed: {}\n",
                self.artifacts_removed
            ));
        }
        if let Some(note) = &self.filter_note {
            report.push_str(&format!("\n🔇 Artifact filter skipped: {}\n", note));
        }

        if !deltas.is_empty() {
            report.push_str("\n🔍 Failure-inducing deltas:\n");
            for op in deltas {
                report.push_str(&format!("  {}\n", op));
            }
        }

        report
    }
}

/// Edit script used by the pipeline for `config`
///
/// Build oracles that need the canonical delta list (such as
/// `PropertyBasedOracle`) from this script and pass it to [`isolate_deltas`].
pub fn edit_script<T: PartialEq>(
    base: &[T],
    target: &[T],
    config: &IsolationConfig,
) -> Vec<EditOperation> {
    let script = diff(base, target);
    if config.coalesce_replacements {
        coalesce_replacements(&script)
    } else {
        script
    }
}

/// Isolate the deltas between `base` and `target` that make `oracle` fail
///
/// # Errors
/// Returns [`IsolationError::InvalidConfig`] if `config` does not validate.
/// Oracle inconsistencies end the run early and are recorded in the report.
///
/// # Example
/// ```
/// use aislar::config::IsolationConfig;
/// use aislar::delta::{apply, EditOperation};
/// use aislar::oracle::TestResult;
/// use aislar::report::isolate;
///
/// let base = vec![1, 2, 3, 4];
/// let target = vec![1, 0, 3, 4, 5];
///
/// let oracle = |subset: &[EditOperation]| match apply(&base, &target, subset) {
///     Ok(config) if config.contains(&0) => TestResult::Failed,
///     Ok(_) => TestResult::Passed,
///     Err(_) => TestResult::Inconclusive,
/// };
///
/// let report = isolate(&base, &target, oracle, &IsolationConfig::default()).unwrap();
/// assert_eq!(report.final_deltas().len(), 1);
/// ```
pub fn isolate<T, O>(
    base: &[T],
    target: &[T],
    oracle: O,
    config: &IsolationConfig,
) -> Result<IsolationReport, IsolationError>
where
    T: PartialEq,
    O: TestOracle<EditOperation>,
{
    isolate_deltas(&edit_script(base, target, config), oracle, config)
}

/// Run the pipeline over an already computed edit script
pub fn isolate_deltas<O>(
    deltas: &[EditOperation],
    oracle: O,
    config: &IsolationConfig,
) -> Result<IsolationReport, IsolationError>
where
    O: TestOracle<EditOperation>,
{
    config.validate().map_err(IsolationError::InvalidConfig)?;

    let start = Instant::now();
    let mut oracle = CachedOracle::new(oracle, OracleCache::new());

    tracing::info!("isolate: {} deltas", deltas.len());
    let repeat = dd_repeat_deltas(deltas, &mut oracle);

    let mut filtered = None;
    let mut artifacts_removed = 0;
    let mut filter_note = None;

    if !config.filter_artifacts {
        filter_note = Some("disabled".to_string());
    } else if repeat.isolated.len() > 1 {
        match filter_artifacts(&mut oracle, &repeat.isolated, config.artifact_filter_limit) {
            Ok(store) => {
                artifacts_removed = store.artifacts.len();
                filtered = Some(store.retained);
            }
            Err(e) => {
                tracing::warn!("isolate: artifact filter skipped: {}", e);
                filter_note = Some(e.to_string());
            }
        }
    }

    let report = IsolationReport {
        total_deltas: deltas.len(),
        isolated: repeat.isolated,
        residual_pass: repeat.residual_pass,
        filtered,
        artifacts_removed,
        filter_note,
        rounds: repeat.rounds,
        stopped_early: repeat.stopped_by.is_some(),
        stop_reason: repeat.stopped_by.map(|e| e.to_string()),
        oracle_calls: oracle.tests_performed(),
        oracle_calls_uncached: oracle.tests_performed_no_cache(),
        elapsed_ms: start.elapsed().as_millis() as u64,
    };

    tracing::info!(
        "isolate: {} of {} deltas after {} rounds, {} oracle calls",
        report.final_deltas().len(),
        report.total_deltas,
        report.rounds,
        report.oracle_calls_uncached
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::apply;
    use crate::oracle::TestResult;

    fn contains_oracle<'a>(
        base: &'a [char],
        target: &'a [char],
        bad: &'a [char],
    ) -> impl FnMut(&[EditOperation]) -> TestResult + 'a {
        move |subset: &[EditOperation]| match apply(base, target, subset) {
            Ok(config) if bad.iter().any(|b| config.contains(b)) => TestResult::Failed,
            Ok(_) => TestResult::Passed,
            Err(_) => TestResult::Inconclusive,
        }
    }

    #[test]
    fn test_isolate_single_cause() {
        let base: Vec<char> = "abcdef".chars().collect();
        let target: Vec<char> = "abXdeZf".chars().collect();
        let oracle = contains_oracle(&base, &target, &['X']);

        let report = isolate(&base, &target, oracle, &IsolationConfig::default()).unwrap();

        assert_eq!(report.total_deltas, diff(&base, &target).len());
        assert_eq!(report.final_deltas().len(), 1);
        assert_eq!(report.rounds, 1);
        assert!(report.stopped_early);
        assert!(report.oracle_calls >= report.oracle_calls_uncached);

        let lines = report.describe(&base, &target);
        assert!(lines[0].contains("'X'"));
    }

    #[test]
    fn test_isolate_with_coalescing() {
        let base: Vec<char> = "abcdef".chars().collect();
        let target: Vec<char> = "abXdef".chars().collect();
        let oracle = contains_oracle(&base, &target, &['X']);
        let config = IsolationConfig {
            coalesce_replacements: true,
            ..IsolationConfig::default()
        };

        let report = isolate(&base, &target, oracle, &config).unwrap();
        assert_eq!(report.total_deltas, 1);
        assert_eq!(
            report.final_deltas(),
            &[EditOperation::Replacement {
                location_index: 2,
                source_index: 2
            }]
        );
    }

    #[test]
    fn test_filter_runs_on_multiple_causes() {
        let base: Vec<char> = "abcdefgh".chars().collect();
        let target: Vec<char> = "aXcdefYh".chars().collect();
        let oracle = contains_oracle(&base, &target, &['X', 'Y']);

        let report = isolate(&base, &target, oracle, &IsolationConfig::default()).unwrap();
        assert_eq!(report.rounds, 2);
        assert_eq!(report.filtered.as_ref().map(Vec::len), Some(2));
        assert_eq!(report.artifacts_removed, 0);
    }

    #[test]
    fn test_filter_limit_is_reported() {
        let base: Vec<char> = "abcdefgh".chars().collect();
        let target: Vec<char> = "aXcdefYh".chars().collect();
        let oracle = contains_oracle(&base, &target, &['X', 'Y']);
        let config = IsolationConfig {
            artifact_filter_limit: 1,
            ..IsolationConfig::default()
        };

        let report = isolate(&base, &target, oracle, &config).unwrap();
        assert!(report.filtered.is_none());
        assert!(report.filter_note.as_deref().unwrap_or("").contains("exceeds"));
        assert_eq!(report.final_deltas(), report.isolated.as_slice());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = IsolationConfig {
            significance_level: 2.0,
            ..IsolationConfig::default()
        };
        let err = isolate(&[1], &[2], |_: &[EditOperation]| TestResult::Passed, &config)
            .unwrap_err();
        assert!(matches!(err, IsolationError::InvalidConfig(_)));
    }

    #[test]
    fn test_report_string() {
        let base: Vec<char> = "abc".chars().collect();
        let target: Vec<char> = "aXc".chars().collect();
        let oracle = contains_oracle(&base, &target, &['X']);

        let report = isolate(&base, &target, oracle, &IsolationConfig::default()).unwrap();
        let text = report.to_report_string();
        assert!(text.contains("ISOLATED 1 OF 2 DELTAS"));
        assert!(text.contains("Oracle calls"));
    }

    #[test]
    fn test_report_string_nothing_isolated() {
        let report = isolate(
            &[1, 2],
            &[1, 3],
            |_: &[EditOperation]| TestResult::Inconclusive,
            &IsolationConfig::default(),
        )
        .unwrap();

        assert!(report.isolated.is_empty());
        assert!(report.to_report_string().contains("NO FAILURE-INDUCING DELTAS"));
    }

    #[test]
    fn test_report_serializes() {
        let report = isolate(
            &['a'],
            &['b'],
            |subset: &[EditOperation]| {
                if subset.iter().any(|op| !op.consumes_base()) {
                    TestResult::Failed
                } else {
                    TestResult::Passed
                }
            },
            &IsolationConfig::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_deltas"], 2);
        assert_eq!(json["isolated"][0]["operation"], "addition");
    }
}
