use super::*;
use crate::mock::integrations_seed;

#[test]
fn summary_counts_outcomes_and_records() {
    let state = integrations_seed();
    let summary = log_summary(&state.logs_for("int-sap"));
    assert_eq!(summary, LogSummary { runs: 3, succeeded: 2, failed: 1, records: 30 });
}

#[test]
fn running_syncs_count_as_runs_only() {
    let state = integrations_seed();
    let summary = log_summary(&state.logs_for("int-moodle"));
    assert_eq!(summary.runs, 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.records, 42);
}

#[test]
fn empty_history_is_all_zero() {
    assert_eq!(log_summary(&[]), LogSummary::default());
}
