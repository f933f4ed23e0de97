use scr_overhead::aggregator::{aggregate, calculate_costs};
use scr_overhead::model::{estimate, Model};
use scr_overhead::output::{render_overhead, render_stats, write_report, Report};
use scr_overhead::parser::{parse_entries, timestamp_span};
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;

const LOG: &str = "2024-03-01T08:00:00, event=START\n\
                   2024-03-01T08:00:02, xfer=FETCH, secs=2.000000\n\
                   2024-03-01T08:00:02, event=CHECKPOINT_START\n\
                   2024-03-01T08:00:10, event=CHECKPOINT_END, secs=8.000000\n\
                   2024-03-01T09:30:00, event=COMPUTE_END, secs=5390.000000\n";

#[test]
fn test_stats_report_labels() {
    let summary = calculate_costs(&aggregate(&parse_entries(LOG)));
    let est = estimate(Model::Daly, summary.checkpoint_cost, summary.mtti);
    let text = render_stats(&summary, &est);

    for label in [
        "Starts:",
        "Fetch time (s):",
        "Rebuild time (s):",
        "Compute time (s):",
        "Checkpoint time (s):",
        "Flush checkpoint time (s):",
        "Flush output time (s):",
        "Total time (s): 5400",
        "MTTI (s): 5400",
        "Model: Daly",
        "Checkpoint interval (s):",
        "Target checkpoint overhead:",
    ] {
        assert!(text.contains(label), "missing '{label}' in:\n{text}");
    }
}

#[test]
fn test_overhead_line_parses_back() {
    let summary = calculate_costs(&aggregate(&parse_entries(LOG)));
    let est = estimate(Model::Young, summary.checkpoint_cost, summary.mtti);

    let value: f64 = render_overhead(&est).parse().unwrap();
    assert_eq!(value, est.overhead_percent);
}

#[test]
fn test_report_round_trip_with_span() {
    let entries = parse_entries(LOG);
    let summary = calculate_costs(&aggregate(&entries));
    let est = estimate(Model::Daly, summary.checkpoint_cost, summary.mtti);
    let report = Report::new(
        Path::new("/p/job/.scr/log"),
        entries.len(),
        timestamp_span(&entries),
        summary,
        est,
    );

    let file = NamedTempFile::new().unwrap();
    write_report(&report, file.path()).unwrap();
    let loaded: Report = serde_json::from_reader(File::open(file.path()).unwrap()).unwrap();

    assert_eq!(loaded.entries, 5);
    assert_eq!(loaded.log_file, "/p/job/.scr/log");
    assert_eq!(
        loaded.first_timestamp.as_deref(),
        Some("2024-03-01T08:00:00+00:00")
    );
    assert_eq!(
        loaded.last_timestamp.as_deref(),
        Some("2024-03-01T09:30:00+00:00")
    );
    assert_eq!(loaded.summary.starts, 1);
    assert_eq!(loaded.estimate.model, Model::Daly);
}
