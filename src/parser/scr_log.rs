//! Parser for SCR event log files.
//!
//! A log line looks like:
//!
//! ```text
//! 2024-03-01T10:00:05, jobid=1234, xfer=FLUSH_SYNC, dset=3, secs=12.500000, bytes=1048576.000000, files=4, name="ckpt.3"
//! ```
//!
//! Simple `key=value` fields are found by splitting on `", "`. The quoted
//! `name` and `note` values may themselves contain `", "`, so those (and the
//! leading timestamp) are matched against the whole line instead.

use super::schema::{EntryKind, LogEntry};
use crate::utils::config::{FIELD_SEPARATOR, TIMESTAMP_FORMAT};
use crate::utils::error::LogError;
use chrono::NaiveDateTime;
use log::{debug, info};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// Assigns a captured value to an entry; false if the value does not fit
type FieldSetter = fn(&mut LogEntry, &str) -> bool;

/// Ordered `key=value` patterns tried against each token, first match wins
static TOKEN_FIELDS: LazyLock<Vec<(Regex, FieldSetter)>> = LazyLock::new(|| {
    let fields: [(&str, FieldSetter); 9] = [
        (r"^jobid=(.*)$", |e, v| {
            e.job_id = Some(v.to_string());
            true
        }),
        (r"^event=(.*)$", |e, v| {
            e.kind = Some(EntryKind::Event);
            e.label = Some(v.to_string());
            true
        }),
        (r"^xfer=(.*)$", |e, v| {
            e.kind = Some(EntryKind::Xfer);
            e.label = Some(v.to_string());
            true
        }),
        (r"^from=(.*)$", |e, v| {
            e.from_path = Some(v.to_string());
            true
        }),
        (r"^to=(.*)$", |e, v| {
            e.to_path = Some(v.to_string());
            true
        }),
        (r"^dset=(\d+)$", |e, v| set_parsed(&mut e.dataset_id, v)),
        (r"^secs=(\d+\.\d+)$", |e, v| set_parsed(&mut e.seconds, v)),
        (r"^bytes=(\d+\.\d+)$", |e, v| set_parsed(&mut e.bytes, v)),
        (r"^files=(\d+)$", |e, v| set_parsed(&mut e.file_count, v)),
    ];

    fields
        .into_iter()
        .map(|(pattern, setter)| (Regex::new(pattern).expect("valid field pattern"), setter))
        .collect()
});

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})").expect("valid timestamp pattern")
});

// Greedy prefix: the last marker on the line wins
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^.* name="(.*?)""#).expect("valid name pattern"));

static NOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^.* note="(.*?)""#).expect("valid note pattern"));

/// Parse a value into `slot`, leaving it untouched on overflow
fn set_parsed<T: std::str::FromStr>(slot: &mut Option<T>, value: &str) -> bool {
    match value.parse() {
        Ok(parsed) => {
            *slot = Some(parsed);
            true
        }
        Err(_) => false,
    }
}

/// Parse one raw log line into an entry
///
/// **Public** - main entry point for line parsing
///
/// Never fails: fields whose pattern does not match are left as `None`.
/// If several tokens set the same field, the last one wins.
pub fn parse_line(line: &str) -> LogEntry {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut entry = LogEntry::default();

    for token in line.split(FIELD_SEPARATOR) {
        apply_token(&mut entry, token);
    }

    if let Some(caps) = TIMESTAMP_RE.captures(line) {
        // Matches the shape but may still be an impossible date (month 13)
        entry.timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT).ok();
    }

    if let Some(caps) = NOTE_RE.captures(line) {
        entry.note = Some(caps[1].to_string());
    }

    if let Some(caps) = NAME_RE.captures(line) {
        entry.name = Some(caps[1].to_string());
    }

    entry
}

/// Try each token pattern in order until one assigns a field
///
/// **Private** - internal helper for parse_line
fn apply_token(entry: &mut LogEntry, token: &str) {
    for (pattern, setter) in TOKEN_FIELDS.iter() {
        if let Some(caps) = pattern.captures(token) {
            if setter(entry, &caps[1]) {
                return;
            }
        }
    }
}

/// Parse every line of in-memory log text
///
/// **Public** - same semantics as [`read_log`] without touching the filesystem
pub fn parse_entries(text: &str) -> Vec<LogEntry> {
    text.lines().map(parse_line).collect()
}

/// Read an SCR log file and parse every line, in file order
///
/// **Public** - main entry point for the log reader
///
/// # Errors
/// * `LogError::Open` - the file cannot be opened for reading
/// * `LogError::Read` - an I/O error occurred partway through the file
///
/// Invalid UTF-8 is replaced rather than rejected, so every line yields an entry.
pub fn read_log(path: impl AsRef<Path>) -> Result<Vec<LogEntry>, LogError> {
    let path = path.as_ref();

    debug!("Reading log file: {}", path.display());

    let file = File::open(path).map_err(|source| LogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut entries = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LogError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        // Stray non-UTF-8 bytes are malformed content, not an I/O failure
        entries.push(parse_line(&String::from_utf8_lossy(&buf)));
    }

    info!("Parsed {} log entries from {}", entries.len(), path.display());

    Ok(entries)
}

/// Earliest and latest timestamps seen in the log, if any
///
/// **Public** - used for the report header
pub fn timestamp_span(entries: &[LogEntry]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let mut stamps = entries.iter().filter_map(|e| e.timestamp);
    let first = stamps.next()?;

    Some(stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_full_xfer_line() {
        let line = r#"2024-03-01T10:00:05, jobid=1234, xfer=FLUSH_SYNC, from=/tmp/cache, to=/p/lustre/ckpt.3, dset=3, secs=12.500000, bytes=1048576.000000, files=4, name="ckpt.3""#;
        let entry = parse_line(line);

        let expected_ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 5)
            .unwrap();

        assert_eq!(entry.timestamp, Some(expected_ts));
        assert_eq!(entry.job_id.as_deref(), Some("1234"));
        assert_eq!(entry.kind, Some(EntryKind::Xfer));
        assert_eq!(entry.label(), Some("FLUSH_SYNC"));
        assert_eq!(entry.from_path.as_deref(), Some("/tmp/cache"));
        assert_eq!(entry.to_path.as_deref(), Some("/p/lustre/ckpt.3"));
        assert_eq!(entry.dataset_id, Some(3));
        assert_eq!(entry.seconds, Some(12.5));
        assert_eq!(entry.bytes, Some(1048576.0));
        assert_eq!(entry.file_count, Some(4));
        assert_eq!(entry.name.as_deref(), Some("ckpt.3"));
        assert!(entry.note.is_none());
    }

    #[test]
    fn test_parse_event_line() {
        let entry = parse_line("2024-03-01T10:00:00, event=START");
        assert_eq!(entry.kind, Some(EntryKind::Event));
        assert_eq!(entry.label(), Some("START"));
        assert!(entry.seconds.is_none());
    }

    #[test]
    fn test_quoted_note_keeps_separator() {
        let line = r#"2024-03-01T10:00:00, event=RESTART_FAILURE, secs=1.000000, note="rebuild failed, retrying""#;
        let entry = parse_line(line);
        assert_eq!(entry.note.as_deref(), Some("rebuild failed, retrying"));
        assert_eq!(entry.seconds, Some(1.0));
    }

    #[test]
    fn test_secs_requires_decimal() {
        let entry = parse_line("event=COMPUTE_END, secs=12");
        assert!(entry.seconds.is_none());
        assert_eq!(entry.label(), Some("COMPUTE_END"));
    }

    #[test]
    fn test_integer_overflow_is_ignored() {
        let entry = parse_line("dset=99999999999999999999999");
        assert!(entry.dataset_id.is_none());
    }

    #[test]
    fn test_invalid_date_is_ignored() {
        let entry = parse_line("2024-13-45T10:00:00, event=START");
        assert!(entry.timestamp.is_none());
        assert_eq!(entry.label(), Some("START"));
    }

    #[test]
    fn test_garbage_line_is_empty() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("this is not an scr log line").is_empty());
    }

    #[test]
    fn test_trailing_newline_stripped() {
        let entry = parse_line("event=CHECKPOINT_END, secs=3.250000\r\n");
        assert_eq!(entry.seconds, Some(3.25));
    }

    #[test]
    fn test_timestamp_span() {
        let entries = parse_entries(
            "2024-03-01T10:00:05, event=START\n\
             no timestamp here\n\
             2024-03-01T09:59:00, event=COMPUTE_START\n",
        );
        let (first, last) = timestamp_span(&entries).unwrap();
        assert_eq!(first.to_string(), "2024-03-01 09:59:00");
        assert_eq!(last.to_string(), "2024-03-01 10:00:05");

        assert!(timestamp_span(&parse_entries("event=START")).is_none());
    }
}
