// Replaying NDJSON runner events end to end

use std::io::{self, BufReader, Read};
use std::sync::Arc;

use specreport::events::{self, RunnerEvent};
use specreport::report::{MemorySink, SpecReporter, WriterSink};
use specreport::time::FixedClock;
use specreport::ReporterOptions;

const FIXTURE: &str = include_str!("fixtures/boolean_comparison.ndjson");

fn clock() -> Arc<FixedClock> {
    // Fixture startTime plus 2.05 seconds
    Arc::new(FixedClock(
        chrono::DateTime::from_timestamp_millis(1_700_000_002_050).unwrap(),
    ))
}

#[test]
fn test_fixture_parses_into_three_events() {
    // Act
    let events = events::read_events(FIXTURE.as_bytes()).expect("fixture parses");

    // Assert
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], RunnerEvent::RunStart(_)));
    assert!(matches!(events[1], RunnerEvent::TestResult(_)));
    assert!(matches!(events[2], RunnerEvent::RunComplete(_)));
}

#[test]
fn test_replay_inline() {
    // Arrange
    let sink = Arc::new(MemorySink::new());
    let options = ReporterOptions::with_report_format("inline");
    let reporter = SpecReporter::new(Some(&options), sink.clone())
        .unwrap()
        .with_clock(clock());

    // Act
    let count = events::replay(FIXTURE.as_bytes(), &reporter).unwrap();

    // Assert
    assert_eq!(count, 3);
    let lines = sink.lines();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Found 4 test suites");
    assert_eq!(
        lines[2],
        "    ✔ Boolean comparison > should compare two boolean values '(100 ms)"
    );
    assert!(lines[6].contains("Expected bats"));
    assert!(lines[6].contains("Received: true"));
    assert!(lines[7].contains("Expected: false"));
    assert_eq!(lines[8], "Ran 4 tests in 2.050 s");
    assert_eq!(lines[9], "✔ 2 passing");
    assert_eq!(lines[10], "✘ 2 failing");
    assert_eq!(lines.len(), 11);
}

#[test]
fn test_replay_tree_to_writer() {
    // Arrange
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let reporter = SpecReporter::new(None, sink.clone())
        .unwrap()
        .with_clock(clock());

    // Act
    events::replay(FIXTURE.as_bytes(), &reporter).unwrap();
    drop(reporter);
    let sink = Arc::into_inner(sink).expect("reporter dropped");
    let output = String::from_utf8(sink.into_inner()).unwrap();

    // Assert
    assert!(output.starts_with(
        "\nFound 4 test suites\n    Boolean comparison\n      ✔ should compare two boolean values '(100 ms)\n"
    ));
    assert!(output.contains(
        "    Boolean comparison\n      in a perfect world\n        ✘ should fail if true is equal to false '(502 ms)\n"
    ));
    assert!(output.ends_with("Ran 4 tests in 2.050 s\n✔ 2 passing\n✘ 2 failing\n"));
}

#[test]
fn test_replay_from_file() {
    // Arrange
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("run.ndjson");
    std::fs::write(&path, FIXTURE).expect("Failed to write events");
    let sink = Arc::new(MemorySink::new());
    let reporter = SpecReporter::new(None, sink.clone()).unwrap().with_clock(clock());

    // Act
    let file = std::fs::File::open(&path).unwrap();
    events::replay(BufReader::new(file), &reporter).unwrap();

    // Assert
    assert_eq!(sink.lines().len(), 11);
}

#[test]
fn test_malformed_event_keeps_earlier_output() {
    // Arrange
    let sink = Arc::new(MemorySink::new());
    let reporter = SpecReporter::new(None, sink.clone()).unwrap();
    let input = "{\"event\":\"runStart\",\"numTotalTestSuites\":1}\nnot json\n";

    // Act
    let result = events::replay(input.as_bytes(), &reporter);

    // Assert
    assert!(result.unwrap_err().to_string().contains("line 2"));
    assert_eq!(sink.lines(), vec!["", "Found 1 test suites"]);
}

/// Stands in for a pipe whose writer failed after the first event
struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "runner went away"))
    }
}

#[test]
fn test_events_render_before_stream_ends() {
    // Arrange
    let sink = Arc::new(MemorySink::new());
    let reporter = SpecReporter::new(None, sink.clone()).unwrap();
    let first = "{\"event\":\"runStart\",\"numTotalTestSuites\":4}\n".as_bytes();
    let reader = BufReader::new(first.chain(BrokenPipe));

    // Act
    let result = events::replay(reader, &reporter);

    // Assert
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read event line 2")
    );
    assert_eq!(sink.lines(), vec!["", "Found 4 test suites"]);
}
