// Line reader tests: blank lines, malformed-line policies, files

use std::io::{Cursor, Write};

use traffic_counter::models::RecordParseError;
use traffic_counter::reader::{MalformedLinePolicy, ReadError, read_records, read_records_from_path};

const INPUT: &str = "2021-12-01T05:00:00 5\n\
                     2021-12-01T05:30:00 fifteen\n\
                     \n\
                     2021-12-01T06:00:00 30\r\n";

#[test]
fn read_records_parses_each_line() {
    let text = "2021-12-01T05:00:00 5\n2021-12-01T05:30:00 15\n";
    let records = read_records(Cursor::new(text), MalformedLinePolicy::Abort).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].count(), 15);
}

#[test]
fn read_records_ignores_blank_lines_and_crlf() {
    let text = "\n2021-12-01T05:00:00 5\r\n   \n2021-12-01T05:30:00 15";
    let records = read_records(Cursor::new(text), MalformedLinePolicy::Abort).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn read_records_abort_reports_line_number() {
    let err = read_records(Cursor::new(INPUT), MalformedLinePolicy::Abort).unwrap_err();
    match err {
        ReadError::Malformed { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(source, RecordParseError::Count { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_records_skip_drops_bad_lines() {
    let records = read_records(Cursor::new(INPUT), MalformedLinePolicy::Skip).unwrap();
    let counts: Vec<i64> = records.iter().map(|r| r.count()).collect();
    assert_eq!(counts, vec![5, 30]);
}

#[test]
fn read_records_from_path_reads_fixture() {
    let records =
        read_records_from_path("tests/fixtures/record_seek.txt", MalformedLinePolicy::Abort)
            .unwrap();
    assert_eq!(records.len(), 24);
}

#[test]
fn read_records_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2021-12-01T05:00:00 5").unwrap();
    writeln!(file, "2021-12-01T05:30:00 15").unwrap();
    let records = read_records_from_path(file.path(), MalformedLinePolicy::Abort).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn read_records_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_records_from_path(dir.path().join("absent.txt"), MalformedLinePolicy::Skip)
        .unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}

#[test]
fn read_records_skip_drops_non_utf8_lines() {
    let mut input = b"2021-12-01T05:00:00 5\n2021-12-01T05:30:00 ".to_vec();
    input.extend_from_slice(&[0xff, 0xfe]);
    input.extend_from_slice(b"\n2021-12-01T06:00:00 30\n");
    let records = read_records(Cursor::new(input), MalformedLinePolicy::Skip).unwrap();
    let counts: Vec<i64> = records.iter().map(|r| r.count()).collect();
    assert_eq!(counts, vec![5, 30]);
}

#[test]
fn read_records_abort_reports_non_utf8_line() {
    let input: &[u8] = b"2021-12-01T05:00:00 5\n\xff\xfe 7\n";
    let err = read_records(Cursor::new(input), MalformedLinePolicy::Abort).unwrap_err();
    assert!(matches!(
        err,
        ReadError::Malformed {
            line: 2,
            source: RecordParseError::NotUtf8(_)
        }
    ));
}
