/*!
 * Script File Tests
 * Loading event scripts from disk
 */

use mmu_sim::simulation::{Event, Script};
use mmu_sim::SimulationError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_script(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write script");
    file
}

#[test]
fn test_load_script_from_file() {
    let file = write_script("100\n1 40\n2 20\n-1 0\n-99999 0\n");
    let script = Script::from_file(file.path()).unwrap();

    assert_eq!(script.partition_size, 100);
    assert_eq!(
        script.events,
        vec![
            Event::Allocate { pid: 1, size: 40 },
            Event::Allocate { pid: 2, size: 20 },
            Event::Deallocate { pid: 1 },
            Event::Coalesce,
        ]
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    match Script::from_file(&missing) {
        Err(SimulationError::Io { path, .. }) => assert!(path.ends_with("nope.txt")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_reports_line() {
    let file = write_script("100\n1 40\n1 forty\n");
    match Script::from_file(file.path()) {
        Err(SimulationError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("forty"));
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_windows_line_endings() {
    let file = write_script("50\r\n3 10\r\n-3\r\n");
    let script = Script::from_file(file.path()).unwrap();
    assert_eq!(script.partition_size, 50);
    assert_eq!(script.events.len(), 2);
}
