use std::fs;

use fruit_list::logging::init_logging;
use tempfile::TempDir;

// The logger is process-global, so this binary holds a single test.
#[test]
fn init_logging_writes_start_event_to_file() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");

    let handle = init_logging("debug", &log_dir).unwrap();
    log::info!("event=logging_smoke status=ok");
    handle.flush();

    let contents: String = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("fruit-list"))
        })
        .map(|path| fs::read_to_string(path).unwrap())
        .collect();

    assert!(contents.contains("event=app_start"), "{contents}");
    assert!(contents.contains("event=logging_smoke"), "{contents}");
}
