use std::{fs, process::Command};

use serial_test::serial;

/// The binary refuses to start without a data directory argument.
#[test]
#[serial]
fn test_missing_data_dir_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_amr-processor"))
        .env_remove("DATA_DIR")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success(), "Process should fail without a data directory");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--data-dir"),
        "Should report the missing argument. Got: {}",
        stderr
    );
}

/// A data directory without contest data is a startup error, not a crash.
#[test]
#[serial]
fn test_unreadable_data_dir_exits_with_error() {
    let empty = std::env::temp_dir().join("amr_cli_empty_data");
    let _ = fs::remove_dir_all(&empty);
    fs::create_dir_all(&empty).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_amr-processor"))
        .args(["--data-dir"])
        .arg(&empty)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");

    fs::remove_dir_all(&empty).ok();

    assert!(!output.status.success(), "Process should fail without contests.json");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load contest data"),
        "Should log the load failure. Got: {}",
        stderr
    );
}

/// End-to-end run over a small fixture directory: every output document
/// lands where the frontend expects it.
#[test]
#[serial]
fn test_fixture_run_writes_all_documents() {
    let root = std::env::temp_dir().join("amr_cli_fixture_run");
    let _ = fs::remove_dir_all(&root);
    let data_dir = root.join("data");
    let out_dir = root.join("out");
    fs::create_dir_all(data_dir.join("standings")).unwrap();
    fs::create_dir_all(data_dir.join("aperfs")).unwrap();

    fs::write(
        data_dir.join("contests.json"),
        r#"[
            {"slug":"wk1","name":"Weekly 1","start_time":"2023-05-06T19:00:00+09:00","end_time":"2023-05-06T23:00:00+09:00","rated":true},
            {"slug":"wk2","name":"Weekly 2","start_time":"2023-05-13T19:00:00+09:00","end_time":"2023-05-13T23:00:00+09:00","rated":true}
        ]"#
    )
    .unwrap();
    fs::write(data_dir.join("standings").join("wk1.json"), r#"["alice","bob","carol"]"#).unwrap();
    fs::write(data_dir.join("standings").join("wk2.json"), r#"["carol","alice","bob"]"#).unwrap();
    fs::write(
        data_dir.join("aperfs").join("wk2.json"),
        r#"{"alice":1800.0,"bob":1200.0,"carol":950.0}"#
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_amr-processor"))
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--out-dir")
        .arg(&out_dir)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute processor");

    assert!(
        output.status.success(),
        "Run failed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for slug in ["wk1", "wk2"] {
        let raw = fs::read_to_string(out_dir.join("perfs").join(format!("{slug}.json"))).unwrap();
        let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(document["borders"].as_array().unwrap().len(), 7);
        assert_eq!(document["perfs"].as_array().unwrap().len(), 3);
    }

    let index_raw = fs::read_to_string(out_dir.join("contests").join("contests.json")).unwrap();
    let index: Vec<serde_json::Value> = serde_json::from_str(&index_raw).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index[0]["slug"], "wk2");

    let ratings_raw = fs::read_to_string(out_dir.join("ratings.json")).unwrap();
    let ratings: serde_json::Value = serde_json::from_str(&ratings_raw).unwrap();
    for user in ["alice", "bob", "carol"] {
        assert_eq!(ratings[user]["contests"], 2);
    }

    fs::remove_dir_all(&root).ok();
}
