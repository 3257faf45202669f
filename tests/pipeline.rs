use std::{fs, path::PathBuf, process::Command};

#[test]
fn aggregate_end_to_end() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("aggregate_end_to_end");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let magnitude_path = test_dir.join("magnitude.json");
    let direction_path = test_dir.join("direction.json");

    fs::write(
        &magnitude_path,
        r#"[
            {"timestamp": "1970-01-01T00:00:00Z", "value": 10.0},
            {"timestamp": "1970-01-01T00:10:00Z", "value": 20.0},
            {"timestamp": "1970-01-01T00:20:00Z", "value": 30.0}
        ]"#,
    )
    .expect("failed to write magnitude series");
    fs::write(
        &direction_path,
        r#"[
            {"timestamp": "1970-01-01T00:00:00Z", "value": 350.0},
            {"timestamp": "1970-01-01T00:10:00Z", "value": 10.0},
            {"timestamp": "1970-01-01T00:20:00Z", "value": 20.0}
        ]"#,
    )
    .expect("failed to write direction series");

    let stdout = run_bin(&[
        "aggregate",
        magnitude_path.to_str().unwrap(),
        direction_path.to_str().unwrap(),
        "--bins",
        "1",
    ]);

    let barbs: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    let barbs = barbs.as_array().expect("output should be an array");
    assert_eq!(barbs.len(), 1);

    let timestamp = barbs[0]["timestamp"].as_str().unwrap();
    let timestamp = chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
    assert_eq!(timestamp.timestamp(), 600);

    let speed = barbs[0]["speed"].as_f64().unwrap();
    assert!(
        (speed - 20.0 * 1000.0 / 3600.0).abs() < 1e-9,
        "speed should be the km/h mean converted to m/s, got {}",
        speed
    );

    let direction = barbs[0]["direction_deg"].as_f64().unwrap();
    assert!(
        (direction - 6.70).abs() < 0.01,
        "direction should be the circular mean, got {}",
        direction
    );

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn zero_bins_is_a_usage_error() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("zero_bins_is_a_usage_error");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let series_path = test_dir.join("series.json");
    fs::write(
        &series_path,
        r#"[{"timestamp": "1970-01-01T00:00:00Z", "value": 1.0}]"#,
    )
    .expect("failed to write series");

    let bin = PathBuf::from(env!("CARGO_BIN_EXE_windbarb"));
    let output = Command::new(bin)
        .args([
            "aggregate",
            series_path.to_str().unwrap(),
            series_path.to_str().unwrap(),
            "--bins",
            "0",
        ])
        .output()
        .expect("failed to execute command");

    assert!(!output.status.success(), "bin count 0 should be rejected");

    fs::remove_dir_all(&test_dir).ok();
}

fn run_bin(args: &[&str]) -> String {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_windbarb"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.to_string()
}
