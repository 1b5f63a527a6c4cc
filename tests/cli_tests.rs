//! Integration tests for the CLI application
//!
//! These tests verify that the CLI commands work correctly with real data files.

use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

/// Helper to create a small separable CSV dataset
fn write_csv_dataset() -> std::io::Result<NamedTempFile> {
    let mut csv_file = NamedTempFile::with_suffix(".csv")?;
    writeln!(csv_file, "feature1,feature2,label")?;
    writeln!(csv_file, "2.0,1.0,1")?;
    writeln!(csv_file, "-2.0,-1.0,0")?;
    writeln!(csv_file, "1.5,0.8,1")?;
    writeln!(csv_file, "-1.5,-0.8,0")?;
    writeln!(csv_file, "1.8,0.9,1")?;
    writeln!(csv_file, "-1.8,-0.9,0")?;
    csv_file.flush()?;
    Ok(csv_file)
}

fn kridge_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kridge"))
}

#[test]
fn test_train_evaluate_info_cycle() {
    let csv_file = write_csv_dataset().expect("Failed to create dataset");
    let model_dir = TempDir::new().expect("Failed to create temp dir");
    let model_path = model_dir.path().join("model.json");

    // Train
    let output = kridge_cmd()
        .args(["train", "--data"])
        .arg(csv_file.path())
        .args(["--output"])
        .arg(&model_path)
        .args(["-C", "0.01", "--kernel", "rbf", "--gamma", "1.0"])
        .output()
        .expect("Failed to run train command");
    assert!(
        output.status.success(),
        "train failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(model_path.exists(), "model file should be written");

    // Evaluate on the training data
    let output = kridge_cmd()
        .args(["evaluate", "--model"])
        .arg(&model_path)
        .args(["--data"])
        .arg(csv_file.path())
        .output()
        .expect("Failed to run evaluate command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Accuracy"), "evaluate output: {stdout}");

    // Info
    let output = kridge_cmd()
        .arg("info")
        .arg(&model_path)
        .output()
        .expect("Failed to run info command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kernel: rbf"), "info output: {stdout}");
}

#[test]
fn test_predict_to_file() {
    let csv_file = write_csv_dataset().expect("Failed to create dataset");
    let work_dir = TempDir::new().expect("Failed to create temp dir");
    let model_path = work_dir.path().join("model.json");
    let preds_path = work_dir.path().join("predictions.txt");

    let output = kridge_cmd()
        .args(["train", "--data"])
        .arg(csv_file.path())
        .args(["--output"])
        .arg(&model_path)
        .args(["-C", "0.01", "--gamma", "1.0"])
        .output()
        .expect("Failed to run train command");
    assert!(output.status.success());

    let output = kridge_cmd()
        .args(["predict", "--model"])
        .arg(&model_path)
        .args(["--data"])
        .arg(csv_file.path())
        .args(["--output"])
        .arg(&preds_path)
        .output()
        .expect("Failed to run predict command");
    assert!(
        output.status.success(),
        "predict failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let contents = std::fs::read_to_string(&preds_path).expect("Predictions file should exist");
    // Header plus one line per sample
    assert!(contents.contains("# Predictions for 6 samples"));
    assert_eq!(contents.lines().count(), 2 + 6);
}

#[test]
fn test_regression_task() {
    let mut csv_file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
    writeln!(csv_file, "x,y").expect("Failed to write");
    for i in 0..6 {
        let x = i as f64 * 0.5;
        writeln!(csv_file, "{},{}", x, 2.0 * x + 1.0).expect("Failed to write");
    }
    csv_file.flush().expect("Failed to flush");

    let work_dir = TempDir::new().expect("Failed to create temp dir");
    let model_path = work_dir.path().join("reg.json");

    let output = kridge_cmd()
        .args(["train", "--task", "regression", "--data"])
        .arg(csv_file.path())
        .args(["--output"])
        .arg(&model_path)
        .args(["-C", "0.0001", "--gamma", "1.0"])
        .output()
        .expect("Failed to run train command");
    assert!(
        output.status.success(),
        "train failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = kridge_cmd()
        .args(["evaluate", "--model"])
        .arg(&model_path)
        .args(["--data"])
        .arg(csv_file.path())
        .output()
        .expect("Failed to run evaluate command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RMSE"), "evaluate output: {stdout}");
}

#[test]
fn test_unknown_kernel_exits_nonzero() {
    let csv_file = write_csv_dataset().expect("Failed to create dataset");
    let work_dir = TempDir::new().expect("Failed to create temp dir");

    let output = kridge_cmd()
        .args(["train", "--data"])
        .arg(csv_file.path())
        .args(["--output"])
        .arg(work_dir.path().join("model.json"))
        .args(["--kernel", "wavelet"])
        .output()
        .expect("Failed to run train command");

    assert!(!output.status.success());
}
