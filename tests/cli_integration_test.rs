//! Integration tests for the edcellence binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ASSESSMENT_TOML: &str = indoc! {r#"
    [category_point_allocations]
    Leadership = [70, 50]

    [[process_items]]
    item_id = "1.1"
    category = "Leadership"
    point_value = 70
    deployment_gap = 0.3
    indicators = { approach = 0.8, deployment = 0.75, learning = 0.7, integration = 0.8 }

    [[process_items]]
    item_id = "1.2"
    category = "Leadership"
    point_value = 50
    indicators = { approach = 0.7, deployment = 0.7, learning = 0.6, integration = 0.7 }

    [[results_items]]
    item_id = "7.1"
    category = "Results"
    point_value = 120
    deployment_gap = 0.1
    indicators = { level = 0.85, trend = 0.8, comparison = 0.75, integration = 0.85 }
"#};

const TWO_CATEGORY_CONFIG: &str = indoc! {r#"
    [category_weights]
    Leadership = 0.4
    Results = 0.6
"#};

fn edcellence(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edcellence"));
    cmd.current_dir(dir).env_remove("EDCELLENCE_CONFIG");
    cmd
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("assessment.toml"), ASSESSMENT_TOML).unwrap();
    fs::write(dir.path().join(".edcellence.toml"), TWO_CATEGORY_CONFIG).unwrap();
    dir
}

#[test]
fn assess_writes_json_report() {
    let dir = setup();
    let assert = edcellence(dir.path())
        .args(["assess", "assessment.toml", "--format", "json", "--top", "2"])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let score = json["organizational_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    assert_eq!(json["metadata"]["process_items_count"], 2);
    assert_eq!(json["metadata"]["results_items_count"], 1);
    assert_eq!(json["gap_priorities"].as_array().unwrap().len(), 2);
    assert_eq!(json["gap_priorities"][0]["item_id"], "1.1");
}

#[test]
fn assess_writes_markdown_to_output_file() {
    let dir = setup();
    edcellence(dir.path())
        .args(["assess", "assessment.toml", "-f", "markdown", "-o", "report.md"])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.starts_with("# Excellence Assessment Report"));
    assert!(report.contains("| Leadership |"));
}

#[test]
fn assess_fails_without_matching_category_weights() {
    let dir = setup();
    fs::remove_file(dir.path().join(".edcellence.toml")).unwrap();
    let assert = edcellence(dir.path())
        .args(["assess", "assessment.toml"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("Missing score for category"));
}

#[test]
fn invalid_config_weights_are_a_hard_error() {
    let dir = setup();
    fs::write(
        dir.path().join(".edcellence.toml"),
        "[category_weights]\nLeadership = 0.5\nResults = 0.6\n",
    )
    .unwrap();
    edcellence(dir.path())
        .args(["assess", "assessment.toml"])
        .assert()
        .failure();
}

#[test]
fn batch_reports_each_department() {
    let dir = setup();
    let batch = indoc! {r#"
        {
          "departments": [
            {
              "name": "Mathematics",
              "process_items": [
                {"item_id": "1.1", "category": "Leadership", "point_value": 70,
                 "indicators": {"approach": 0.8, "deployment": 0.75, "learning": 0.7, "integration": 0.8}}
              ],
              "results_items": [
                {"item_id": "7.1", "category": "Results", "point_value": 120,
                 "indicators": {"level": 0.85, "trend": 0.8, "comparison": 0.75, "integration": 0.85}}
              ]
            },
            {
              "name": "History",
              "process_items": [
                {"item_id": "1.1", "category": "Leadership", "point_value": 70,
                 "indicators": {"approach": 0.5, "deployment": 0.5, "learning": 0.5, "integration": 0.5}}
              ]
            }
          ]
        }
    "#};
    fs::write(dir.path().join("batch.json"), batch).unwrap();

    let assert = edcellence(dir.path())
        .args(["batch", "batch.json", "--format", "json", "-j", "2"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let departments = json["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0]["name"], "Mathematics");
    assert!(departments[0]["result"]["organizational_score"].is_number());
    assert_eq!(departments[1]["error"]["code"], "E004");

    edcellence(dir.path())
        .args(["batch", "batch.json", "--strict"])
        .assert()
        .failure();
}

#[test]
fn classify_prints_band() {
    let dir = TempDir::new().unwrap();
    let assert = edcellence(dir.path())
        .args(["classify", "72.5"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Level 4: Integrated"));

    edcellence(dir.path())
        .args(["classify", "101"])
        .assert()
        .failure();
}

#[test]
fn init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    edcellence(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".edcellence.toml").is_file());

    edcellence(dir.path()).arg("init").assert().failure();
    edcellence(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
