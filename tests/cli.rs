// End-to-end checks for the capsearch binary.
mod support;

use anyhow::Result;
use capsearch::Category;
use serde_json::{Value, json};
use std::process::Command;
use support::{TempInstall, capsearch_binary, run_command};

fn capsearch() -> Command {
    let mut cmd = Command::new(capsearch_binary());
    cmd.env_remove("CAPSEARCH_ROOT");
    cmd
}

#[test]
fn search_prints_matches_as_json() -> Result<()> {
    let mut cmd = capsearch();
    cmd.args(["search", "terraform"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        json!([{
            "category": "professional",
            "service": "terraform",
            "details": {"path": "/opt/mcp/professional-services/terraform"}
        }])
    );
    Ok(())
}

#[test]
fn search_with_unknown_category_warns_and_widens() -> Result<()> {
    let mut cmd = capsearch();
    cmd.args(["search", "iam", "--category", "storage"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown category"),
        "expected a warning on stderr; stderr was: {stderr}"
    );
    Ok(())
}

#[test]
fn details_for_missing_pair_prints_null_and_fails() -> Result<()> {
    let output = capsearch().args(["details", "ml", "iam"]).output()?;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
    assert!(String::from_utf8_lossy(&output.stderr).contains("ml/iam"));

    let mut cmd = capsearch();
    cmd.args(["details", "scanning", "iam"]);
    let found = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&found.stdout)?;
    assert_eq!(value, json!({"path": "/opt/mcp/gcp_scanner/iam"}));
    Ok(())
}

#[test]
fn list_rejects_unknown_category() -> Result<()> {
    let output = capsearch().args(["list", "--category", "storage"]).output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown category"));

    let mut cmd = capsearch();
    cmd.args(["list", "--category", "ml"]);
    let listed = run_command(cmd)?;
    let stdout = String::from_utf8_lossy(&listed.stdout);
    let keys: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(keys, vec!["ml/pipelines", "ml/models", "ml/training"]);
    Ok(())
}

#[test]
fn index_honors_root_env_and_flag() -> Result<()> {
    let install = TempInstall::new()?;
    install.install(Category::Security, "compliance", b"cis-benchmark")?;

    let mut via_env = capsearch();
    via_env
        .env("CAPSEARCH_ROOT", install.root())
        .args(["index", "--show-content"]);
    let output = run_command(via_env)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["report"]["indexed"], json!(["security/compliance"]));
    assert_eq!(
        value["entries"],
        json!([{"key": "security/compliance", "content": "cis-benchmark"}])
    );

    let mut via_flag = capsearch();
    via_flag.arg("--root").arg(install.root()).arg("index");
    let output = run_command(via_flag)?;
    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["indexed"], json!(["security/compliance"]));
    assert_eq!(report["missing"].as_array().map(Vec::len), Some(14));
    assert_eq!(report["failures"], json!([]));
    Ok(())
}

#[test]
fn verbosity_flag_enables_index_summary() -> Result<()> {
    let install = TempInstall::new()?;
    install.install(Category::Development, "python", b"print('hi')")?;

    let mut quiet = capsearch();
    quiet.arg("--root").arg(install.root()).arg("index");
    let output = run_command(quiet)?;
    assert!(!String::from_utf8_lossy(&output.stderr).contains("content index updated"));

    let mut info = capsearch();
    info.arg("-v").arg("--root").arg(install.root()).arg("index");
    let output = run_command(info)?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("content index updated"),
        "expected the index summary at -v; stderr was: {stderr}"
    );
    assert!(!stderr.contains("DEBUG"), "-v should stop at info; stderr was: {stderr}");

    let mut debug = capsearch();
    debug.arg("-vv").arg("--root").arg(install.root()).arg("index");
    let output = run_command(debug)?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("path missing; skipped"),
        "expected per-entry debug lines at -vv; stderr was: {stderr}"
    );
    Ok(())
}
