use assert_cmd::cargo::CommandCargoExt;
use std::process::Command;

#[test]
fn print_config_reports_explicit_env_path() {
    let out = Command::cargo_bin("manifest_move")
        .unwrap()
        .env("MANIFEST_MOVE_CONFIG", "/tmp/explicit-config.xml")
        .arg("--print-config")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("/tmp/explicit-config.xml"),
        "stdout did not mention the explicit config path: {stdout}"
    );
}

#[test]
fn print_config_without_env_reports_a_default_path() {
    let out = Command::cargo_bin("manifest_move")
        .unwrap()
        .env_remove("MANIFEST_MOVE_CONFIG")
        .arg("--print-config")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("config"),
        "stdout did not mention a config path: {stdout}"
    );
}
