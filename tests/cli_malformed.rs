use assert_cmd::cargo::CommandCargoExt;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn unknown_flag_is_rejected_by_cli() {
    let out = Command::cargo_bin("manifest_move")
        .unwrap()
        .env("MANIFEST_MOVE_CONFIG", "/nonexistent/config.xml")
        .arg("--not-a-real-flag")
        .output()
        .expect("spawn binary");

    assert!(!out.status.success(), "expected clap to reject the flag");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("unexpected") || stderr.contains("error:"),
        "stderr did not report the unknown flag: {stderr}"
    );
}

#[test]
fn unset_container_fails_the_run() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    let log_path = td.path().join("mm.log");
    fs::write(
        &cfg_path,
        format!(
            "<config>\n  <store_root>{}</store_root>\n  <log_level>quiet</log_level>\n  <log_file>{}</log_file>\n</config>",
            td.path().display(),
            log_path.display()
        ),
    )
    .unwrap();

    let out = Command::cargo_bin("manifest_move")
        .unwrap()
        .env("MANIFEST_MOVE_CONFIG", &cfg_path)
        .output()
        .expect("spawn binary");

    assert!(!out.status.success(), "expected validation failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("container"),
        "stderr did not mention the unset container: {stderr}"
    );
}
