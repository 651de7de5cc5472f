use std::fs;
use std::path::PathBuf;

use manifest_move::config::xml::load_config_from_xml_path;
use manifest_move::LogLevel;
use tempfile::tempdir;

#[test]
fn full_config_parses_into_every_field() {
    let td = tempdir().unwrap();
    let path = td.path().join("config.xml");
    fs::write(
        &path,
        r#"<config>
  <store_root>/srv/store</store_root>
  <container>bucket</container>
  <prefix>staging/</prefix>
  <manifest_container>meta</manifest_container>
  <manifest_key>manifests/load.json</manifest_key>
  <done_prefix>done/</done_prefix>
  <mandatory>true</mandatory>
  <publickey>key-1</publickey>
  <username>loader</username>
  <command_template>ingest {key}</command_template>
  <load_command>load-engine copy --manifest {manifest}</load_command>
  <log_level>debug</log_level>
  <log_file>/var/log/manifest_move.log</log_file>
</config>"#,
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&path).unwrap();
    assert_eq!(cfg.store_root, PathBuf::from("/srv/store"));
    assert_eq!(cfg.container, "bucket");
    assert_eq!(cfg.prefix, "staging/");
    assert_eq!(cfg.manifest_container.as_deref(), Some("meta"));
    assert_eq!(cfg.manifest_key, "manifests/load.json");
    assert_eq!(cfg.done_prefix, "done/");
    assert!(cfg.mandatory);
    assert_eq!(cfg.public_key.as_deref(), Some("key-1"));
    assert_eq!(cfg.username.as_deref(), Some("loader"));
    assert_eq!(cfg.command_template.as_deref(), Some("ingest {key}"));
    assert_eq!(
        cfg.load_command.as_deref(),
        Some("load-engine copy --manifest {manifest}")
    );
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(
        cfg.log_file,
        Some(PathBuf::from("/var/log/manifest_move.log"))
    );
}

#[test]
fn unset_fields_keep_their_defaults_and_values_are_trimmed() {
    let td = tempdir().unwrap();
    let path = td.path().join("config.xml");
    fs::write(
        &path,
        "<config>\n  <container>  bucket  </container>\n</config>",
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&path).unwrap();
    assert_eq!(cfg.container, "bucket");
    assert_eq!(cfg.prefix, "staging/");
    assert_eq!(cfg.done_prefix, "done/");
    assert!(!cfg.mandatory);
    assert!(cfg.load_command.is_none());
}

#[test]
fn unknown_fields_fail_the_load() {
    let td = tempdir().unwrap();
    let path = td.path().join("config.xml");
    fs::write(
        &path,
        "<config>\n  <container>bucket</container>\n  <not_a_field>x</not_a_field>\n</config>",
    )
    .unwrap();

    let err = load_config_from_xml_path(&path).unwrap_err();
    assert!(err.to_string().contains("parse config xml"));
}
