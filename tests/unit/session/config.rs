use super::*;

#[test]
fn defaults_match_export_contract() {
    let cfg = StudioConfig::default();
    cfg.validate().unwrap();
    assert_eq!((cfg.still.width, cfg.still.height), (3840, 2160));
    assert_eq!(cfg.fps, 24);
    assert_eq!(cfg.still_path(), PathBuf::from("./cinematic_still_4k.png"));
    assert_eq!(cfg.clip_path(), PathBuf::from("./broll.webm"));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = StudioConfig::from_json_str(
        r#"{ "preview": { "width": 320, "height": 180 }, "out_dir": "renders" }"#,
    )
    .unwrap();
    assert_eq!(cfg.preview.width, 320);
    assert_eq!(cfg.fps, 24);
    assert_eq!(cfg.clip_path(), PathBuf::from("renders/broll.webm"));
}

#[test]
fn unknown_fields_are_serde_errors() {
    let err = StudioConfig::from_json_str(r#"{ "fsp": 30 }"#).unwrap_err();
    assert!(matches!(err, BrollError::Serde(_)));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(StudioConfig::from_json_str(r#"{ "fps": 0 }"#).is_err());
    assert!(
        StudioConfig::from_json_str(r#"{ "preview": { "width": 0, "height": 10 } }"#).is_err()
    );
    assert!(StudioConfig::from_json_str(r#"{ "clip_file_name": "a/b.webm" }"#).is_err());
    assert!(StudioConfig::from_json_str(r#"{ "still_file_name": " " }"#).is_err());
}

#[test]
fn from_path_reads_files() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let p = dir.join("studio.json");
    std::fs::write(&p, r#"{ "fps": 30 }"#).unwrap();
    assert_eq!(StudioConfig::from_path(&p).unwrap().fps, 30);
    assert!(StudioConfig::from_path(&dir.join("missing.json")).is_err());
}
