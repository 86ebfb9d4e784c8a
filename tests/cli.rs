use std::{fs, process::Command};

const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" tiledversion="1.10.2" orientation="orthogonal" renderorder="right-down" width="4" height="3" tilewidth="32" tileheight="32" infinite="0" nextlayerid="2" nextobjectid="2">
 <objectgroup id="1" name="Hitboxes">
  <object id="1" x="0" y="0" width="8" height="8"/>
 </objectgroup>
</map>
"#;

fn tmx2json() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tmx2json"))
}

#[test]
fn missing_input_reports_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = tmx2json()
        .arg(dir.path().join("Tiled_files/maps/nope.tmx"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.tmx"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_argument_fails() {
    let output = tmx2json().output().unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn broken_config_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let maps = dir.path().join("Tiled_files/maps");
    let assets = dir.path().join("Roshamboogie/assets/maps");
    fs::create_dir_all(&maps).unwrap();
    fs::create_dir_all(&assets).unwrap();

    let input = maps.join("level1.tmx");
    fs::write(&input, MAP).unwrap();
    let config = dir.path().join("conv.json");
    fs::write(&config, "{ not json").unwrap();

    let output = tmx2json().arg("-c").arg(&config).arg(&input).output().unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!assets.join("level1.json").exists());
}

#[test]
fn converts_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let maps = dir.path().join("Tiled_files/maps");
    let assets = dir.path().join("Roshamboogie/assets/maps");
    fs::create_dir_all(&maps).unwrap();
    fs::create_dir_all(&assets).unwrap();

    let input = maps.join("level1.tmx");
    fs::write(&input, MAP).unwrap();

    let output = tmx2json().arg("--strict").arg(&input).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(assets.join("level1.json")).unwrap()).unwrap();
    assert_eq!(json["width"], 4);
    assert_eq!(json["boundaries"][0][2], serde_json::json!({ "x": 8.0, "y": 8.0 }));
}
