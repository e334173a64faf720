use depth_point_annotation::io::{ClickScript, click_script_from_json, write_report};
use depth_point_annotation::overlay::CrossGlyph;
use glam::Vec2;

#[test]
fn test_click_script_round_trip() {
    let dir = std::env::temp_dir().join("dpan_io_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("clicks.json");
    std::fs::write(&path, r#"{"clicks": [[100.0, 100.0], [300.5, 200.25]]}"#).unwrap();

    let script = click_script_from_json(path.to_str().unwrap());
    assert_eq!(
        script.positions(),
        vec![Vec2::new(100.0, 100.0), Vec2::new(300.5, 200.25)]
    );
}

#[test]
fn test_write_report() {
    let dir = std::env::temp_dir().join("dpan_io_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("report.json");

    let glyphs = [
        CrossGlyph {
            center: Vec2::new(10.0, 20.0),
            label: Some("3.14".to_string()),
        },
        CrossGlyph {
            center: Vec2::new(30.0, 40.0),
            label: None,
        },
    ];
    write_report(path.to_str().unwrap(), true, &glyphs);

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["depth_warm"], true);
    assert_eq!(parsed["points"][0]["depth"], "3.14");
    assert_eq!(parsed["points"][1]["depth"], serde_json::Value::Null);
}

#[test]
fn test_click_script_positions_empty() {
    let script = ClickScript { clicks: vec![] };
    assert!(script.positions().is_empty());
}
