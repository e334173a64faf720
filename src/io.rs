use std::io::Write;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::overlay::CrossGlyph;

/// A replayable list of clicks in overlay coordinates, loaded from JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClickScript {
    pub clicks: Vec<[f32; 2]>,
}

impl ClickScript {
    pub fn positions(&self) -> Vec<Vec2> {
        self.clicks.iter().map(|c| Vec2::new(c[0], c[1])).collect()
    }
}

pub fn click_script_from_json(file_path: &str) -> ClickScript {
    let contents =
        std::fs::read_to_string(file_path).expect("Should have been able to read the file");
    serde_json::from_str(&contents).unwrap()
}

#[derive(Serialize)]
struct PointReport {
    x: f32,
    y: f32,
    depth: Option<String>,
}

#[derive(Serialize)]
struct AnnotationReport {
    depth_warm: bool,
    points: Vec<PointReport>,
}

/// Writes the final annotation state as a JSON report.
pub fn write_report(output_path: &str, depth_warm: bool, glyphs: &[CrossGlyph]) {
    let points = glyphs
        .iter()
        .map(|g| PointReport {
            x: g.center.x,
            y: g.center.y,
            depth: g.label.clone(),
        })
        .collect();
    let report = AnnotationReport { depth_warm, points };
    let j = serde_json::to_string_pretty(&report).unwrap();
    let mut file = std::fs::File::create(output_path).unwrap();
    file.write_all(j.as_bytes()).unwrap();
}
