use image::DynamicImage;
use rerun::RecordingStream;
use std::io::Cursor;

use crate::overlay::{CROSS_ARM_PX, CrossGlyph};

const CROSS_COLOR: (u8, u8, u8, u8) = (0, 255, 0, 255);

pub fn log_frame_as_compressed(
    recording: &RecordingStream,
    topic: &str,
    img: &DynamicImage,
    format: image::ImageFormat,
) {
    let mut bytes: Vec<u8> = Vec::new();

    img.to_rgb8()
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();

    recording
        .log(
            format!("{}/image", topic),
            &rerun::EncodedImage::from_file_contents(bytes),
        )
        .unwrap();
}

/// rerun use top left corner as (0, 0)
pub fn rerun_shift(p2ds: &[(f32, f32)]) -> Vec<(f32, f32)> {
    p2ds.iter().map(|(x, y)| (*x + 0.5, *y + 0.5)).collect()
}

/// Logs the overlay glyphs: two line segments per cross, plus one labeled
/// point above each cross whose depth lookup hit.
pub fn log_overlay(recording: &RecordingStream, topic: &str, glyphs: &[CrossGlyph]) {
    let arm = CROSS_ARM_PX as f32;
    let strips: Vec<rerun::components::LineStrip2D> = glyphs
        .iter()
        .flat_map(|g| {
            let (x, y) = (g.center.x, g.center.y);
            [
                rerun::components::LineStrip2D::from_iter(rerun_shift(&[
                    (x - arm, y),
                    (x + arm, y),
                ])),
                rerun::components::LineStrip2D::from_iter(rerun_shift(&[
                    (x, y - arm),
                    (x, y + arm),
                ])),
            ]
        })
        .collect();
    recording
        .log(
            format!("{}/crosses", topic),
            &rerun::LineStrips2D::new(strips)
                .with_colors([CROSS_COLOR])
                .with_radii([rerun::Radius::new_ui_points(1.0)]),
        )
        .unwrap();

    let (anchors, labels): (Vec<_>, Vec<_>) = glyphs
        .iter()
        .filter_map(|g| {
            let anchor = g.label_anchor();
            g.label
                .as_ref()
                .map(|l| ((anchor.x, anchor.y), l.clone()))
        })
        .unzip();
    let anchors = rerun_shift(&anchors);
    recording
        .log(
            format!("{}/depth_labels", topic),
            &rerun::Points2D::new(anchors)
                .with_colors([CROSS_COLOR])
                .with_labels(labels)
                .with_radii([rerun::Radius::new_ui_points(1.0)]),
        )
        .unwrap();
}
