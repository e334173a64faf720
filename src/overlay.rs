use glam::Vec2;
use image::{Rgba, RgbaImage};

/// Half-length of each cross arm in pixels.
pub const CROSS_ARM_PX: i32 = 5;
/// Stroke width of the cross lines in pixels.
pub const CROSS_STROKE_PX: i32 = 2;
/// Vertical gap between a cross center and its depth label anchor.
pub const LABEL_OFFSET_PX: f32 = 8.0;

const CROSS_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// One rendered annotation: a cross center plus an optional depth label.
///
/// The label anchor sits `LABEL_OFFSET_PX` above the center, horizontally
/// centered on it; `label` is `None` when the depth lookup missed.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossGlyph {
    pub center: Vec2,
    pub label: Option<String>,
}

impl CrossGlyph {
    pub fn label_anchor(&self) -> Vec2 {
        Vec2::new(self.center.x, self.center.y - LABEL_OFFSET_PX)
    }
}

/// Transparent annotation layer aligned 1:1 with the source frame.
///
/// Crosses are rasterized into the RGBA layer; labels are kept as positioned
/// text glyphs for the host surface (or rerun) to draw. `redraw` clears both
/// before drawing, so repeated renders of the same store are identical and
/// never accumulate stale glyphs.
#[derive(Debug, Clone)]
pub struct Overlay {
    image: RgbaImage,
    glyphs: Vec<CrossGlyph>,
}

impl Overlay {
    pub fn new(width: u32, height: u32) -> Overlay {
        Overlay {
            image: RgbaImage::new(width, height),
            glyphs: Vec::new(),
        }
    }

    /// Wipes the raster back to fully transparent and forgets all glyphs.
    pub fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
        self.glyphs.clear();
    }

    /// Clears the surface, then draws one cross per keypoint in store order.
    ///
    /// A depth lookup miss draws the cross with no label and is not an error.
    pub fn redraw(
        &mut self,
        keypoints: &[Vec2],
        lookup: impl Fn(i32, i32) -> Option<f32>,
    ) {
        self.clear();
        for p in keypoints {
            self.draw_point(*p, &lookup);
        }
    }

    /// Draws a single cross without clearing first (the add fast path).
    pub fn draw_point(&mut self, p: Vec2, lookup: impl Fn(i32, i32) -> Option<f32>) {
        let x = p.x.round() as i32;
        let y = p.y.round() as i32;
        self.rasterize_cross(x, y);
        let label = lookup(x, y).map(|d| format!("{:.2}", d));
        self.glyphs.push(CrossGlyph { center: p, label });
    }

    fn rasterize_cross(&mut self, cx: i32, cy: i32) {
        for s in 0..CROSS_STROKE_PX {
            let off = s - CROSS_STROKE_PX / 2;
            for d in -CROSS_ARM_PX..=CROSS_ARM_PX {
                self.put(cx + d, cy + off);
                self.put(cx + off, cy + d);
            }
        }
    }

    fn put(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
        {
            self.image.put_pixel(x as u32, y as u32, CROSS_COLOR);
        }
    }

    pub fn glyphs(&self) -> &[CrossGlyph] {
        &self.glyphs
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
