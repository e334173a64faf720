use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("depth inference failed: {0}")]
    Inference(String),
    #[error("input image has zero area")]
    EmptyImage,
}

/// Per-pixel scalar depth estimate for one captured frame.
///
/// Lookups outside the image bounds miss instead of panicking; a miss is the
/// normal outcome for a stale or absent map and is never an error.
#[derive(Debug, Clone)]
pub struct DepthMap {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl DepthMap {
    /// `values` is row-major, length `width * height`.
    pub fn new(width: u32, height: u32, values: Vec<f32>) -> DepthMap {
        assert_eq!(values.len(), (width * height) as usize);
        DepthMap {
            width,
            height,
            values,
        }
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> f32) -> DepthMap {
        let values = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        DepthMap::new(width, height, values)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn lookup(&self, x: i32, y: i32) -> Option<f32> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Latest installed depth map plus a monotonic sequence guard.
///
/// Inference has no cancellation: every capture starts a new request and a
/// late result simply arrives whenever it arrives. `install` rejects any
/// result older than the installed one so a stale inference can never
/// overwrite a newer map, which keeps a threaded host single-writer safe.
#[derive(Debug, Default)]
pub struct DepthState {
    map: Option<DepthMap>,
    installed_seq: u64,
    next_seq: u64,
}

impl DepthState {
    pub fn new() -> DepthState {
        DepthState::default()
    }

    /// Hands out the sequence number for the next inference request.
    pub fn begin_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Installs `map` unless a newer result is already in place.
    pub fn install(&mut self, seq: u64, map: DepthMap) -> bool {
        if seq < self.installed_seq {
            log::debug!(
                "discarding stale depth map (seq {} < installed {})",
                seq,
                self.installed_seq
            );
            return false;
        }
        self.installed_seq = seq;
        self.map = Some(map);
        true
    }

    /// Whether any inference has completed yet.
    pub fn is_warm(&self) -> bool {
        self.map.is_some()
    }

    /// Depth at an integer pixel coordinate; misses when no map is installed
    /// or the coordinate is out of range.
    pub fn lookup(&self, x: i32, y: i32) -> Option<f32> {
        self.map.as_ref().and_then(|m| m.lookup(x, y))
    }
}

/// External depth-estimation model, as seen by the core.
pub trait DepthProvider {
    fn estimate(&self, img: &DynamicImage) -> Result<DepthMap, EstimateError>;
}

/// Stand-in provider that derives a pseudo-depth from pixel brightness.
///
/// Useful for demos and tests; real deployments implement [`DepthProvider`]
/// over an actual depth-estimation model.
#[derive(Debug, Clone, Copy)]
pub struct LumaDepthProvider {
    /// Depth assigned to full brightness, in arbitrary units.
    pub scale: f32,
}

impl Default for LumaDepthProvider {
    fn default() -> LumaDepthProvider {
        LumaDepthProvider { scale: 10.0 }
    }
}

impl DepthProvider for LumaDepthProvider {
    fn estimate(&self, img: &DynamicImage) -> Result<DepthMap, EstimateError> {
        if img.width() == 0 || img.height() == 0 {
            return Err(EstimateError::EmptyImage);
        }
        let gray = img.to_luma8();
        let values = gray
            .as_raw()
            .iter()
            .map(|l| *l as f32 / 255.0 * self.scale)
            .collect();
        Ok(DepthMap::new(gray.width(), gray.height(), values))
    }
}
