use std::path::PathBuf;

use image::{DynamicImage, ImageReader};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("invalid frame pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("no frames matched the pattern")]
    NoFrames,
    #[error("failed to read frame: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode frame: {0}")]
    Decode(#[from] image::ImageError),
}

/// Produces a still image from a live source on demand.
pub trait FrameSource {
    fn still(&mut self) -> Result<DynamicImage, CaptureError>;
}

fn img_filter(rp: glob::GlobResult) -> Option<PathBuf> {
    if let Ok(p) = rp {
        for ext in &[".png", ".jpg"] {
            if p.as_os_str().to_string_lossy().ends_with(ext) {
                return Some(p);
            }
        }
    }
    None
}

/// Cycles image files matching a glob pattern as simulated webcam stills.
pub struct FolderSource {
    paths: Vec<PathBuf>,
    index: usize,
}

impl FolderSource {
    pub fn new(pattern: &str) -> Result<FolderSource, CaptureError> {
        let mut paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(img_filter).collect();
        paths.sort();
        if paths.is_empty() {
            return Err(CaptureError::NoFrames);
        }
        log::trace!("frame source opened with {} frames", paths.len());
        Ok(FolderSource { paths, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FrameSource for FolderSource {
    fn still(&mut self) -> Result<DynamicImage, CaptureError> {
        if self.index >= self.paths.len() {
            self.index = 0;
        }
        let path = &self.paths[self.index];
        self.index += 1;
        let img = ImageReader::open(path)?.decode()?;
        Ok(img)
    }
}
