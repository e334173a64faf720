use glam::Vec2;
use image::DynamicImage;

use crate::depth::{DepthProvider, DepthState, EstimateError};
use crate::interaction::{self, ClickAction};
use crate::keypoints::KeypointStore;
use crate::overlay::Overlay;

/// One annotation session: the keypoint store, its overlay, the installed
/// depth map and the stream-readiness flag, owned together and passed
/// explicitly instead of living in globals.
pub struct Session<P> {
    provider: P,
    store: KeypointStore,
    overlay: Overlay,
    depth: DepthState,
    ready: bool,
}

impl<P: DepthProvider> Session<P> {
    /// `width`/`height` are the captured frame's pixel dimensions; the
    /// overlay is aligned 1:1 with them.
    pub fn new(provider: P, width: u32, height: u32) -> Session<P> {
        Session {
            provider,
            store: KeypointStore::new(),
            overlay: Overlay::new(width, height),
            depth: DepthState::new(),
            ready: false,
        }
    }

    /// Marks the video stream as started; captures before this are no-ops.
    pub fn set_ready(&mut self) {
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Runs depth inference for `frame` and installs the result.
    ///
    /// Before the stream is ready this is a guarded no-op. An inference
    /// failure propagates to the caller and leaves the store, overlay and
    /// installed depth map untouched; there are no retries, the next capture
    /// simply tries again.
    pub fn capture(&mut self, frame: &DynamicImage) -> Result<(), EstimateError> {
        if !self.ready {
            log::warn!("capture requested before the video stream is ready");
            return Ok(());
        }
        let seq = self.depth.begin_request();
        let map = self.provider.estimate(frame)?;
        self.depth.install(seq, map);
        Ok(())
    }

    /// Handles one click in overlay-local coordinates.
    pub fn handle_click(&mut self, click: Vec2) -> ClickAction {
        let action = interaction::apply_click(&mut self.store, click);
        log::debug!("click at ({}, {}) -> {:?}", click.x, click.y, action);
        let depth = &self.depth;
        match action {
            ClickAction::Added => self.overlay.draw_point(click, |x, y| depth.lookup(x, y)),
            ClickAction::Removed(_) | ClickAction::Cleared => self
                .overlay
                .redraw(self.store.points(), |x, y| depth.lookup(x, y)),
        }
        action
    }

    pub fn store(&self) -> &KeypointStore {
        &self.store
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn depth(&self) -> &DepthState {
        &self.depth
    }
}
