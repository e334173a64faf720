use glam::Vec2;

use crate::keypoints::KeypointStore;

/// Proximity threshold in pixels for treating a click as a hit on an
/// existing keypoint.
pub const KEYPOINT_THRESHOLD: f32 = 10.0;
/// Hard cap on simultaneously marked keypoints.
pub const MAX_KEYPOINTS: usize = 2;

/// The single state transition produced by one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// A keypoint near the click was removed; holds its former index.
    Removed(usize),
    /// The store was full and the click matched nothing, so everything was
    /// discarded. The triggering click adds no point.
    Cleared,
    /// The click was added as a new keypoint.
    Added,
}

/// Maps a raw pointer position to the overlay's coordinate space.
pub fn to_overlay_space(client: Vec2, overlay_origin: Vec2) -> Vec2 {
    client - overlay_origin
}

/// Translates one click into exactly one store transition.
///
/// Removal takes precedence over the full-store reset: a click that is both
/// near an existing point and arrives at capacity removes only that point.
pub fn apply_click(store: &mut KeypointStore, click: Vec2) -> ClickAction {
    if let Some(hit) = store.find_near(click, KEYPOINT_THRESHOLD) {
        store.remove_at(hit);
        ClickAction::Removed(hit)
    } else if store.len() >= MAX_KEYPOINTS {
        store.clear();
        ClickAction::Cleared
    } else {
        store.add(click);
        ClickAction::Added
    }
}
