use glam::Vec2;

/// Ordered set of user-marked points, insertion order = click order.
///
/// The store itself performs no capacity or proximity validation; the
/// interaction layer is responsible for keeping the set bounded and
/// consistent before mutating it.
#[derive(Debug, Default, Clone)]
pub struct KeypointStore {
    points: Vec<Vec2>,
}

impl KeypointStore {
    pub fn new() -> KeypointStore {
        KeypointStore { points: Vec::new() }
    }

    /// Appends a keypoint unconditionally.
    pub fn add(&mut self, p: Vec2) {
        self.points.push(p);
    }

    /// Removes the keypoint at `index`, preserving the order of the rest.
    pub fn remove_at(&mut self, index: usize) {
        self.points.remove(index);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Index of the first keypoint within `threshold` of `p` on *both* axes
    /// independently. The hit box is an axis-aligned square, not a circle,
    /// and ties resolve to the lowest insertion-order index.
    pub fn find_near(&self, p: Vec2, threshold: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|kp| (*kp - p).abs().cmple(Vec2::splat(threshold)).all())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}
