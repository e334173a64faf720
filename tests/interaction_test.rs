use depth_point_annotation::interaction::{
    ClickAction, KEYPOINT_THRESHOLD, MAX_KEYPOINTS, apply_click, to_overlay_space,
};
use depth_point_annotation::keypoints::KeypointStore;
use glam::Vec2;

#[test]
fn test_click_twice_on_same_spot_adds_then_removes() {
    let mut store = KeypointStore::new();

    assert_eq!(
        apply_click(&mut store, Vec2::new(100.0, 100.0)),
        ClickAction::Added
    );
    assert_eq!(store.points(), &[Vec2::new(100.0, 100.0)]);

    assert_eq!(
        apply_click(&mut store, Vec2::new(100.0, 100.0)),
        ClickAction::Removed(0)
    );
    assert!(store.is_empty());
}

#[test]
fn test_near_click_removes_only_the_matched_point() {
    let mut store = KeypointStore::new();
    apply_click(&mut store, Vec2::new(10.0, 10.0));
    apply_click(&mut store, Vec2::new(200.0, 200.0));

    // Third click lands near the first point: removal, not reset.
    assert_eq!(
        apply_click(&mut store, Vec2::new(10.0, 10.0)),
        ClickAction::Removed(0)
    );
    assert_eq!(store.points(), &[Vec2::new(200.0, 200.0)]);
}

#[test]
fn test_distant_third_click_clears_both() {
    let mut store = KeypointStore::new();
    apply_click(&mut store, Vec2::new(10.0, 10.0));
    apply_click(&mut store, Vec2::new(200.0, 200.0));

    assert_eq!(
        apply_click(&mut store, Vec2::new(400.0, 400.0)),
        ClickAction::Cleared
    );
    // Both are gone and the triggering click added nothing.
    assert!(store.is_empty());
}

#[test]
fn test_removal_takes_precedence_over_reset_at_capacity() {
    let mut store = KeypointStore::new();
    apply_click(&mut store, Vec2::new(10.0, 10.0));
    apply_click(&mut store, Vec2::new(200.0, 200.0));
    assert_eq!(store.len(), MAX_KEYPOINTS);

    // Near the second point while full: only that point goes away.
    assert_eq!(
        apply_click(&mut store, Vec2::new(205.0, 195.0)),
        ClickAction::Removed(1)
    );
    assert_eq!(store.points(), &[Vec2::new(10.0, 10.0)]);
}

#[test]
fn test_store_size_stays_bounded_over_any_click_sequence() {
    let mut store = KeypointStore::new();
    let clicks = [
        (10.0, 10.0),
        (300.0, 40.0),
        (10.0, 10.0),
        (500.0, 500.0),
        (120.0, 80.0),
        (121.0, 81.0),
        (33.0, 33.0),
        (450.0, 12.0),
        (200.0, 200.0),
        (1.0, 1.0),
        (630.0, 470.0),
    ];
    for (x, y) in clicks {
        apply_click(&mut store, Vec2::new(x, y));
        assert!(store.len() <= MAX_KEYPOINTS);
    }
}

#[test]
fn test_threshold_boundary() {
    let mut store = KeypointStore::new();
    apply_click(&mut store, Vec2::new(50.0, 50.0));

    // Exactly at the threshold on one axis still removes.
    let click = Vec2::new(50.0 + KEYPOINT_THRESHOLD, 50.0);
    assert_eq!(apply_click(&mut store, click), ClickAction::Removed(0));
}

#[test]
fn test_to_overlay_space() {
    let client = Vec2::new(340.0, 260.0);
    let origin = Vec2::new(40.0, 60.0);
    assert_eq!(to_overlay_space(client, origin), Vec2::new(300.0, 200.0));
}
