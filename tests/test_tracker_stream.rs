use ctrack::pose::{Keypoint, Pose, PoseMapper};
use ctrack::tracker::CentroidTracker;
use ctrack::Detection;

fn det(x: f32, y: f32) -> Detection {
    Detection::new(x, y)
}

fn head_pose(cx: f32, cy: f32) -> Pose {
    let kp = |x: f32, y: f32| Keypoint { x, y, score: 0.9 };

    Pose {
        keypoints: vec![
            kp(cx, cy - 2.0),
            kp(cx - 3.0, cy - 4.0),
            kp(cx + 3.0, cy - 4.0),
            kp(cx - 6.0, cy),
            kp(cx + 6.0, cy),
        ],
        score: 0.8,
        bbox: None,
    }
}

#[test]
fn two_people_crossing_keep_their_ids() {
    // One walks left to right, the other right to left; their paths cross
    // around x=50 but stay separated vertically.
    let mut tracker = CentroidTracker::new(5);

    for step in 0..=20 {
        let t = step as f32 * 5.0;
        let objects = tracker.update(&[det(t, 40.0), det(100.0 - t, 60.0)]);

        assert_eq!(objects.len(), 2);
        assert_eq!(objects[&1].centroid.y, 40.0);
        assert_eq!(objects[&2].centroid.y, 60.0);
    }

    assert_eq!(tracker.objects()[&1].centroid.x, 100.0);
    assert_eq!(tracker.objects()[&2].centroid.x, 0.0);
}

#[test]
fn occlusion_inside_the_grace_period_keeps_the_id() {
    let mut tracker = CentroidTracker::new(3);
    tracker.update(&[det(10.0, 10.0)]);

    for _ in 0..3 {
        tracker.update(&[]);
    }

    let objects = tracker.update(&[det(12.0, 12.0)]);
    assert_eq!(objects.keys().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(objects[&1].missed, 0);
}

#[test]
fn long_gone_object_comes_back_as_somebody_else() {
    let mut tracker = CentroidTracker::new(3);
    tracker.update(&[det(10.0, 10.0)]);

    for _ in 0..4 {
        tracker.update(&[]);
    }
    assert!(tracker.is_empty());

    let objects = tracker.update(&[det(10.0, 10.0)]);
    assert_eq!(objects.keys().copied().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn source_switch_resets_the_identity_space() {
    let mut tracker = CentroidTracker::new(5);
    tracker.update(&[det(10.0, 10.0), det(90.0, 90.0)]);

    tracker.reset();

    let objects = tracker.update(&[det(50.0, 50.0)]);
    assert_eq!(objects.keys().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn pose_stream_end_to_end() {
    // Head-landmark mode, the way a waist-up webcam stream is tracked.
    let mapper = PoseMapper {
        min_score: 0.5,
        use_all_keypoints: false,
    };
    let mut tracker = CentroidTracker::new(5);

    for step in 0..10 {
        let t = step as f32 * 4.0;
        let poses = [head_pose(20.0 + t, 30.0), head_pose(80.0, 30.0)];

        let dets = mapper.detections(&poses).unwrap();
        tracker.update(&dets);
    }

    let objects = tracker.objects();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[&1].centroid.x, 56.0);
    assert_eq!(objects[&2].centroid.x, 80.0);
    assert!(objects[&1].bbox.is_some());
}
