//! End-to-end pipeline behavior against an in-memory sink

use posebridge_core::{
    BridgeResult, EntityId, Pose, PoseMessage, PoseSink, Position3, Quaternion, SnapshotEntry,
};
use posebridge_pipeline::SnapshotHandler;

#[derive(Default)]
struct VecSink {
    messages: Vec<PoseMessage>,
}

impl PoseSink for VecSink {
    fn send(&mut self, message: &PoseMessage) -> BridgeResult<()> {
        self.messages.push(*message);
        Ok(())
    }
}

fn pose(x: f64) -> Pose {
    Pose::new(
        Position3::new(x, x * 2.0, x * 3.0),
        Quaternion::new(0.5, 0.5, 0.5, 0.5),
    )
}

#[test]
fn two_entities_dispatch_in_appearance_order() {
    let mut handler = SnapshotHandler::new(VecSink::default());

    handler
        .on_snapshot(&[
            SnapshotEntry::new("alpha", pose(1.0)),
            SnapshotEntry::new("alpha::cgo3_camera_link", pose(2.0)),
            SnapshotEntry::new("beta", pose(3.0)),
            SnapshotEntry::new("beta::cgo3_camera_link", pose(4.0)),
        ])
        .unwrap();

    let messages = &handler.sink().messages;
    assert_eq!(messages.len(), 2);

    assert_eq!(messages[0].entity, EntityId::new(1));
    assert_eq!(messages[0].body, pose(1.0));
    assert_eq!(messages[0].mount, pose(2.0));

    assert_eq!(messages[1].entity, EntityId::new(2));
    assert_eq!(messages[1].body, pose(3.0));
    assert_eq!(messages[1].mount, pose(4.0));

    // Both pairs came from the same snapshot.
    assert_eq!(messages[0].counter, messages[1].counter);
}

#[test]
fn no_matching_mount_dispatches_nothing() {
    let mut handler = SnapshotHandler::new(VecSink::default());

    handler
        .on_snapshot(&[
            SnapshotEntry::new("alpha", pose(1.0)),
            SnapshotEntry::new("alpha::other_link", pose(2.0)),
        ])
        .unwrap();

    assert!(handler.sink().messages.is_empty());
    assert_eq!(handler.stats().ignored_frames, 1);
}

#[test]
fn pair_split_across_snapshots_never_dispatches() {
    let mut handler = SnapshotHandler::new(VecSink::default());

    handler
        .on_snapshot(&[SnapshotEntry::new("alpha", pose(1.0))])
        .unwrap();
    handler
        .on_snapshot(&[SnapshotEntry::new("alpha::cgo3_camera_link", pose(2.0))])
        .unwrap();

    assert!(handler.sink().messages.is_empty());
}

#[test]
fn unpaired_entity_does_not_contaminate_the_next() {
    let mut handler = SnapshotHandler::new(VecSink::default());

    // alpha has no mount this snapshot; beta pairs normally.
    handler
        .on_snapshot(&[
            SnapshotEntry::new("alpha", pose(1.0)),
            SnapshotEntry::new("beta", pose(3.0)),
            SnapshotEntry::new("beta::cgo3_camera_link", pose(4.0)),
        ])
        .unwrap();

    let messages = &handler.sink().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].entity, EntityId::new(2));
    assert_eq!(messages[0].body, pose(3.0));
}

#[test]
fn repeated_snapshots_carry_increasing_counters() {
    let mut handler = SnapshotHandler::new(VecSink::default());
    let entries = [
        SnapshotEntry::new("alpha", pose(1.0)),
        SnapshotEntry::new("alpha::cgo3_camera_link", pose(2.0)),
    ];

    for _ in 0..3 {
        handler.on_snapshot(&entries).unwrap();
    }

    let counters: Vec<u64> = handler.sink().messages.iter().map(|m| m.counter).collect();
    assert_eq!(counters, vec![0, 1, 2]);
}

#[test]
fn entity_ids_stay_stable_across_snapshots() {
    let mut handler = SnapshotHandler::new(VecSink::default());

    handler
        .on_snapshot(&[
            SnapshotEntry::new("alpha", pose(1.0)),
            SnapshotEntry::new("alpha::cgo3_camera_link", pose(2.0)),
            SnapshotEntry::new("beta", pose(3.0)),
            SnapshotEntry::new("beta::cgo3_camera_link", pose(4.0)),
        ])
        .unwrap();

    // beta alone in a later snapshot keeps its first-seen id.
    handler
        .on_snapshot(&[
            SnapshotEntry::new("beta", pose(5.0)),
            SnapshotEntry::new("beta::cgo3_camera_link", pose(6.0)),
        ])
        .unwrap();

    let messages = &handler.sink().messages;
    assert_eq!(messages[2].entity, EntityId::new(2));
}

#[test]
fn all_zero_pose_still_dispatches() {
    // Occupancy is explicit; a zero orientation component is not "unset".
    let mut handler = SnapshotHandler::new(VecSink::default());

    handler
        .on_snapshot(&[
            SnapshotEntry::new("alpha", Pose::zero()),
            SnapshotEntry::new("alpha::cgo3_camera_link", Pose::zero()),
        ])
        .unwrap();

    let messages = &handler.sink().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, Pose::zero());
}

#[test]
fn custom_mount_frame_is_honored() {
    use posebridge_pipeline::PipelineConfig;

    let config = PipelineConfig {
        mount_frame: "gimbal_link".to_string(),
        ..Default::default()
    };
    let mut handler = SnapshotHandler::with_config(VecSink::default(), config);

    handler
        .on_snapshot(&[
            SnapshotEntry::new("alpha", pose(1.0)),
            SnapshotEntry::new("alpha::cgo3_camera_link", pose(2.0)),
            SnapshotEntry::new("alpha::gimbal_link", pose(3.0)),
        ])
        .unwrap();

    let messages = &handler.sink().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].mount, pose(3.0));
}
