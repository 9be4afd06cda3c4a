//! Outbound message and snapshot input records

use crate::{BridgeResult, EntityId, Pose};

/// One named entry in a simulation snapshot.
///
/// Entries are borrowed from the caller for the duration of the snapshot
/// callback; the pipeline never retains them.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotEntry<'a> {
    /// Entry name; a root entity carries no `::` scope delimiter,
    /// a sub-frame is `entity::frame`
    pub name: &'a str,
    /// Pose as reported by the simulation
    pub pose: Pose,
}

impl<'a> SnapshotEntry<'a> {
    pub fn new(name: &'a str, pose: Pose) -> Self {
        Self { name, pose }
    }
}

/// The unit dispatched per completed body/mount pair.
///
/// Created fresh for each pair and handed to the sink by reference;
/// never buffered or retained by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseMessage {
    /// Index of the snapshot that produced this message; all pairs
    /// dispatched from one snapshot share it
    pub counter: u64,
    /// Registry identity of the root entity
    pub entity: EntityId,
    /// Body pose of the root entity
    pub body: Pose,
    /// Pose of the matched camera-mount sub-frame
    pub mount: Pose,
}

/// Outbound sink for completed pose pairs.
///
/// One send call per pair, synchronous with the snapshot-processing pass.
/// Fire-and-forget: implementations do not retry, buffer, or batch, and a
/// failure propagates to the snapshot handler's caller.
pub trait PoseSink {
    fn send(&mut self, message: &PoseMessage) -> BridgeResult<()>;
}
