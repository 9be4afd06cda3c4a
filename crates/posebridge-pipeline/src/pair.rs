//! Per-snapshot pose pair accumulation

use posebridge_core::{EntityId, Pose};

/// Accumulates one body/mount pair within a single snapshot.
///
/// Single-slot: the feed contract guarantees that all entries for one root
/// entity are contiguous, so at most one pair is ever in progress. A mount
/// that precedes its body within that contiguous block is buffered and
/// pairs when the body lands.
///
/// Occupancy is explicit (`Option`), not inferred from pose values: an
/// all-zero pose is a legitimate simulation value and completes a pair
/// like any other.
#[derive(Debug, Default)]
pub struct PairAccumulator {
    body: Option<(EntityId, Pose)>,
    mount: Option<Pose>,
}

impl PairAccumulator {
    pub fn new() -> Self {
        PairAccumulator::default()
    }

    /// Buffer a body pose for `entity`, replacing any in-progress body
    pub fn put_body(&mut self, entity: EntityId, pose: Pose) {
        self.body = Some((entity, pose));
    }

    /// Buffer a mount pose, replacing any in-progress mount
    pub fn put_mount(&mut self, pose: Pose) {
        self.mount = Some(pose);
    }

    /// Hand back the completed pair and reset both buffers.
    ///
    /// Returns `None` until both buffers are filled. Resetting on
    /// completion keeps a later entity's poses in the same snapshot from
    /// contaminating an already-dispatched pair.
    pub fn take_pair(&mut self) -> Option<(EntityId, Pose, Pose)> {
        if self.body.is_none() || self.mount.is_none() {
            return None;
        }
        let (entity, body) = self.body.take()?;
        let mount = self.mount.take()?;
        Some((entity, body, mount))
    }

    /// Buffer occupancy (body, mount), for diagnostics only
    pub fn progress(&self) -> (bool, bool) {
        (self.body.is_some(), self.mount.is_some())
    }
}
