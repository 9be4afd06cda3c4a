//! Snapshot handler - orchestrates the per-snapshot pass

use posebridge_core::{BridgeResult, PoseMessage, PoseSink, SnapshotEntry};

use crate::{classify, EntityRegistry, EntryKind, PairAccumulator};

/// Pipeline configuration
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Local name of the designated camera-mount sub-frame
    pub mount_frame: String,
    /// Emit the diagnostic dump every this many snapshots
    pub dump_every: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            mount_frame: "cgo3_camera_link".to_string(),
            dump_every: 100,
        }
    }
}

/// Counters over the handler's lifetime
#[derive(Clone, Debug, Default)]
pub struct PipelineStats {
    pub snapshots: u64,
    pub entries: u64,
    pub dispatched: u64,
    pub ignored_frames: u64,
}

/// Snapshot handler
///
/// Owns the identity registry, the snapshot counter, and the outbound sink.
/// `on_snapshot` is the single entry point, invoked synchronously once per
/// simulation snapshot. It takes `&mut self`, so the borrow checker holds
/// the single-caller assumption; a hosting environment that needs
/// cross-thread invocation must wrap the handler in its own lock.
pub struct SnapshotHandler<S: PoseSink> {
    sink: S,
    registry: EntityRegistry,
    config: PipelineConfig,
    snapshot_count: u64,
    stats: PipelineStats,
}

impl<S: PoseSink> SnapshotHandler<S> {
    /// Create a handler with default configuration
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, PipelineConfig::default())
    }

    pub fn with_config(sink: S, mut config: PipelineConfig) -> Self {
        // A zero interval would divide by zero in the throttle check.
        config.dump_every = config.dump_every.max(1);
        SnapshotHandler {
            sink,
            registry: EntityRegistry::new(),
            config,
            snapshot_count: 0,
            stats: PipelineStats::default(),
        }
    }

    /// Process one snapshot: classify entries in order, pair each entity's
    /// body and mount poses, and dispatch one message per completed pair.
    ///
    /// The pair buffers are scoped to this call, so a pair split across
    /// snapshots never dispatches. Entries for one root entity must be
    /// contiguous within the snapshot (the feed contract); the handler does
    /// not buffer across entities. A sink failure propagates immediately
    /// and the remaining entries of this snapshot are not processed.
    pub fn on_snapshot(&mut self, entries: &[SnapshotEntry<'_>]) -> BridgeResult<()> {
        let seq = self.snapshot_count;
        self.snapshot_count += 1;
        self.stats.snapshots = self.snapshot_count;

        let dump = seq % self.config.dump_every == 0;
        let mut pairs = PairAccumulator::new();

        for (index, entry) in entries.iter().enumerate() {
            self.stats.entries += 1;
            if dump {
                Self::dump_entry(index, entry);
            }

            match classify(entry.name, &self.config.mount_frame) {
                EntryKind::Body(name) => {
                    let entity = self.registry.resolve(name);
                    pairs.put_body(entity, entry.pose);
                }
                EntryKind::Mount => pairs.put_mount(entry.pose),
                EntryKind::Other => self.stats.ignored_frames += 1,
            }

            if dump {
                let (body, mount) = pairs.progress();
                tracing::debug!(
                    target: "posebridge::dump",
                    snapshot = seq,
                    body_buffered = body,
                    mount_buffered = mount,
                    "pairing progress"
                );
            }

            if let Some((entity, body, mount)) = pairs.take_pair() {
                let message = PoseMessage {
                    counter: seq,
                    entity,
                    body,
                    mount,
                };
                if dump {
                    tracing::debug!(
                        target: "posebridge::dump",
                        %entity,
                        counter = seq,
                        "dispatching pair"
                    );
                }
                self.sink.send(&message)?;
                self.stats.dispatched += 1;
            }
        }

        Ok(())
    }

    /// Number of snapshots processed so far
    pub fn snapshot_count(&self) -> u64 {
        self.snapshot_count
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn dump_entry(index: usize, entry: &SnapshotEntry<'_>) {
        let p = entry.pose.position;
        let q = entry.pose.orientation;
        tracing::debug!(
            target: "posebridge::dump",
            "local ({index:3}) {:<32} x: {:>7.3} y: {:>7.3} z: {:>7.3} w: {:>7.3} xi: {:>7.3} yj: {:>7.3} zk: {:>7.3}",
            entry.name,
            p.x,
            p.y,
            p.z,
            q.w,
            q.xi,
            q.yj,
            q.zk
        );
    }
}
