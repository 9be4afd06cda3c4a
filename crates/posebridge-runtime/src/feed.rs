//! Synthetic snapshot feed
//!
//! Generates snapshots shaped like the live simulation's pose stream: per
//! entity a body entry, an unmatched sub-frame, and the camera-mount
//! sub-frame, contiguous per entity. Entities fly jittered circular tracks
//! so the output is visibly alive on the consumer side.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use posebridge_core::{Pose, Position3, Quaternion, SnapshotEntry};

/// Preformatted entry names for one entity
#[derive(Debug)]
struct FrameNames {
    body: String,
    rotor: String,
    mount: String,
}

/// Synthetic feed state
pub struct SyntheticFeed {
    frames: Vec<FrameNames>,
    poses: Vec<(Pose, Pose, Pose)>,
    tick: u64,
    rng: StdRng,
}

impl SyntheticFeed {
    /// Create a feed of `entities` entities whose mount sub-frame local
    /// name is `mount_frame`
    pub fn new(entities: usize, mount_frame: &str) -> Self {
        Self::with_seed(entities, mount_frame, 0)
    }

    /// Create a feed with a fixed jitter seed, for deterministic tests
    pub fn with_seed(entities: usize, mount_frame: &str, seed: u64) -> Self {
        let frames = (0..entities)
            .map(|i| FrameNames {
                body: format!("typhoon_h480_{i}"),
                rotor: format!("typhoon_h480_{i}::rotor_0"),
                mount: format!("typhoon_h480_{i}::{mount_frame}"),
            })
            .collect();

        let mut feed = SyntheticFeed {
            frames,
            poses: Vec::new(),
            tick: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        feed.regenerate();
        feed
    }

    /// Advance simulation time by one tick and regenerate all poses
    pub fn advance(&mut self) {
        self.tick += 1;
        self.regenerate();
    }

    /// Current snapshot, entries contiguous per entity in a fixed order
    pub fn entries(&self) -> Vec<SnapshotEntry<'_>> {
        self.frames
            .iter()
            .zip(&self.poses)
            .flat_map(|(names, (body, rotor, mount))| {
                [
                    SnapshotEntry::new(&names.body, *body),
                    SnapshotEntry::new(&names.rotor, *rotor),
                    SnapshotEntry::new(&names.mount, *mount),
                ]
            })
            .collect()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn regenerate(&mut self) {
        let t = self.tick as f64 / 250.0;
        let count = self.frames.len();

        self.poses = (0..count)
            .map(|i| {
                let phase = i as f64 * std::f64::consts::TAU / count.max(1) as f64;
                let angle = t * 0.5 + phase;
                let wobble = self.rng.gen_range(-0.01..=0.01);

                let center = Position3::new(
                    10.0 * angle.cos(),
                    10.0 * angle.sin(),
                    5.0 + i as f64 + wobble,
                );
                let heading = Quaternion::new((angle / 2.0).cos(), 0.0, 0.0, (angle / 2.0).sin());

                let body = Pose::new(center, heading);
                let rotor = Pose::new(
                    Position3::new(center.x + 0.3, center.y, center.z + 0.05),
                    heading,
                );
                let mount = Pose::new(
                    Position3::new(center.x, center.y, center.z - 0.2),
                    heading,
                );
                (body, rotor, mount)
            })
            .collect();
    }
}
