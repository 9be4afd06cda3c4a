//! posebridge Pipeline - The per-snapshot relay pass
//!
//! Runs once per simulation snapshot, on the order of 250 times per second:
//! 1. Classify each named pose entry (body / mount / other sub-frame)
//! 2. Resolve a stable entity id for body entries
//! 3. Accumulate the body/mount pose pair
//! 4. Dispatch one message per completed pair to the outbound sink
//!
//! The pair buffers live for a single snapshot; the identity registry is the
//! only state that persists across snapshots.

pub mod classify;
pub mod registry;
pub mod pair;
pub mod handler;

pub use classify::*;
pub use registry::*;
pub use pair::*;
pub use handler::*;
