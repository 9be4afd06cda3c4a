//! posebridge Wire - Datagram layout for outbound pose messages
//!
//! One `PoseMessage` maps to one fixed-size datagram:
//!
//! ```text
//! [version:1][counter:8][entity:8][body pose:56][mount pose:56]
//! ```
//!
//! All multi-byte fields little-endian; each pose is x y z w xi yj zk as
//! f64. Scalars are carried bit-exact; the codec performs no rounding or
//! normalization.

pub mod codec;

pub use codec::*;
