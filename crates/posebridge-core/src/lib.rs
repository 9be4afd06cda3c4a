//! posebridge Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout posebridge:
//! - Identifiers (EntityId)
//! - Pose primitives (Position3, Quaternion, Pose)
//! - The outbound message and sink contract
//! - Error types

pub mod id;
pub mod pose;
pub mod message;
pub mod error;

pub use id::*;
pub use pose::*;
pub use message::*;
pub use error::*;
