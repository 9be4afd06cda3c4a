//! posebridge Transport - Outbound UDP channel
//!
//! This crate provides:
//! - The UDP pose sender (establish-once, fire-and-forget send)
//! - A blocking receive helper for consumers and tests
//!
//! The sender is deliberately synchronous: the pipeline dispatches from
//! inside the snapshot callback, and a datagram send is its only potential
//! blocking point. Nothing here retries, times out, or buffers.

pub mod udp;

pub use udp::*;
