//! posebridge Runtime - Configuration and the relay feed loop
//!
//! The runtime wires the pieces together: it loads configuration,
//! establishes the UDP sender, and drives the snapshot handler from a feed.
//! The bundled feed is synthetic (live-shaped snapshots on a timer); a
//! deployment against a real simulation replaces it with the simulator's
//! own subscription callback.

pub mod config;
pub mod feed;

pub use config::*;
pub use feed::*;
