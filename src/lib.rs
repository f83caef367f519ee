//! demodash-rs
//!
//! Umbrella crate for the workspace. It re-exports [`demodash_core`] so the
//! demos under `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example filter_walkthrough
//! cargo run --example error_handling
//! ```
pub use demodash_core::*;
