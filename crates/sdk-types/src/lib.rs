//! Unified type definitions shared by the ai-sdk-rs provider crates.

pub mod v2;
