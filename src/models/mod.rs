//! Data models for the gripe backend.
//!
//! These mirror the on-disk JSON documents exactly.

mod gripe;
mod submission;

pub use gripe::*;
pub use submission::*;
