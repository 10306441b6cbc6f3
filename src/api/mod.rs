//! HTTP handlers.
//!
//! Handlers return HTML: full pages for `/` and `/gripes`, fragments for
//! everything the front end swaps in place.

mod admin;
mod public;

pub use admin::*;
pub use public::*;
