//! easepark-rs
//! ===========
//!
//! Umbrella crate for the workspace. Re-exports [`easepark_core`] so the
//! demos under `demos/` can `use easepark_rs::prelude::*`.
pub use easepark_core::*;
