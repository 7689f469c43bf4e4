//! Wire types and REST helpers for the voting backend.

pub mod api;
pub mod types;
