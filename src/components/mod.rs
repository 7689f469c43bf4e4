//! Shared presentational components.

pub mod alert;
pub mod candidate_card;
