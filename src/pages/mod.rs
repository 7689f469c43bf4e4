//! Top-level routed pages.

pub mod delegates;
pub mod register;
pub mod signin;
