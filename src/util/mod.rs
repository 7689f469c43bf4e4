//! Browser glue: token storage and timers.

pub mod auth_token;
pub mod timer;
