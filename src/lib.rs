//! # election-ui
//!
//! Leptos + WASM frontend for the student delegate election application.
//! Three independent form workflows, each bound to one endpoint of the
//! Flask voting backend: delegate registration, delegate sign-in, and the
//! voting page.
//!
//! Form logic lives in plain state structs under [`state`] so it can be
//! unit-tested on the host target; pages under [`pages`] are thin Leptos
//! bindings over those structs. Browser-only code (HTTP, `localStorage`,
//! timers) is gated behind the `csr` cargo feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
