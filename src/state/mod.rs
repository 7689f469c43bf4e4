//! Client-side state machines for the three form workflows.
//!
//! DESIGN
//! ======
//! Each workflow owns one plain struct mutated only through named
//! transition methods, so form logic is testable on the host target
//! without a rendering harness. Pages hold these structs in `RwSignal`s
//! and bind their controls to the transitions.

pub mod password;
pub mod register;
pub mod signin;
pub mod voting;
