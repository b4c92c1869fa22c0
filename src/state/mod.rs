//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `profile`, form models) so it
//! stays pure and natively testable; components wrap these models in
//! `RwSignal`s provided via context.

pub mod profile;
pub mod register;
pub mod session;
