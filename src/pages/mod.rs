//! Top-level screens, one per route.

pub mod login;
pub mod profile;
pub mod register;
