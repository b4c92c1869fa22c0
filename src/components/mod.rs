//! Reusable view components.

pub mod form_field;
pub mod loading_screen;
