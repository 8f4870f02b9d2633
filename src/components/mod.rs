//! Page behaviours, one module per concern.

pub mod contact;
pub mod navbar;
pub mod particle_field;
pub mod reveal;
