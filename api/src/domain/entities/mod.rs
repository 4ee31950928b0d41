//! Domain entities
//!
//! Value types that live for a single generation request.

pub mod password;

pub use password::{GeneratedPassword, PasswordInput};
