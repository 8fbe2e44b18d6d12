//! Security primitives and memory hygiene utilities

pub mod secret;

pub use secret::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
