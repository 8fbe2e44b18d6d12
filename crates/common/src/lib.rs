//! Common implementations and shared functionality for the mdhash library
//!
//! Holds the wrappers that keep hash intermediates (message schedules,
//! working registers, pending input) from outliving the computation.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
