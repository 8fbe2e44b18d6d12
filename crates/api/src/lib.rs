//! Public API traits and types for the mdhash library
//!
//! This crate provides the public API surface shared by every mdhash crate:
//! the top-level error type and the algorithm descriptor traits.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::HashAlgorithm;
