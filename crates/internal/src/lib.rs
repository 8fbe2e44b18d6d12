//! Internal utilities for the mdhash library
//!
//! Not part of the public API; shared by the member crates for
//! constant-time comparison and big-endian word serialization.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::ct_eq;
