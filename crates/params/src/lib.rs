//! Constant values for mdhash digest operations
//!
//! Sizes are in bytes unless the name says otherwise.

#![no_std]

pub mod utils;
