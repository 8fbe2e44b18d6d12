//! Constant values shared across mdhash crates

pub mod hash;
pub mod io;
