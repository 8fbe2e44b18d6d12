//! Testing utilities and test vectors for the mdhash library
pub mod avalanche;
pub mod fixtures;
pub mod vectors;
