//! Algorithm descriptor traits

pub mod hash;

pub use hash::HashAlgorithm;
