//! Text encodings of digest bytes

pub mod hex;
