//! Test utilities for Hash_Py
//!
//! This crate provides known-answer digest vectors and a builder for the
//! line-by-line input an interactive session expects.

pub mod builders;
pub mod vectors;

// Re-export commonly used types
pub use builders::{SaveChoice, SessionScript};
pub use vectors::{KnownVector, known_vectors};
