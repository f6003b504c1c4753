//! Hierarchical template tree and stochastic sentence generation library.
//!
//! This crate builds a template tree from a flat, ordered list of grouping
//! records and samples from it to produce randomized text sequences:
//! - Flat `GroupRecord` input (typed, or untyped JSON mappings)
//! - A single-pass tree builder with merge semantics for repeated ids
//! - A recursive generator with a controllable content/recursion threshold
//! - An injectable, seedable random source for reproducible output
//!
//! Only the high-level API is exposed publicly. Mutating operations on the
//! tree are kept internal to guarantee it stays read-only after the build.

/// Core data model, tree builder and generation logic.
pub mod model;

/// Error taxonomy shared by the builder and the generator.
pub mod error;
