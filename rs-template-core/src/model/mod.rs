//! Top-level module for the template generation system.
//!
//! This crate provides a hierarchical template sampler, including:
//! - Flat input records (`GroupRecord`) with opaque identifiers (`GroupId`)
//! - An arena-backed tree of content groups (`TemplateTree`, `TemplateNode`)
//! - A single-pass tree builder (`TemplateTreeBuilder`)
//! - A recursive stochastic generator (`TemplateGenerator`)

/// Flat input records and group identifiers.
///
/// Exposes the typed `GroupRecord` struct, the `GroupId` identifier
/// (integer or string) and untyped JSON ingestion helpers.
pub mod record;

/// A single node of the template tree.
///
/// Tracks content alternatives, exclusively-owned children and a
/// bookkeeping parent reference. Mutation is crate-internal.
pub mod node;

/// The aggregate tree structure (arena plus id lookup index).
///
/// Owns every node and maps each group id to its node for O(1)
/// lookup from any starting point.
pub mod tree;

/// Single-pass construction of a `TemplateTree` from ordered records.
///
/// Handles merge semantics for repeated ids, duplicate-link suppression
/// and validation of declared children.
pub mod builder;

/// High-level interface for sampling text from a built tree.
///
/// Exposes threshold control, injectable random sources and the
/// one-call `generate_template` entry point.
pub mod generator;
