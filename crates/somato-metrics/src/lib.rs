//! somato-metrics
//!
//! The anthropometric derivation engine. Pure computation — no I/O, no
//! shared state. Converts the raw text fields of a measurement snapshot
//! into derived indices (BMI, circumference ratios, skinfold sums) and
//! classification labels, and assembles the structured input the
//! clinical-summary generator consumes.

pub mod assemble;
pub mod bands;
pub mod context;
pub mod error;
pub mod indices;
pub mod parse;

pub use assemble::derive_indices;
