//! somato-core
//!
//! Pure domain types for the somato consultation system: the consultation
//! record, the categorized measurement snapshot, and the derived-index
//! shapes handed to the display and narrative collaborators. No I/O — this
//! is the shared vocabulary of the somato system.

pub mod error;
pub mod models;
