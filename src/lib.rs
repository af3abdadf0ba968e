//! # rif
//!
//! Validation, formatting and generation of Venezuelan fiscal identifiers
//! (RIF, *Registro de Información Fiscal*).
//!
//! A RIF is ten characters: a subject-type prefix (`V`, `E`, `J`, `P`, `G`
//! or `C`), an 8-digit body and a weighted modulo-11 check digit.
//!
//! ## Quick Start
//!
//! ```rust
//! use rif::{Rif, SubjectType, validation_report};
//!
//! let rif = Rif::parse(" j000029679 ").unwrap();
//! assert_eq!(rif.raw(), "J000029679");
//! assert_eq!(rif.subject_type(), SubjectType::Legal);
//! assert_eq!(rif.body(), "00002967");
//! assert_eq!(rif.check_digit(), 9);
//!
//! assert!(!Rif::is_valid("V113502960"));
//!
//! let report = validation_report("X12A");
//! assert!(!report.is_valid);
//! assert_eq!(report.errors.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Subject types, structural validation, check digit, `Rif` |
//! | `format` (default) | Hyphenated, spaced, dotted and other renderings |
//! | `generator` (default) | Random and sequential RIF synthesis |
//! | `registry` | Placeholder hook for an authoritative registry lookup |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "generator")]
pub mod generator;

#[cfg(feature = "registry")]
pub mod registry;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
