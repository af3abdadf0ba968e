//! Core RIF types, structural validation and the check-digit algorithm.
//!
//! Parsing runs normalize, structural check, field extraction and
//! check-digit verification in that order. The first failing stage decides
//! the returned [`RifError`].

mod check_digit;
mod error;
mod rif;
mod types;
mod validation;

pub use check_digit::{CHECK_WEIGHTS, MODULO, compute_check_digit};
pub use error::*;
pub use rif::*;
pub use types::*;
pub use validation::*;
