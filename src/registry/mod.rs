//! Hook for checking a RIF against an authoritative registry.
//!
//! There is no public SENIAT lookup API to integrate with yet, so
//! [`check_registry`] accepts every input. The types are shaped for a
//! future lookup so callers can wire the seam today.
//!
//! # Example
//!
//! ```rust
//! use rif::registry::check_registry;
//!
//! let result = check_registry("J000029679").unwrap();
//! assert!(result.valid);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::normalize;

/// Result of a registry check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryResult {
    /// The normalized RIF that was checked.
    pub rif: String,
    /// Whether the registry reports the RIF as registered.
    pub valid: bool,
    /// Registered name (if the registry returns one).
    pub name: Option<String>,
}

/// Error from a registry lookup.
///
/// Reserved for a real lookup: [`check_registry`] never returns it today.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RegistryError {
    /// The registry could not be reached.
    Unavailable(String),
    /// The registry answered with something unexpected.
    InvalidResponse(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "registry unavailable: {e}"),
            Self::InvalidResponse(e) => write!(f, "registry response invalid: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Check `rif` against the registry.
///
/// Always reports `valid: true`, performs no I/O and never returns an
/// error. The `Result` keeps callers source-compatible with a future
/// network lookup. Run
/// [`Rif::parse`](crate::Rif::parse) first for local validation.
pub fn check_registry(rif: &str) -> Result<RegistryResult, RegistryError> {
    let rif = normalize(rif);
    tracing::debug!(rif = %rif, "registry check (no-op)");
    Ok(RegistryResult {
        rif,
        valid: true,
        name: None,
    })
}
