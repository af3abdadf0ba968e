//! Synthesis of valid RIFs for fixtures and testing.
//!
//! Every generated identifier goes through [`Rif::parse`] before it is
//! returned, so the output always validates.
//!
//! # Example
//!
//! ```rust
//! use rif::{Rif, SubjectType};
//! use rif::generator::RifGenerator;
//!
//! let mut generator = RifGenerator::seeded(42);
//! let rif = generator.generate(Some(SubjectType::Natural));
//! assert!(Rif::is_valid(rif.raw()));
//!
//! let seq = generator.sequential(123, Some(SubjectType::Government)).unwrap();
//! assert_eq!(seq.raw(), "G000001238");
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::{BODY_LENGTH, Rif, RifError, SubjectType};

/// Largest body value (and sequence number) a RIF can carry.
pub const MAX_BODY: u32 = 99_999_999;

/// Largest count accepted by [`RifGenerator::generate_multiple`].
pub const MAX_BULK_COUNT: usize = 1000;

/// Subject type used when body and sequence modes are given none.
pub const DEFAULT_TYPE: SubjectType = SubjectType::Legal;

/// RIF generator backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RifGenerator<R = StdRng> {
    rng: R,
}

impl RifGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible generator: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RifGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RifGenerator<R> {
    /// Generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Random RIF with a body in `1..=99999999`.
    ///
    /// Picks a uniformly random subject type when `subject_type` is `None`.
    pub fn generate(&mut self, subject_type: Option<SubjectType>) -> Rif {
        let subject_type = subject_type.unwrap_or_else(|| self.random_type());
        loop {
            let body = pad_body(self.rng.gen_range(1..=MAX_BODY));
            match Rif::assemble(subject_type, &body) {
                Ok(rif) => {
                    tracing::trace!(rif = %rif, "generated RIF");
                    return rif;
                }
                Err(e) => tracing::warn!(error = %e, "generated RIF failed validation, retrying"),
            }
        }
    }

    /// RIF for an explicit 8-digit body (value at least 1).
    ///
    /// Uses [`DEFAULT_TYPE`] when `subject_type` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `RifError::InvalidGeneratorInput` unless `body` is exactly
    /// eight digits and not all zeros.
    pub fn from_body(
        &self,
        body: &str,
        subject_type: Option<SubjectType>,
    ) -> Result<Rif, RifError> {
        let digits: [u8; BODY_LENGTH] = body
            .as_bytes()
            .try_into()
            .ok()
            .filter(|d: &[u8; BODY_LENGTH]| d.iter().all(u8::is_ascii_digit))
            .filter(|d| d.iter().any(|&b| b != b'0'))
            .ok_or_else(|| {
                RifError::InvalidGeneratorInput(format!(
                    "body must be exactly {BODY_LENGTH} digits and at least 1, got '{body}'"
                ))
            })?;
        Rif::assemble(subject_type.unwrap_or(DEFAULT_TYPE), &digits)
    }

    /// RIF whose body is `sequence` zero-padded to eight digits.
    ///
    /// # Errors
    ///
    /// Returns `RifError::InvalidGeneratorInput` if `sequence` is outside
    /// `1..=99999999`.
    pub fn sequential(
        &self,
        sequence: u32,
        subject_type: Option<SubjectType>,
    ) -> Result<Rif, RifError> {
        if !(1..=MAX_BODY).contains(&sequence) {
            return Err(RifError::InvalidGeneratorInput(format!(
                "sequence must be between 1 and {MAX_BODY}, got {sequence}"
            )));
        }
        Rif::assemble(subject_type.unwrap_or(DEFAULT_TYPE), &pad_body(sequence))
    }

    /// `count` independent random RIFs.
    ///
    /// # Errors
    ///
    /// Returns `RifError::InvalidGeneratorInput` if `count` is outside
    /// `1..=1000`.
    pub fn generate_multiple(
        &mut self,
        count: usize,
        subject_type: Option<SubjectType>,
    ) -> Result<Vec<Rif>, RifError> {
        if !(1..=MAX_BULK_COUNT).contains(&count) {
            return Err(RifError::InvalidGeneratorInput(format!(
                "count must be between 1 and {MAX_BULK_COUNT}, got {count}"
            )));
        }
        Ok((0..count).map(|_| self.generate(subject_type)).collect())
    }

    /// One random RIF per subject type, in [`SubjectType::ALL`] order.
    pub fn one_of_each_type(&mut self) -> Vec<Rif> {
        SubjectType::ALL
            .into_iter()
            .map(|t| self.generate(Some(t)))
            .collect()
    }

    fn random_type(&mut self) -> SubjectType {
        *SubjectType::ALL
            .choose(&mut self.rng)
            .unwrap_or(&DEFAULT_TYPE)
    }
}

/// Convenience constructors using a fresh entropy-seeded generator.
impl Rif {
    /// Random valid RIF, see [`RifGenerator::generate`].
    pub fn generate(subject_type: Option<SubjectType>) -> Rif {
        RifGenerator::new().generate(subject_type)
    }

    /// Several random valid RIFs, see [`RifGenerator::generate_multiple`].
    pub fn generate_multiple(
        count: usize,
        subject_type: Option<SubjectType>,
    ) -> Result<Vec<Rif>, RifError> {
        RifGenerator::new().generate_multiple(count, subject_type)
    }

    /// Sequential RIF, see [`RifGenerator::sequential`].
    pub fn generate_sequential(
        sequence: u32,
        subject_type: Option<SubjectType>,
    ) -> Result<Rif, RifError> {
        RifGenerator::new().sequential(sequence, subject_type)
    }
}

fn pad_body(value: u32) -> [u8; BODY_LENGTH] {
    let mut body = [b'0'; BODY_LENGTH];
    let mut rest = value;
    for slot in body.iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    body
}
