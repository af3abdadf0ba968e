use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::check_digit::check_digit_for;
use super::error::RifError;
use super::types::{BODY_LENGTH, RIF_LENGTH, SubjectType};
use super::validation::{self, ValidationReport, normalize, split_fields};

/// A validated Venezuelan fiscal identifier.
///
/// Only obtainable through [`Rif::parse`] (or the generator), so the check
/// digit always matches the prefix and body. Equality, ordering and hashing
/// compare the normalized raw string.
///
/// Serializes as the 10-character raw string; deserializing runs the same
/// validation as [`Rif::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rif {
    raw: String,
    subject_type: SubjectType,
    check_digit: u8,
}

impl Rif {
    /// Parse and fully validate a RIF.
    ///
    /// Surrounding whitespace and letter case are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RifError::InvalidLength` if the normalized input is not ten
    /// characters, `RifError::InvalidFormat` on a bad prefix or non-digit
    /// body, and `RifError::InvalidCheckDigit` when the trailing digit does
    /// not match.
    pub fn parse(input: &str) -> Result<Self, RifError> {
        let raw = normalize(input);

        let length = raw.chars().count();
        if length != RIF_LENGTH {
            tracing::debug!(rif = %raw, length, "rejected RIF: invalid length");
            return Err(RifError::InvalidLength { actual: length });
        }

        let Some((subject_type, body, received)) = split_fields(&raw) else {
            tracing::debug!(rif = %raw, "rejected RIF: invalid format");
            return Err(RifError::InvalidFormat { value: raw });
        };

        let expected = check_digit_for(subject_type, &body);
        if received != expected {
            tracing::debug!(rif = %raw, received, expected, "rejected RIF: check digit mismatch");
            return Err(RifError::InvalidCheckDigit { received, expected });
        }

        tracing::trace!(rif = %raw, "parsed RIF");
        Ok(Self {
            raw,
            subject_type,
            check_digit: received,
        })
    }

    /// Whether `input` parses as a valid RIF.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Structural check only, see [`validation::is_structurally_valid`].
    pub fn is_valid_format(input: &str) -> bool {
        validation::is_structurally_valid(input)
    }

    /// Structural diagnostics, see [`validation::validation_report`].
    pub fn validate_format(input: &str) -> ValidationReport {
        validation::validation_report(input)
    }

    /// Subject type of a structurally valid input.
    pub fn extract_type(input: &str) -> Option<SubjectType> {
        validation::extract_type(input)
    }

    /// Assemble a RIF from a subject type and an 8-digit body, computing the
    /// check digit. The result is re-parsed before being returned.
    #[cfg_attr(not(feature = "generator"), allow(dead_code))]
    pub(crate) fn assemble(
        subject_type: SubjectType,
        body: &[u8; BODY_LENGTH],
    ) -> Result<Self, RifError> {
        let check_digit = check_digit_for(subject_type, body);
        let mut raw = String::with_capacity(RIF_LENGTH);
        raw.push(subject_type.code());
        raw.extend(body.iter().map(|&b| char::from(b)));
        raw.push(char::from(b'0' + check_digit));
        Self::parse(&raw)
    }

    /// Normalized 10-character string, e.g. `"J000029679"`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Subject type from the prefix.
    pub fn subject_type(&self) -> SubjectType {
        self.subject_type
    }

    /// The 8-digit body with leading zeros, e.g. `"00002967"`.
    pub fn body(&self) -> &str {
        &self.raw[1..=BODY_LENGTH]
    }

    /// Trailing check digit (`0..=9`).
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }
}

impl fmt::Display for Rif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Rif {
    type Err = RifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rif {
    type Error = RifError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rif> for String {
    fn from(rif: Rif) -> Self {
        rif.raw
    }
}

impl AsRef<str> for Rif {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_vectors() {
        let cases = [
            ("V113502963", SubjectType::Natural, "11350296", 3),
            ("G200001100", SubjectType::Government, "20000110", 0),
            ("J000029679", SubjectType::Legal, "00002967", 9),
        ];
        for (input, subject_type, body, digit) in cases {
            let rif = Rif::parse(input).unwrap();
            assert_eq!(rif.raw(), input);
            assert_eq!(rif.subject_type(), subject_type);
            assert_eq!(rif.body(), body);
            assert_eq!(rif.check_digit(), digit);
        }
    }

    #[test]
    fn normalizes_before_parsing() {
        let rif = Rif::parse("  v113502963 ").unwrap();
        assert_eq!(rif.raw(), "V113502963");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Rif::parse("J12345678"),
            Err(RifError::InvalidLength { actual: 9 })
        );
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(matches!(
            Rif::parse("X123456789"),
            Err(RifError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_body() {
        assert!(matches!(
            Rif::parse("J123ABC789"),
            Err(RifError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_check_digit_mismatch() {
        assert_eq!(
            Rif::parse("V113502960"),
            Err(RifError::InvalidCheckDigit {
                received: 0,
                expected: 3
            })
        );
    }

    #[test]
    fn ten_chars_with_multibyte_is_format_error() {
        assert!(matches!(
            Rif::parse("J1234567É9"),
            Err(RifError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn is_valid_swallows_errors() {
        assert!(Rif::is_valid("J000029679"));
        assert!(!Rif::is_valid("J000029670"));
        assert!(!Rif::is_valid("G200001101"));
        assert!(!Rif::is_valid("V123456789"));
        assert!(!Rif::is_valid(""));
    }

    #[test]
    fn communal_shares_legal_digit() {
        assert!(Rif::is_valid("C000029679"));
    }

    #[test]
    fn assemble_computes_digit() {
        let rif = Rif::assemble(SubjectType::Legal, b"12345678").unwrap();
        assert_eq!(rif.raw(), "J123456784");
    }

    #[test]
    fn display_and_from_str() {
        let rif: Rif = "g200001100".parse().unwrap();
        assert_eq!(rif.to_string(), "G200001100");
        assert_eq!(AsRef::<str>::as_ref(&rif), "G200001100");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let rif = Rif::parse("J000029679").unwrap();
        let json = serde_json::to_string(&rif).unwrap();
        assert_eq!(json, "\"J000029679\"");

        let back: Rif = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rif);

        assert!(serde_json::from_str::<Rif>("\"J000029670\"").is_err());
    }
}
