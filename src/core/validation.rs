use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{BODY_LENGTH, RIF_LENGTH, SubjectType};

/// Structural diagnostics for a candidate RIF.
///
/// Produced by [`validation_report`]. Errors appear in check order:
/// length, prefix, body, check digit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no check failed.
    pub is_valid: bool,
    /// One human-readable message per failed check.
    pub errors: Vec<String>,
    /// Hints for fixing the input.
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    fn valid() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return write!(f, "valid");
        }
        write!(f, "invalid: {}", self.errors.join("; "))?;
        if !self.suggestions.is_empty() {
            write!(f, " (hint: {})", self.suggestions.join("; "))?;
        }
        Ok(())
    }
}

/// Trim surrounding ASCII whitespace and upper-case ASCII letters.
///
/// Non-ASCII characters pass through unchanged, so they never turn into
/// something that looks like a prefix or digit.
pub fn normalize(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_ascii_uppercase()
}

/// Whether `prefix` is one of the subject-type codes.
pub fn is_valid_prefix(prefix: char) -> bool {
    SubjectType::from_code(prefix).is_some()
}

/// Whether `body` is exactly eight ASCII digits.
pub fn is_valid_body(body: &str) -> bool {
    body.len() == BODY_LENGTH && body.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `suffix` is a single ASCII digit.
pub fn is_valid_suffix(suffix: &str) -> bool {
    suffix.len() == 1 && suffix.bytes().all(|b| b.is_ascii_digit())
}

/// Check length, prefix and character classes without the check digit.
///
/// The input is normalized first, so `" j123456789 "` is structurally valid.
pub fn is_structurally_valid(input: &str) -> bool {
    split_fields(&normalize(input)).is_some()
}

/// Like [`is_structurally_valid`] but accepts any last character.
///
/// Meant for progressive input where the check digit is still being typed.
pub fn is_partially_valid(input: &str) -> bool {
    let rif = normalize(input);
    if rif.chars().count() != RIF_LENGTH {
        return false;
    }
    // ten characters are at least ten bytes, so the byte slice is in bounds
    rif.chars().next().is_some_and(is_valid_prefix)
        && rif.as_bytes()[1..=BODY_LENGTH].iter().all(u8::is_ascii_digit)
}

/// Subject type of a structurally valid input, `None` otherwise.
pub fn extract_type(input: &str) -> Option<SubjectType> {
    split_fields(&normalize(input)).map(|(subject_type, _, _)| subject_type)
}

/// Run every structural check and collect all failures.
///
/// Never fails. Body and check-digit checks are skipped when the input is
/// too short for them to apply.
pub fn validation_report(input: &str) -> ValidationReport {
    let rif = normalize(input);
    let chars: Vec<char> = rif.chars().collect();
    let mut report = ValidationReport::valid();

    if chars.len() != RIF_LENGTH {
        report.fail(format!(
            "length must be {RIF_LENGTH} characters, got {}",
            chars.len()
        ));
    }

    if let Some(&prefix) = chars.first() {
        if !is_valid_prefix(prefix) {
            report.fail(format!(
                "invalid prefix '{prefix}', valid prefixes are: {}",
                prefix_list()
            ));
            report
                .suggestions
                .push("use V, E, J, P, G or C as the first character".into());
        }
    }

    if chars.len() > 1 {
        let end = chars.len().min(1 + BODY_LENGTH);
        let body: String = chars[1..end].iter().collect();
        if !is_valid_body(&body) {
            if body.chars().all(|c| c.is_ascii_digit()) {
                report.fail(format!("body must have exactly {BODY_LENGTH} digits"));
            } else {
                report.fail("body must contain only digits");
            }
        }
    }

    if chars.len() == RIF_LENGTH && !chars[RIF_LENGTH - 1].is_ascii_digit() {
        report.fail("check digit must be a number");
    }

    report
}

/// Split a normalized RIF into type, body digits and trailing digit.
///
/// Returns `None` unless the input is exactly ten ASCII characters of the
/// expected classes.
pub(crate) fn split_fields(rif: &str) -> Option<(SubjectType, [u8; BODY_LENGTH], u8)> {
    let bytes: &[u8; RIF_LENGTH] = rif.as_bytes().try_into().ok()?;
    let subject_type = SubjectType::from_code(char::from(bytes[0]))?;
    let body: [u8; BODY_LENGTH] = bytes[1..=BODY_LENGTH].try_into().ok()?;
    let suffix = bytes[RIF_LENGTH - 1];
    if !body.iter().all(u8::is_ascii_digit) || !suffix.is_ascii_digit() {
        return None;
    }
    Some((subject_type, body, suffix - b'0'))
}

fn prefix_list() -> String {
    SubjectType::ALL
        .iter()
        .map(|t| t.code().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
