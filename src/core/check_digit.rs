//! Weighted modulo-11 check digit.

use super::error::RifError;
use super::types::{BODY_LENGTH, SubjectType};

/// Weights applied to the body digits, starting from the rightmost digit.
pub const CHECK_WEIGHTS: [u32; BODY_LENGTH] = [2, 3, 4, 5, 6, 7, 2, 3];

/// Modulus of the check-digit sum.
pub const MODULO: u32 = 11;

/// Compute the check digit for `body` under `subject_type`.
///
/// `body` must be exactly eight ASCII digits (leading zeros allowed).
/// The result is always in `0..=9`.
///
/// ```rust
/// use rif::{SubjectType, compute_check_digit};
///
/// assert_eq!(compute_check_digit(SubjectType::Natural, "11350296").unwrap(), 3);
/// assert!(compute_check_digit(SubjectType::Natural, "1135029").is_err());
/// ```
pub fn compute_check_digit(subject_type: SubjectType, body: &str) -> Result<u8, RifError> {
    let digits: [u8; BODY_LENGTH] = body
        .as_bytes()
        .try_into()
        .ok()
        .filter(|d: &[u8; BODY_LENGTH]| d.iter().all(u8::is_ascii_digit))
        .ok_or_else(|| RifError::InvalidFormat {
            value: body.to_owned(),
        })?;
    Ok(check_digit_for(subject_type, &digits))
}

/// Total variant over a body already known to be eight ASCII digits.
pub(crate) fn check_digit_for(subject_type: SubjectType, body: &[u8; BODY_LENGTH]) -> u8 {
    let weighted: u32 = body
        .iter()
        .rev()
        .zip(CHECK_WEIGHTS)
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();
    let sum = weighted + subject_type.weight() * 4;

    // 11 - remainder is 10 or 11 for remainders 1 and 0; both map to 0
    match MODULO - sum % MODULO {
        10 | 11 => 0,
        digit => digit as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(t: SubjectType, body: &str) -> u8 {
        compute_check_digit(t, body).unwrap()
    }

    #[test]
    fn known_vectors() {
        assert_eq!(digit(SubjectType::Natural, "11350296"), 3);
        assert_eq!(digit(SubjectType::Government, "20000110"), 0);
        assert_eq!(digit(SubjectType::Legal, "00002967"), 9);
    }

    #[test]
    fn worked_example_natural() {
        // reversed 6,9,2,0,5,3,1,1 -> 12+27+8+0+30+21+2+3 = 103, +1*4 = 107
        // 107 mod 11 = 8, 11 - 8 = 3
        assert_eq!(digit(SubjectType::Natural, "11350296"), 3);
    }

    #[test]
    fn remainder_zero_maps_to_zero() {
        // 13 + 5*4 = 33, 33 mod 11 = 0
        assert_eq!(digit(SubjectType::Government, "20000110"), 0);
    }

    #[test]
    fn remainder_one_maps_to_zero() {
        // 4*2 + 1*4 = 12, 12 mod 11 = 1
        assert_eq!(digit(SubjectType::Natural, "00000004"), 0);
    }

    #[test]
    fn all_zero_body() {
        // only the type term remains: 4 -> 11 - 4 = 7
        assert_eq!(digit(SubjectType::Natural, "00000000"), 7);
    }

    #[test]
    fn legal_and_communal_agree() {
        for body in ["00002967", "12345678", "99999999"] {
            assert_eq!(
                digit(SubjectType::Legal, body),
                digit(SubjectType::Communal, body)
            );
        }
    }

    #[test]
    fn rejects_short_body() {
        assert!(compute_check_digit(SubjectType::Legal, "1234567").is_err());
    }

    #[test]
    fn rejects_non_digit_body() {
        assert!(compute_check_digit(SubjectType::Legal, "1234A678").is_err());
    }

    #[test]
    fn rejects_multibyte_body() {
        assert!(compute_check_digit(SubjectType::Legal, "1234567é").is_err());
    }
}
