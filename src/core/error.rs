use thiserror::Error;

/// Errors that can occur while parsing, checking or generating a RIF.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RifError {
    /// The normalized input does not have exactly ten characters.
    #[error("invalid RIF length: {actual} characters, expected 10")]
    InvalidLength {
        /// Character count of the normalized input.
        actual: usize,
    },

    /// Wrong prefix or non-digit characters in the body or check digit.
    #[error("invalid RIF format: {value}, expected L999999999")]
    InvalidFormat {
        /// The normalized input.
        value: String,
    },

    /// The trailing digit does not match the computed check digit.
    #[error("invalid check digit: received {received}, expected {expected}")]
    InvalidCheckDigit {
        /// Digit found in the input.
        received: u8,
        /// Digit computed from the prefix and body.
        expected: u8,
    },

    /// A generator was given an out-of-range body, sequence or count.
    #[error("invalid generator input: {0}")]
    InvalidGeneratorInput(String),

    /// A character that is not one of the subject-type codes.
    #[error("unknown RIF prefix '{0}', expected one of V, E, J, P, G, C")]
    UnknownPrefix(char),
}
