use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::RifError;

/// Number of characters in a normalized RIF.
pub const RIF_LENGTH: usize = 10;

/// Number of digits in the RIF body.
pub const BODY_LENGTH: usize = 8;

/// Subject type denoted by the first character of a RIF.
///
/// Serializes as its one-letter code (`"V"`, `"J"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectType {
    /// `V`: Venezuelan natural person.
    #[serde(rename = "V")]
    Natural,
    /// `E`: foreigner holding a Venezuelan identity card.
    #[serde(rename = "E")]
    ForeignId,
    /// `J`: legal entity (company, association).
    #[serde(rename = "J")]
    Legal,
    /// `P`: foreigner identified by passport.
    #[serde(rename = "P")]
    ForeignPassport,
    /// `G`: government body.
    #[serde(rename = "G")]
    Government,
    /// `C`: communal council.
    #[serde(rename = "C")]
    Communal,
}

impl SubjectType {
    /// All subject types in declaration order.
    pub const ALL: [SubjectType; 6] = [
        Self::Natural,
        Self::ForeignId,
        Self::Legal,
        Self::ForeignPassport,
        Self::Government,
        Self::Communal,
    ];

    /// One-letter prefix code.
    pub const fn code(self) -> char {
        match self {
            Self::Natural => 'V',
            Self::ForeignId => 'E',
            Self::Legal => 'J',
            Self::ForeignPassport => 'P',
            Self::Government => 'G',
            Self::Communal => 'C',
        }
    }

    /// Weight contributed to the check-digit sum (multiplied by 4).
    ///
    /// Legal and Communal both carry weight 3.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Natural => 1,
            Self::ForeignId => 2,
            Self::Legal => 3,
            Self::ForeignPassport => 4,
            Self::Government => 5,
            Self::Communal => 3,
        }
    }

    /// Human-readable label as used on SENIAT documents.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Natural => "Persona Natural",
            Self::ForeignId => "Extranjero con Cédula",
            Self::Legal => "Persona Jurídica",
            Self::ForeignPassport => "Extranjero con Pasaporte",
            Self::Government => "Gobierno",
            Self::Communal => "Consejo Comunal",
        }
    }

    /// Look up a subject type by its prefix code. Case-sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl TryFrom<char> for SubjectType {
    type Error = RifError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RifError::UnknownPrefix(code))
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
