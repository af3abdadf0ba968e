//! Display renderings of a validated [`Rif`].
//!
//! All renderings derive from the parsed fields; none re-validate.
//!
//! # Example
//!
//! ```rust
//! use rif::Rif;
//! use rif::format::{RifFormat, custom};
//!
//! let rif = Rif::parse("J000029679").unwrap();
//! assert_eq!(rif.format(RifFormat::Standard), "J-00002967-9");
//! assert_eq!(rif.format(RifFormat::Dotted), "J-2.967-9");
//! assert_eq!(custom(&rif, "/"), "J/00002967/9");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Rif;

/// Named RIF renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RifFormat {
    /// `J-00002967-9`
    #[default]
    Standard,
    /// `J 00 002 967 9`
    Spaced,
    /// `J-00002967-9 (Persona Jurídica)`
    WithDescription,
    /// `J000029679`
    Compact,
    /// `J000029679`, the form to store in databases.
    Database,
    /// `J-2.967-9`
    Dotted,
    /// SENIAT e-invoice form, same as standard.
    Invoice,
    /// `R.I.F. J-00002967-9`
    Legal,
}

impl RifFormat {
    /// Every named rendering.
    pub const ALL: [RifFormat; 8] = [
        Self::Standard,
        Self::Spaced,
        Self::WithDescription,
        Self::Compact,
        Self::Database,
        Self::Dotted,
        Self::Invoice,
        Self::Legal,
    ];

    /// Canonical (camelCase) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Spaced => "spaced",
            Self::WithDescription => "withDescription",
            Self::Compact => "compact",
            Self::Database => "database",
            Self::Dotted => "dotted",
            Self::Invoice => "invoice",
            Self::Legal => "legal",
        }
    }

    /// Lenient lookup: unknown names fall back to [`RifFormat::Standard`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Render `rif` in this format.
    pub fn render(self, rif: &Rif) -> String {
        match self {
            Self::Standard | Self::Invoice => custom(rif, "-"),
            Self::Spaced => {
                let body = rif.body();
                format!(
                    "{} {} {} {} {}",
                    rif.subject_type().code(),
                    &body[..2],
                    &body[2..5],
                    &body[5..],
                    rif.check_digit()
                )
            }
            Self::WithDescription => {
                format!("{} ({})", custom(rif, "-"), rif.subject_type().label())
            }
            Self::Compact | Self::Database => rif.raw().to_owned(),
            Self::Dotted => format!(
                "{}-{}-{}",
                rif.subject_type().code(),
                group_thousands(rif.body()),
                rif.check_digit()
            ),
            Self::Legal => format!("R.I.F. {}", custom(rif, "-")),
        }
    }
}

impl fmt::Display for RifFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown RIF format '{}'", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for RifFormat {
    type Err = UnknownFormat;

    /// Accepts the camelCase names and their snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "spaced" => Ok(Self::Spaced),
            "withDescription" | "with_description" => Ok(Self::WithDescription),
            "compact" => Ok(Self::Compact),
            "database" => Ok(Self::Database),
            "dotted" => Ok(Self::Dotted),
            "invoice" => Ok(Self::Invoice),
            "legal" => Ok(Self::Legal),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

/// Type code, body and check digit joined by `separator`.
pub fn custom(rif: &Rif, separator: &str) -> String {
    format!(
        "{}{separator}{}{separator}{}",
        rif.subject_type().code(),
        rif.body(),
        rif.check_digit()
    )
}

impl Rif {
    /// Render in one of the named formats.
    pub fn format(&self, format: RifFormat) -> String {
        format.render(self)
    }
}

/// Body as an integer with `.` every three digits, leading zeros dropped.
fn group_thousands(body: &str) -> String {
    let digits = body.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
