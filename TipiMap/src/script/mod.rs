//! Script identifiers and the text-processing seam
//!
//! The actual Pali script converter is an external dependency; this crate
//! only depends on the [`TextProcessor`] trait. Conversions pivot through
//! Sinhala as the intermediate script. [`PassthroughProcessor`] stands in
//! when no converter is wired up and leaves text untouched.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Named script identifiers understood by the converter seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Sinhala - the intermediate script conversions pivot through.
    Sinhala,
    /// Roman Pali.
    Roman,
    /// Devanagari.
    Devanagari,
    /// Thai.
    Thai,
    /// Myanmar.
    Myanmar,
    /// Khmer.
    Khmer,
}

impl Script {
    /// Two-letter code used throughout the catalogue tooling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Script::Sinhala => "si",
            Script::Roman => "ro",
            Script::Devanagari => "hi",
            Script::Thai => "th",
            Script::Myanmar => "my",
            Script::Khmer => "km",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "si" => Ok(Script::Sinhala),
            "ro" => Ok(Script::Roman),
            "hi" => Ok(Script::Devanagari),
            "th" => Ok(Script::Thai),
            "my" => Ok(Script::Myanmar),
            "km" => Ok(Script::Khmer),
            _ => Err(Error::UnknownScript { code: s.to_owned() }),
        }
    }
}

/// Bidirectional Pali script conversion through the Sinhala intermediate.
pub trait TextProcessor {
    /// Convert `text` from the `from` script into the Sinhala intermediate
    /// form.
    fn convert_to_sinhala(&self, text: &str, from: Script) -> String;

    /// Convert Sinhala intermediate `text` into the `to` script.
    fn convert_from_sinhala(&self, text: &str, to: Script) -> String;
}

/// Processor used when no external script converter is available: returns
/// the input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughProcessor;

impl TextProcessor for PassthroughProcessor {
    fn convert_to_sinhala(&self, text: &str, _from: Script) -> String {
        text.to_owned()
    }

    fn convert_from_sinhala(&self, text: &str, _to: Script) -> String {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back_to_scripts() {
        for script in [
            Script::Sinhala,
            Script::Roman,
            Script::Devanagari,
            Script::Thai,
            Script::Myanmar,
            Script::Khmer,
        ] {
            assert_eq!(script.code().parse::<Script>().unwrap(), script);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!("xx".parse::<Script>().is_err());
    }
}
