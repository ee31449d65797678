//! Term-weighting schemes.

use std::fmt;
use std::str::FromStr;

use log::error;
use serde::{Deserialize, Serialize};

/// Term-weighting scheme applied to global and local term weights.
///
/// Scheme names may arrive from configuration files or command lines,
/// so a lenient entry point is provided: see
/// [`TermWeight::parse_or_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermWeight {
    /// No term weighting: all terms have weight 1.
    #[default]
    None,
    /// Inverse document frequency: see [`TermStats::idf`](crate::stats::TermStats::idf).
    Idf,
    /// Log entropy: see [`TermStats::entropy`](crate::stats::TermStats::entropy).
    LogEntropy,
    /// Raw global term frequency.
    Freq,
    /// Square root of global term frequency.
    Sqrt,
    /// Natural log of global term frequency.
    LogFreq,
}

impl TermWeight {
    /// Parse a scheme name, falling back to [`TermWeight::None`]
    /// (weight 1 everywhere) with a severe diagnostic when the name is
    /// not recognized. Configuration input is untrusted; an unknown
    /// scheme must degrade, not abort.
    pub fn parse_or_default(name: &str) -> TermWeight {
        match name.parse() {
            Ok(scheme) => scheme,
            Err(()) => {
                error!("unrecognized termweight option: '{name}'; using none (weight 1)");
                TermWeight::None
            }
        }
    }
}

impl FromStr for TermWeight {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TermWeight::None),
            "idf" => Ok(TermWeight::Idf),
            "logentropy" => Ok(TermWeight::LogEntropy),
            "freq" => Ok(TermWeight::Freq),
            "sqrt" => Ok(TermWeight::Sqrt),
            "logfreq" => Ok(TermWeight::LogFreq),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TermWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermWeight::None => "none",
            TermWeight::Idf => "idf",
            TermWeight::LogEntropy => "logentropy",
            TermWeight::Freq => "freq",
            TermWeight::Sqrt => "sqrt",
            TermWeight::LogFreq => "logfreq",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_schemes() {
        assert_eq!("idf".parse(), Ok(TermWeight::Idf));
        assert_eq!("logentropy".parse(), Ok(TermWeight::LogEntropy));
        assert_eq!("sqrt".parse(), Ok(TermWeight::Sqrt));
        assert_eq!("none".parse(), Ok(TermWeight::None));
    }

    #[test]
    fn test_parse_unknown_scheme_defaults_to_none() {
        assert_eq!(TermWeight::parse_or_default("garbage"), TermWeight::None);
    }

    #[test]
    fn test_display_roundtrip() {
        for scheme in [
            TermWeight::None,
            TermWeight::Idf,
            TermWeight::LogEntropy,
            TermWeight::Freq,
            TermWeight::Sqrt,
            TermWeight::LogFreq,
        ] {
            assert_eq!(scheme.to_string().parse(), Ok(scheme));
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&TermWeight::LogEntropy).unwrap();
        assert_eq!(json, "\"logentropy\"");
        let back: TermWeight = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TermWeight::LogEntropy);
    }
}
