//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {input:?}: {reason}")]
pub struct InvalidCrs {
    input: String,
    reason: &'static str,
}

impl InvalidCrs {
    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// Input is case-normalised: `"pad"` and `"PAD"` parse to the same code.
/// Anything that isn't exactly three ASCII letters is rejected, so holding
/// a `Crs` means the code has already passed the length check that guards
/// every network request.
///
/// # Examples
///
/// ```
/// use train_board::domain::Crs;
///
/// let pad = Crs::parse("pad").unwrap();
/// assert_eq!(pad.as_str(), "PAD");
///
/// assert!(Crs::parse("PA").is_err());
/// assert!(Crs::parse("PADD").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code, upper-casing it.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let invalid = |reason| InvalidCrs {
            input: s.to_string(),
            reason,
        };

        if s.chars().count() != 3 {
            return Err(invalid("must be exactly 3 characters"));
        }

        let bytes = s.as_bytes();
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(invalid("must be ASCII letters A-Z"));
        }

        Ok(Crs([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Whether a raw code from a provider payload names this station.
    pub fn matches(&self, code: &str) -> bool {
        self.as_str() == code
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Crs {
    type Err = InvalidCrs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crs::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_crs() {
        assert!(Crs::parse("RDG").is_ok());
        assert!(Crs::parse("PAD").is_ok());
        assert!(Crs::parse("OXF").is_ok());
        assert!(Crs::parse("AAA").is_ok());
        assert!(Crs::parse("ZZZ").is_ok());
    }

    #[test]
    fn lowercase_is_normalised() {
        assert_eq!(Crs::parse("pad").unwrap().as_str(), "PAD");
        assert_eq!(Crs::parse("Pad").unwrap(), Crs::parse("PAD").unwrap());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Crs::parse("").is_err());
        assert!(Crs::parse("P").is_err());
        assert!(Crs::parse("PA").is_err());
        assert!(Crs::parse("PADD").is_err());
        assert!(Crs::parse("PADTON").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Crs::parse("P1D").is_err());
        assert!(Crs::parse("P-D").is_err());
        assert!(Crs::parse("P D").is_err());
        assert!(Crs::parse("PÖD").is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = Crs::parse("PADD").unwrap_err();
        assert_eq!(err.input(), "PADD");
        assert_eq!(
            err.to_string(),
            "invalid station code \"PADD\": must be exactly 3 characters"
        );
    }

    #[test]
    fn matches_raw_codes() {
        let rdg = Crs::parse("RDG").unwrap();
        assert!(rdg.matches("RDG"));
        assert!(!rdg.matches("PAD"));
        assert!(!rdg.matches(""));
    }

    #[test]
    fn display_and_debug() {
        let crs = Crs::parse("OXF").unwrap();
        assert_eq!(format!("{}", crs), "OXF");
        assert_eq!(format!("{:?}", crs), "Crs(OXF)");
    }

    #[test]
    fn from_str() {
        let crs: Crs = "twy".parse().unwrap();
        assert_eq!(crs.as_str(), "TWY");
    }
}
