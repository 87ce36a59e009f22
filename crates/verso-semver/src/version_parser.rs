//! Version string parsing and validation

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::version::{Identifier, Version};

/// One of the three numeric fields of a version core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreField {
    Major,
    Minor,
    Patch,
}

impl CoreField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreField::Major => "major",
            CoreField::Minor => "minor",
            CoreField::Patch => "patch",
        }
    }
}

impl fmt::Display for CoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dot-separated suffix an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prerelease,
    BuildMetadata,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Prerelease => "pre-release",
            Section::BuildMetadata => "build metadata",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version string \"{input}\": {reason}")]
    InvalidFormat { input: String, reason: String },
    #[error("Invalid {field} version number \"{value}\": expected 0 or digits without a leading zero")]
    InvalidNumericField { field: CoreField, value: String },
    #[error("Invalid {section} identifier \"{identifier}\": expected a non-empty run of [0-9A-Za-z-]")]
    InvalidIdentifier { section: Section, identifier: String },
    #[error("Invalid numeric pre-release identifier \"{0}\": leading zeros are not allowed")]
    InvalidNumericPrereleaseIdentifier(String),
}

lazy_static! {
    static ref NUMERIC_FIELD_RE: Regex = Regex::new(r"^(?:0|[1-9][0-9]*)$").unwrap();

    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();

    static ref DIGITS_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Parser for `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version strings.
///
/// The whole input has to match; there is no trimming, no `v` prefix and no
/// best-effort result.
pub struct VersionParser;

impl VersionParser {
    /// Parse a version string into a [`Version`]
    pub fn parse(input: &str) -> Result<Version, ParseError> {
        if input.is_empty() {
            return Err(ParseError::InvalidFormat {
                input: input.to_string(),
                reason: "empty version string".to_string(),
            });
        }

        // Build metadata may itself contain '-', so it is split off first.
        let (rest, build) = match input.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (input, None),
        };
        let (core, prerelease) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let (major, minor, patch) = Self::parse_core(input, core)?;

        let prerelease = match prerelease {
            Some(pre) => Self::parse_prerelease(pre)?,
            None => Vec::new(),
        };
        let build = match build {
            Some(build) => Self::parse_build_metadata(build)?,
            None => Vec::new(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    /// Check whether a string is a valid version
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    fn parse_core(input: &str, core: &str) -> Result<(u64, u64, u64), ParseError> {
        let fields: Vec<&str> = core.split('.').collect();
        if fields.len() != 3 {
            return Err(ParseError::InvalidFormat {
                input: input.to_string(),
                reason: format!(
                    "expected MAJOR.MINOR.PATCH, found {} numeric field(s)",
                    fields.len()
                ),
            });
        }

        let major = Self::parse_numeric_field(CoreField::Major, fields[0])?;
        let minor = Self::parse_numeric_field(CoreField::Minor, fields[1])?;
        let patch = Self::parse_numeric_field(CoreField::Patch, fields[2])?;

        Ok((major, minor, patch))
    }

    fn parse_numeric_field(field: CoreField, value: &str) -> Result<u64, ParseError> {
        let invalid = || ParseError::InvalidNumericField {
            field,
            value: value.to_string(),
        };

        if !NUMERIC_FIELD_RE.is_match(value) {
            return Err(invalid());
        }

        // Out of u64 range
        value.parse::<u64>().map_err(|_| invalid())
    }

    fn parse_prerelease(pre: &str) -> Result<Vec<Identifier>, ParseError> {
        pre.split('.')
            .map(|part| -> Result<Identifier, ParseError> {
                Self::check_identifier(Section::Prerelease, part)?;
                Self::classify(part)
            })
            .collect()
    }

    fn parse_build_metadata(build: &str) -> Result<Vec<String>, ParseError> {
        build
            .split('.')
            .map(|part| -> Result<String, ParseError> {
                Self::check_identifier(Section::BuildMetadata, part)?;
                Ok(part.to_string())
            })
            .collect()
    }

    fn check_identifier(section: Section, part: &str) -> Result<(), ParseError> {
        if IDENTIFIER_RE.is_match(part) {
            Ok(())
        } else {
            Err(ParseError::InvalidIdentifier {
                section,
                identifier: part.to_string(),
            })
        }
    }

    /// Classify an already validated pre-release identifier
    fn classify(part: &str) -> Result<Identifier, ParseError> {
        if !DIGITS_RE.is_match(part) {
            return Ok(Identifier::AlphaNumeric(part.to_string()));
        }

        if part.len() > 1 && part.starts_with('0') {
            return Err(ParseError::InvalidNumericPrereleaseIdentifier(part.to_string()));
        }

        part.parse::<u64>()
            .map(Identifier::Numeric)
            .map_err(|_| ParseError::InvalidNumericPrereleaseIdentifier(part.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(s: &str) -> Identifier {
        Identifier::AlphaNumeric(s.to_string())
    }

    #[test]
    fn test_parse_core() {
        let v = VersionParser::parse("1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert!(v.prerelease.is_empty());
        assert!(v.build.is_empty());

        let v = VersionParser::parse("0.0.0").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (0, 0, 0));

        let v = VersionParser::parse("18446744073709551615.0.10").unwrap();
        assert_eq!(v.major, u64::MAX);
        assert_eq!(v.patch, 10);
    }

    #[test]
    fn test_parse_prerelease() {
        let v = VersionParser::parse("1.0.0-alpha.1.0.x-y").unwrap();
        assert_eq!(
            v.prerelease,
            vec![alpha("alpha"), Identifier::Numeric(1), Identifier::Numeric(0), alpha("x-y")]
        );

        // Digits mixed with letters are never numeric
        let v = VersionParser::parse("1.0.0-0a.01a.-1").unwrap();
        assert_eq!(v.prerelease, vec![alpha("0a"), alpha("01a"), alpha("-1")]);
    }

    #[test]
    fn test_parse_build_metadata() {
        let v = VersionParser::parse("1.0.0+001.sha-5114f85").unwrap();
        assert_eq!(v.build, vec!["001".to_string(), "sha-5114f85".to_string()]);
        assert!(v.prerelease.is_empty());

        let v = VersionParser::parse("1.0.0-rc.1+build-7.x").unwrap();
        assert_eq!(v.prerelease, vec![alpha("rc"), Identifier::Numeric(1)]);
        assert_eq!(v.build, vec!["build-7".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_invalid_format() {
        for input in ["", "1", "1.0", "1.0.0.0", "-alpha", "+build", "1.0-rc.1"] {
            assert!(
                matches!(VersionParser::parse(input), Err(ParseError::InvalidFormat { .. })),
                "expected InvalidFormat for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_numeric_field() {
        assert_eq!(
            VersionParser::parse("01.0.0"),
            Err(ParseError::InvalidNumericField {
                field: CoreField::Major,
                value: "01".to_string(),
            })
        );
        assert_eq!(
            VersionParser::parse("1.00.0"),
            Err(ParseError::InvalidNumericField {
                field: CoreField::Minor,
                value: "00".to_string(),
            })
        );
        assert_eq!(
            VersionParser::parse("1.0.x"),
            Err(ParseError::InvalidNumericField {
                field: CoreField::Patch,
                value: "x".to_string(),
            })
        );

        for input in ["1..0", "v1.0.0", " 1.0.0", "1.0.0 ", "1.0.18446744073709551616"] {
            assert!(
                matches!(VersionParser::parse(input), Err(ParseError::InvalidNumericField { .. })),
                "expected InvalidNumericField for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_identifier() {
        assert_eq!(
            VersionParser::parse("1.0.0-"),
            Err(ParseError::InvalidIdentifier {
                section: Section::Prerelease,
                identifier: String::new(),
            })
        );
        assert_eq!(
            VersionParser::parse("1.0.0+"),
            Err(ParseError::InvalidIdentifier {
                section: Section::BuildMetadata,
                identifier: String::new(),
            })
        );
        assert_eq!(
            VersionParser::parse("1.0.0-alpha_1"),
            Err(ParseError::InvalidIdentifier {
                section: Section::Prerelease,
                identifier: "alpha_1".to_string(),
            })
        );

        for input in [
            "1.0.0-.alpha",
            "1.0.0-alpha.",
            "1.0.0-alpha..1",
            "1.0.0+.build",
            "1.0.0+build.",
            "1.0.0+a..b",
            "1.0.0+a+b",
            "1.0.0-é",
            "1.0.0-rc 1",
        ] {
            assert!(
                matches!(VersionParser::parse(input), Err(ParseError::InvalidIdentifier { .. })),
                "expected InvalidIdentifier for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_numeric_prerelease_identifier() {
        assert_eq!(
            VersionParser::parse("1.0.0-alpha.01"),
            Err(ParseError::InvalidNumericPrereleaseIdentifier("01".to_string()))
        );
        assert_eq!(
            VersionParser::parse("1.0.0-00"),
            Err(ParseError::InvalidNumericPrereleaseIdentifier("00".to_string()))
        );
        assert!(matches!(
            VersionParser::parse("1.0.0-99999999999999999999"),
            Err(ParseError::InvalidNumericPrereleaseIdentifier(_))
        ));

        // Leading zeros are fine in build metadata
        assert!(VersionParser::parse("1.0.0+01").is_ok());
    }

    #[test]
    fn test_is_valid() {
        assert!(VersionParser::is_valid("1.0.0-alpha+001"));
        assert!(!VersionParser::is_valid("1.0"));
        assert!(!VersionParser::is_valid("1.0.0-"));
    }

    #[test]
    fn test_error_messages() {
        let err = VersionParser::parse("1.0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid version string \"1.0\": expected MAJOR.MINOR.PATCH, found 2 numeric field(s)"
        );

        let err = VersionParser::parse("1.01.0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid minor version number \"01\": expected 0 or digits without a leading zero"
        );

        let err = VersionParser::parse("1.0.0+a$").unwrap_err();
        assert!(err.to_string().starts_with("Invalid build metadata identifier \"a$\""));
    }
}
