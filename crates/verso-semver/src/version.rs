//! The parsed version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{Comparator, ParseError, VersionParser};

/// A single pre-release identifier.
///
/// An identifier made only of digits without a leading zero is numeric,
/// anything else is alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A numeric identifier (e.g. "1" in "alpha.1")
    Numeric(u64),
    /// An alphanumeric identifier (e.g. "alpha", "rc", "x-1")
    AlphaNumeric(String),
}

impl Identifier {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Name of the identifier kind, as shown in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Identifier::Numeric(_) => "numeric",
            Identifier::AlphaNumeric(_) => "alphanumeric",
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// A semantic version.
///
/// Values are only produced by [`VersionParser`] and are never mutated.
/// Equality, hashing and ordering all ignore build metadata, so
/// `1.0.0+a == 1.0.0+b`.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) prerelease: Vec<Identifier>,
    pub(crate) build: Vec<String>,
}

impl Version {
    /// Parse a version string. Shorthand for [`VersionParser::parse`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        VersionParser::parse(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, empty for a release version
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// Build metadata identifiers, in the order they were written
    pub fn build_metadata(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some((first, rest)) = self.prerelease.split_first() {
            write!(f, "-{}", first)?;
            for id in rest {
                write!(f, ".{}", id)?;
            }
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

// Must agree with `PartialEq`: build metadata is left out.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        VersionParser::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_accessors() {
        let version = v("1.2.3-alpha.7+build.11");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(
            version.prerelease(),
            &[Identifier::AlphaNumeric("alpha".to_string()), Identifier::Numeric(7)]
        );
        assert_eq!(version.build_metadata(), &["build".to_string(), "11".to_string()]);
        assert!(version.is_prerelease());
        assert!(!v("1.2.3+build").is_prerelease());
    }

    #[test]
    fn test_display_round_trip() {
        for input in [
            "0.0.0",
            "1.2.3",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0-x.7.z.92",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
            "1.0.0+21AF26D3----117B344092BD",
            "1.0.0-x-y-z.--",
        ] {
            assert_eq!(v(input).to_string(), input);
        }
    }

    #[test]
    fn test_from_str() {
        let version: Version = "4.5.6-rc.1".parse().unwrap();
        assert_eq!(version, v("4.5.6-rc.1"));
        assert!("4.5".parse::<Version>().is_err());
    }

    #[test]
    fn test_equality_ignores_build_metadata() {
        assert_eq!(v("1.0.0+x"), v("1.0.0+y"));
        assert_eq!(v("1.0.0+x"), v("1.0.0"));
        assert_eq!(v("1.0.0-rc.1+a"), v("1.0.0-rc.1+b.c"));
        assert_ne!(v("1.0.0-rc.1"), v("1.0.0"));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(v("1.0.0+x"));
        set.insert(v("1.0.0+y"));
        set.insert(v("1.0.0"));
        set.insert(v("1.0.0-alpha"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_identifier_kind() {
        assert!(Identifier::Numeric(0).is_numeric());
        assert_eq!(Identifier::Numeric(3).kind(), "numeric");
        assert_eq!(Identifier::AlphaNumeric("rc".to_string()).kind(), "alphanumeric");
        assert_eq!(Identifier::AlphaNumeric("0a".to_string()).to_string(), "0a");
    }

    #[test]
    fn test_std_operators() {
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
        assert!(v("1.0.0") <= v("1.0.0+meta"));
        assert!(v("2.0.0") > v("1.99.99"));
        assert!(v("1.0.0") >= v("1.0.0-alpha"));
        assert_eq!(v("3.0.0").max(v("3.0.0-rc.9")), v("3.0.0"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_string() {
        let version = v("1.2.3-beta.2+sha.abc");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.2.3-beta.2+sha.abc\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "1.2.3-beta.2+sha.abc");

        assert!(serde_json::from_str::<Version>("\"01.2.3\"").is_err());
    }
}
