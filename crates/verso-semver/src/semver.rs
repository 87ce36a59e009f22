//! Semver facade providing high-level version operations on strings

use std::cmp::Ordering;

use crate::{Comparator, Operator, ParseError, Version, VersionParser};

/// Main facade for semantic versioning operations.
///
/// Every function parses its inputs first and returns the first
/// [`ParseError`] it hits; comparisons themselves cannot fail.
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Version, ParseError> {
        VersionParser::parse(version)
    }

    /// Compare two version strings by precedence
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering, ParseError> {
        let a = VersionParser::parse(version1)?;
        let b = VersionParser::parse(version2)?;
        Ok(Comparator::compare(&a, &b))
    }

    /// Check whether `version1 <operator> version2` holds
    pub fn satisfies(version1: &str, operator: Operator, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, version2).map(|cmp| operator.apply(cmp))
    }

    pub fn lt(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::satisfies(version1, Operator::LessThan, version2)
    }

    pub fn le(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::satisfies(version1, Operator::LessThanOrEqual, version2)
    }

    pub fn gt(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::satisfies(version1, Operator::GreaterThan, version2)
    }

    pub fn ge(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::satisfies(version1, Operator::GreaterThanOrEqual, version2)
    }

    pub fn eq(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::satisfies(version1, Operator::Equal, version2)
    }

    pub fn ne(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::satisfies(version1, Operator::NotEqual, version2)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Result<Vec<String>, ParseError> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>, ParseError> {
        Self::usort(versions, false)
    }

    /// Highest version of the list, `None` when it is empty
    pub fn max(versions: &[&str]) -> Result<Option<String>, ParseError> {
        Ok(Self::rsort(versions)?.into_iter().next())
    }

    /// Lowest version of the list, `None` when it is empty
    pub fn min(versions: &[&str]) -> Result<Option<String>, ParseError> {
        Ok(Self::sort(versions)?.into_iter().next())
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>, ParseError> {
        // Parse with their original index
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .map(|(i, v)| VersionParser::parse(v).map(|parsed| (parsed, i)))
            .collect::<Result<_, _>>()?;

        // Stable, so versions of equal precedence keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original strings in sorted order
        Ok(parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect())
    }
}
