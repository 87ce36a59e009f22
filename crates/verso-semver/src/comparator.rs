//! Version precedence comparison

use std::cmp::Ordering;

use crate::version::{Identifier, Version};
use crate::Operator;

/// Comparator implementing Semantic Versioning 2.0.0 precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::satisfies(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::satisfies(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::satisfies(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::satisfies(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::satisfies(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::satisfies(version1, Operator::NotEqual, version2)
    }

    /// Check whether `version1 <operator> version2` holds
    pub fn satisfies(version1: &Version, operator: Operator, version2: &Version) -> bool {
        operator.apply(Self::compare(version1, version2))
    }

    /// Compare two versions by precedence.
    ///
    /// Core fields decide first. With equal cores a release outranks any
    /// pre-release, and two pre-releases are compared identifier by
    /// identifier. Build metadata is never looked at.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        let core = a
            .major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch));
        if core != Ordering::Equal {
            return core;
        }

        match (a.prerelease.is_empty(), b.prerelease.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Self::compare_prerelease(&a.prerelease, &b.prerelease),
        }
    }

    /// Compare two non-empty pre-release identifier sequences.
    ///
    /// When every shared position is equal the shorter sequence is lower.
    pub fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
        let mut a_iter = a.iter();
        let mut b_iter = b.iter();

        loop {
            match (a_iter.next(), b_iter.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) => {
                    let cmp = Self::compare_identifiers(x, y);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                }
            }
        }
    }

    /// Compare two pre-release identifiers.
    ///
    /// Numeric identifiers compare by value, alphanumeric ones by ASCII byte
    /// order, and a numeric identifier is always lower than an alphanumeric one.
    pub fn compare_identifiers(a: &Identifier, b: &Identifier) -> Ordering {
        match (a, b) {
            (Identifier::Numeric(x), Identifier::Numeric(y)) => x.cmp(y),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(x), Identifier::AlphaNumeric(y)) => {
                x.as_bytes().cmp(y.as_bytes())
            }
        }
    }
}
