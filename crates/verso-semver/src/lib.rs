//! Semantic Versioning 2.0.0 parsing and precedence comparison
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version strings
//! and orders them by Semantic Versioning 2.0.0 precedence.
//! Build metadata is kept for display but ignored by equality and ordering.

mod comparator;
mod operator;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use operator::{InvalidOperatorError, Operator};
pub use semver::Semver;
pub use version::{Identifier, Version};
pub use version_parser::{CoreField, ParseError, Section, VersionParser};
