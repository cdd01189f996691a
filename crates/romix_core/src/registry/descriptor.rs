//! Feature module identity.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Package prefix shared by every feature module.
pub const FEATURE_PACKAGE_ROOT: &str = "com.romix.feature";

static FEATURE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^feat(0|[1-9][0-9]*)$").expect("valid feature id regex"));

/// Identity of one feature module (`feat601` / `Feat601`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureDescriptor {
    /// Numeric suffix; also the registry sort key.
    pub index: u32,
    /// Module id, e.g. `feat601`.
    pub id: String,
    /// Display label and header prefix, e.g. `Feat601`.
    pub label: String,
    /// Namespaced package, e.g. `com.romix.feature.feat601`.
    pub package: String,
}

impl FeatureDescriptor {
    pub fn from_index(index: u32) -> Self {
        let id = format!("feat{index}");
        Self {
            index,
            label: format!("Feat{index}"),
            package: format!("{FEATURE_PACKAGE_ROOT}.{id}"),
            id,
        }
    }

    /// Parses a module id such as `feat601`.
    ///
    /// Surrounding whitespace is ignored. Leading zeros and uppercase are
    /// rejected so every index has exactly one id.
    pub fn parse(id: &str) -> Result<Self, DescriptorError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DescriptorError::EmptyId);
        }
        let captures = FEATURE_ID_RE
            .captures(trimmed)
            .ok_or_else(|| DescriptorError::InvalidId(trimmed.to_string()))?;
        let index = captures[1]
            .parse::<u32>()
            .map_err(|_| DescriptorError::InvalidId(trimmed.to_string()))?;
        Ok(Self::from_index(index))
    }
}

/// Feature id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    EmptyId,
    InvalidId(String),
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "feature id must not be empty"),
            Self::InvalidId(value) => {
                write!(f, "feature id is invalid: {value} (expected featN)")
            }
        }
    }
}

impl Error for DescriptorError {}

#[cfg(test)]
mod tests {
    use super::{DescriptorError, FeatureDescriptor};

    #[test]
    fn from_index_derives_all_names() {
        let descriptor = FeatureDescriptor::from_index(601);
        assert_eq!(descriptor.id, "feat601");
        assert_eq!(descriptor.label, "Feat601");
        assert_eq!(descriptor.package, "com.romix.feature.feat601");
    }

    #[test]
    fn parse_round_trips_canonical_ids() {
        let descriptor = FeatureDescriptor::parse(" feat539 ").expect("valid id");
        assert_eq!(descriptor, FeatureDescriptor::from_index(539));
        assert_eq!(
            FeatureDescriptor::parse("feat0").expect("zero is valid").index,
            0
        );
    }

    #[test]
    fn parse_rejects_non_canonical_ids() {
        for raw in ["Feat601", "feat", "feat01", "feat-1", "feature601", "feat601x"] {
            let err = FeatureDescriptor::parse(raw).expect_err("non-canonical id must fail");
            assert!(matches!(err, DescriptorError::InvalidId(_)), "{raw}");
        }
        assert_eq!(
            FeatureDescriptor::parse("   ").expect_err("blank must fail"),
            DescriptorError::EmptyId
        );
    }

    #[test]
    fn parse_rejects_overflowing_index() {
        let err = FeatureDescriptor::parse("feat99999999999").expect_err("overflow must fail");
        assert!(matches!(err, DescriptorError::InvalidId(_)));
    }
}
