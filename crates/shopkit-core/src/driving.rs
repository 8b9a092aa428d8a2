//! Minimum driving age by jurisdiction.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};

static STANDARD_RULES: Lazy<DrivingRules> = Lazy::new(|| {
    DrivingRules::new(BTreeMap::from([
        ("US".to_string(), 16),
        ("UK".to_string(), 17),
    ]))
});

/// Country code → minimum driving age. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingRules {
    #[serde(deserialize_with = "normalized_codes")]
    minimum_ages: BTreeMap<String, u32>,
}

fn normalize(minimum_ages: BTreeMap<String, u32>) -> BTreeMap<String, u32> {
    minimum_ages
        .into_iter()
        .map(|(code, age)| (code.trim().to_ascii_uppercase(), age))
        .collect()
}

fn normalized_codes<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::deserialize(deserializer).map(normalize)
}

impl Default for DrivingRules {
    fn default() -> Self {
        STANDARD_RULES.clone()
    }
}

impl DrivingRules {
    /// Codes are stored upper-case.
    pub fn new(minimum_ages: BTreeMap<String, u32>) -> Self {
        DrivingRules {
            minimum_ages: normalize(minimum_ages),
        }
    }

    /// Built-in table: US 16, UK 17.
    pub fn standard() -> &'static DrivingRules {
        &STANDARD_RULES
    }

    pub fn minimum_age(&self, country_code: &str) -> Option<u32> {
        self.minimum_ages
            .get(&country_code.trim().to_ascii_uppercase())
            .copied()
    }

    /// `age >= minimum` for the jurisdiction; unknown codes are an error.
    pub fn can_drive(&self, age: u32, country_code: &str) -> CoreResult<bool> {
        let minimum = self
            .minimum_age(country_code)
            .ok_or_else(|| CoreError::InvalidCountry(country_code.to_string()))?;
        Ok(age >= minimum)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.minimum_ages.is_empty() {
            return Err(ValidationError::Required {
                field: "minimum_ages".to_string(),
            });
        }
        if self.minimum_ages.keys().any(|code| code.is_empty()) {
            return Err(ValidationError::Required {
                field: "country code".to_string(),
            });
        }
        Ok(())
    }
}

/// Checks `age` against the built-in jurisdiction table.
///
/// ```rust
/// use shopkit_core::driving::can_drive;
///
/// assert_eq!(can_drive(16, "US").unwrap(), true);
/// assert_eq!(can_drive(16, "UK").unwrap(), false);
/// assert!(can_drive(20, "INVALID").is_err());
/// ```
pub fn can_drive(age: u32, country_code: &str) -> CoreResult<bool> {
    DrivingRules::standard().can_drive(age, country_code)
}
