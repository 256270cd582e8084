use sea_orm::{DeriveActiveEnum, EnumIter, prelude::StringLen};
use std::fmt;

/// How strongly a hero wields a given power.
///
/// Stored as its literal name in the `hero_power` table. Parsing via
/// [`std::str::FromStr`] rejects anything outside the three known values,
/// which keeps invalid strengths out of every write path.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::VariantArray,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong => f.write_str("Strong"),
            Self::Weak => f.write_str("Weak"),
            Self::Average => f.write_str("Average"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_known_values() {
        assert_eq!(Strength::from_str("Strong"), Ok(Strength::Strong));
        assert_eq!(Strength::from_str("Weak"), Ok(Strength::Weak));
        assert_eq!(Strength::from_str("Average"), Ok(Strength::Average));
    }

    #[test]
    fn reject_unknown_values() {
        assert!(Strength::from_str("Invincible").is_err());
        assert!(Strength::from_str("strong").is_err());
        assert!(Strength::from_str("").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(Strength::Average).expect("serialize"),
            serde_json::json!("Average")
        );
    }
}
