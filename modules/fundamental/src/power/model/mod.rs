use herodex_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A power, as serialized everywhere.
///
/// Powers are a leaf for serialization purposes: they never embed the
/// hero_powers referencing them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PowerHead {
    pub id: i32,
    pub name: String,

    /// What the power does; trimmed length is always at least 20 characters.
    pub description: String,
}

impl PowerHead {
    pub fn from_entity(power: &power::Model) -> Self {
        Self {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }

    pub fn from_entities(powers: &[power::Model]) -> Vec<Self> {
        powers.iter().map(Self::from_entity).collect()
    }
}

/// Request body of `PATCH /powers/{id}`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UpdatePower {
    /// The new description.
    pub description: String,
}
