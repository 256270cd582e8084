use crate::{hero::model::HeroHead, power::model::PowerHead};
use herodex_entity::{hero, hero_power, power, Strength};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Base fields of a hero/power association.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroPowerHead {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
}

impl HeroPowerHead {
    pub fn from_entity(hero_power: &hero_power::Model) -> Self {
        Self {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
        }
    }
}

/// An association with its power embedded, used inside
/// [`crate::hero::model::HeroDetails`]. The owning hero is deliberately not
/// re-embedded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroPowerSummary {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub power: PowerHead,
}

impl HeroPowerSummary {
    pub fn from_entities(hero_power: &hero_power::Model, power: &power::Model) -> Self {
        Self {
            head: HeroPowerHead::from_entity(hero_power),
            power: PowerHead::from_entity(power),
        }
    }
}

/// An association with both sides embedded one level deep; the embedded
/// heads carry no relations of their own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroPowerDetails {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub hero: HeroHead,
    pub power: PowerHead,
}

impl HeroPowerDetails {
    pub fn from_entities(
        hero_power: &hero_power::Model,
        hero: &hero::Model,
        power: &power::Model,
    ) -> Self {
        Self {
            head: HeroPowerHead::from_entity(hero_power),
            hero: HeroHead::from_entity(hero),
            power: PowerHead::from_entity(power),
        }
    }
}

/// Request body of `POST /hero_powers`.
///
/// `strength` stays a plain string here; parsing it into [`Strength`] is part
/// of validation, so an unknown value turns into a 422 instead of a
/// deserialization failure.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CreateHeroPower {
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}
