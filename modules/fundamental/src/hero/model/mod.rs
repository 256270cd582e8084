use herodex_entity::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;

pub use details::*;

/// Base fields of a hero, serialized without any relations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroHead {
    pub id: i32,

    /// The hero's civilian name.
    pub name: String,

    /// The hero's alias.
    pub super_name: String,
}

impl HeroHead {
    pub fn from_entity(hero: &hero::Model) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }

    pub fn from_entities(heroes: &[hero::Model]) -> Vec<Self> {
        heroes.iter().map(Self::from_entity).collect()
    }
}
