use crate::{hero, power, strength::Strength};
use sea_orm::entity::prelude::*;

/// Association between a hero and a power, qualified by a [`Strength`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "super::hero_power::Column::HeroId",
        to = "super::hero::Column::Id"
    )]
    Hero,
    #[sea_orm(
        belongs_to = "super::power::Entity",
        from = "super::hero_power::Column::PowerId",
        to = "super::power::Column::Id"
    )]
    Power,
}

impl Related<hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl Related<power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Power.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
