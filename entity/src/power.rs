use crate::{hero, hero_power};
use sea_orm::entity::prelude::*;

/// A power a hero may wield.
///
/// The `description` column only ever holds validated values; every write
/// path runs through the description check in the fundamental module first.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_power::Entity")]
    HeroPowers,
}

impl Related<hero_power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroPowers.def()
    }
}

impl Related<hero::Entity> for Entity {
    fn to() -> RelationDef {
        hero_power::Relation::Hero.def()
    }

    fn via() -> Option<RelationDef> {
        Some(hero_power::Relation::Power.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
