
use crate::{
    hero::model::{HeroDetails, HeroHead},
    Error,
};
use herodex_common::db::Database;
use herodex_entity::hero;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

#[derive(Clone)]
pub struct HeroService {
    db: Database,
}

impl HeroService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_heroes(&self) -> Result<Vec<HeroHead>, Error> {
        let heroes = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(&self.db)
            .await?;

        Ok(HeroHead::from_entities(&heroes))
    }

    pub async fn fetch_hero(&self, id: i32) -> Result<Option<HeroDetails>, Error> {
        match hero::Entity::find_by_id(id).one(&self.db).await? {
            Some(hero) => Ok(Some(HeroDetails::from_entity(&hero, &self.db).await?)),
            None => Ok(None),
        }
    }

    pub async fn create_hero(&self, name: &str, super_name: &str) -> Result<HeroHead, Error> {
        let tx = self.db.begin().await?;

        let hero = hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        log::debug!("created hero {}", hero.id);
        Ok(HeroHead::from_entity(&hero))
    }

    /// Delete a hero; its hero_power rows go with it through the cascade.
    /// Not exposed over HTTP.
    pub async fn delete_hero(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;
        let result = hero::Entity::delete_by_id(id).exec(&tx).await?;
        tx.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
