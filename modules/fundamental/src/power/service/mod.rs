
use crate::{power::model::PowerHead, Error};
use herodex_common::db::Database;
use herodex_entity::power;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

/// Minimum number of characters in a power description, after trimming.
const DESCRIPTION_MIN_CHARS: usize = 20;

#[derive(Clone)]
pub struct PowerService {
    db: Database,
}

impl PowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Runs on every write path touching a description, so a too-short value
    /// can never reach the store.
    pub fn validate_description(description: &str) -> Result<(), Error> {
        if description.trim().chars().count() < DESCRIPTION_MIN_CHARS {
            return Err(Error::validation(
                "description must be at least 20 characters long",
            ));
        }

        Ok(())
    }

    pub async fn list_powers(&self) -> Result<Vec<PowerHead>, Error> {
        let powers = power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(&self.db)
            .await?;

        Ok(PowerHead::from_entities(&powers))
    }

    pub async fn fetch_power(&self, id: i32) -> Result<Option<PowerHead>, Error> {
        Ok(power::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|power| PowerHead::from_entity(&power)))
    }

    pub async fn create_power(&self, name: &str, description: &str) -> Result<PowerHead, Error> {
        Self::validate_description(description)?;

        let tx = self.db.begin().await?;

        let power = power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        log::debug!("created power {}", power.id);
        Ok(PowerHead::from_entity(&power))
    }

    /// Update a power's description, the only field mutable after creation.
    /// Returns `None` when the id does not exist; the lookup runs before the
    /// description check, so an unknown id wins over an invalid body.
    pub async fn update_description(
        &self,
        id: i32,
        description: &str,
    ) -> Result<Option<PowerHead>, Error> {
        let tx = self.db.begin().await?;

        let Some(power) = power::Entity::find_by_id(id).one(&tx).await? else {
            return Ok(None);
        };

        Self::validate_description(description)?;

        let mut power: power::ActiveModel = power.into();
        power.description = Set(description.to_string());
        let power = power.update(&tx).await?;

        tx.commit().await?;

        Ok(Some(PowerHead::from_entity(&power)))
    }

    /// Delete a power; its hero_power rows go with it through the cascade.
    /// Not exposed over HTTP.
    pub async fn delete_power(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;
        let result = power::Entity::delete_by_id(id).exec(&tx).await?;
        tx.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
