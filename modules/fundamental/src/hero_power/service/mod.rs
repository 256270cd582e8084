
use crate::{
    hero_power::model::{CreateHeroPower, HeroPowerDetails},
    Error,
};
use herodex_common::db::Database;
use herodex_entity::{hero, hero_power, power, Strength};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use std::str::FromStr;

#[derive(Clone)]
pub struct HeroPowerService {
    db: Database,
}

impl HeroPowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create an association between an existing hero and an existing power.
    ///
    /// All checks run inside one transaction; any failure rolls the whole
    /// write back, so a rejected request never leaves a row behind. Every
    /// violated constraint contributes its own message.
    pub async fn create_hero_power(
        &self,
        request: &CreateHeroPower,
    ) -> Result<HeroPowerDetails, Error> {
        let tx = self.db.begin().await?;

        let mut errors = Vec::new();

        let strength = Strength::from_str(&request.strength).ok();
        if strength.is_none() {
            errors.push("strength must be one of Strong, Weak, Average".to_string());
        }

        let hero = hero::Entity::find_by_id(request.hero_id).one(&tx).await?;
        if hero.is_none() {
            errors.push("hero not found".to_string());
        }

        let power = power::Entity::find_by_id(request.power_id).one(&tx).await?;
        if power.is_none() {
            errors.push("power not found".to_string());
        }

        let (Some(strength), Some(hero), Some(power)) = (strength, hero, power) else {
            // dropping the transaction rolls it back
            return Err(Error::Validation(errors));
        };

        let hero_power = hero_power::ActiveModel {
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            strength: Set(strength),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        log::debug!(
            "hero {} wields power {} ({})",
            hero.id,
            power.id,
            hero_power.strength
        );

        Ok(HeroPowerDetails::from_entities(&hero_power, &hero, &power))
    }
}
