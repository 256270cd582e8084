use crate::{hero::model::HeroHead, hero_power::model::HeroPowerSummary, Error};
use herodex_entity::{hero, hero_power, power};
use sea_orm::{ConnectionTrait, ModelTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A hero with its powers embedded one level deep.
///
/// The embedded summaries carry a [`crate::power::model::PowerHead`], never
/// the owning hero again, so serialization always terminates.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroHead,

    /// The hero's powers, in creation order.
    pub hero_powers: Vec<HeroPowerSummary>,
}

impl HeroDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        hero: &hero::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        let rows = hero
            .find_related(hero_power::Entity)
            .order_by_asc(hero_power::Column::Id)
            .find_also_related(power::Entity)
            .all(connection)
            .await?;

        let mut hero_powers = Vec::new();
        for (hero_power, power) in rows {
            let power = power.ok_or_else(|| {
                anyhow::anyhow!("hero_power {} references a missing power", hero_power.id)
            })?;
            hero_powers.push(HeroPowerSummary::from_entities(&hero_power, &power));
        }

        Ok(Self {
            head: HeroHead::from_entity(hero),
            hero_powers,
        })
    }
}
