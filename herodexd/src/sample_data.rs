use herodex_common::db::Database;
use herodex_module_fundamental::{
    hero::service::HeroService,
    hero_power::{model::CreateHeroPower, service::HeroPowerService},
    power::service::PowerService,
};

/// Load the sample fixtures, going through the regular validated write paths.
/// Does nothing when heroes already exist.
pub async fn sample_data(db: &Database) -> anyhow::Result<()> {
    let heroes = HeroService::new(db.clone());

    if !heroes.list_heroes().await?.is_empty() {
        log::info!("sample data already present, skipping");
        return Ok(());
    }

    let powers = PowerService::new(db.clone());
    let hero_powers = HeroPowerService::new(db.clone());

    let super_strength = powers
        .create_power(
            "super strength",
            "gives the wielder super-human strengths",
        )
        .await?;
    let flight = powers
        .create_power(
            "flight",
            "gives the wielder the ability to fly through the skies at supersonic speed",
        )
        .await?;
    powers
        .create_power(
            "super human senses",
            "allows the wielder to use her senses at a super-human level",
        )
        .await?;
    powers
        .create_power(
            "elasticity",
            "can stretch the human body to extreme lengths",
        )
        .await?;

    let kamala = heroes.create_hero("Kamala Khan", "Ms. Marvel").await?;
    heroes.create_hero("Doreen Green", "Squirrel Girl").await?;
    let gwen = heroes.create_hero("Gwen Stacy", "Spider-Gwen").await?;
    heroes.create_hero("Janet Van Dyne", "The Wasp").await?;
    heroes.create_hero("Wanda Maximoff", "Scarlet Witch").await?;
    heroes.create_hero("Carol Danvers", "Captain Marvel").await?;
    heroes.create_hero("Jean Grey", "Dark Phoenix").await?;
    heroes.create_hero("Ororo Munroe", "Storm").await?;
    heroes.create_hero("Kitty Pryde", "Shadowcat").await?;
    heroes.create_hero("Elektra Natchios", "Elektra").await?;

    for (hero_id, power_id, strength) in [
        (kamala.id, super_strength.id, "Strong"),
        (kamala.id, flight.id, "Average"),
        (gwen.id, super_strength.id, "Weak"),
    ] {
        hero_powers
            .create_hero_power(&CreateHeroPower {
                strength: strength.into(),
                hero_id,
                power_id,
            })
            .await?;
    }

    log::info!("seeded sample data");
    Ok(())
}
