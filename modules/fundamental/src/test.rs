use crate::{
    hero::{model::HeroHead, service::HeroService},
    power::{model::PowerHead, service::PowerService},
};
use herodex_test_context::{
    call::{self, CallService},
    HerodexContext,
};

pub async fn caller(ctx: &HerodexContext) -> anyhow::Result<impl CallService + '_> {
    call::caller(|svc| crate::endpoints::configure(svc, ctx.db.clone())).await
}

/// A couple of fixtures most tests start from.
pub async fn seed_hero(ctx: &HerodexContext) -> anyhow::Result<HeroHead> {
    Ok(HeroService::new(ctx.db.clone())
        .create_hero("Kamala Khan", "Ms. Marvel")
        .await?)
}

pub async fn seed_power(ctx: &HerodexContext) -> anyhow::Result<PowerHead> {
    Ok(PowerService::new(ctx.db.clone())
        .create_power("flight", "gives the wielder the ability to fly through the skies")
        .await?)
}
