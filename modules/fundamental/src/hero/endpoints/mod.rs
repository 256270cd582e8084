#[cfg(test)]
mod test;

use crate::{
    hero::{
        model::{HeroDetails, HeroHead},
        service::HeroService,
    },
    Error,
};
use actix_web::{get, web, HttpResponse, Responder};
use herodex_common::{db::Database, error::ErrorBody};

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    config
        .app_data(web::Data::new(HeroService::new(db)))
        .service(all)
        .service(get);
}

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes", body = [HeroHead]),
    ),
)]
#[get("/heroes")]
/// List heroes
pub async fn all(service: web::Data<HeroService>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.list_heroes().await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "The matching hero, powers embedded", body = HeroDetails),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[get("/heroes/{id}")]
/// Retrieve a hero with its powers
pub async fn get(
    service: web::Data<HeroService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match service.fetch_hero(*id).await? {
        Some(hero) => Ok(HttpResponse::Ok().json(hero)),
        None => Err(Error::NotFound("Hero").into()),
    }
}
