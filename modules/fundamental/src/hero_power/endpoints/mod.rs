#[cfg(test)]
mod test;

use crate::hero_power::{
    model::{CreateHeroPower, HeroPowerDetails},
    service::HeroPowerService,
};
use actix_web::{post, web, HttpResponse, Responder};
use herodex_common::{db::Database, error::ErrorsBody};

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    config
        .app_data(web::Data::new(HeroPowerService::new(db)))
        .service(create);
}

#[utoipa::path(
    tag = "hero_power",
    operation_id = "createHeroPower",
    request_body = CreateHeroPower,
    responses(
        (status = 201, description = "The created association, hero and power embedded", body = HeroPowerDetails),
        (status = 422, description = "Invalid strength or dangling reference", body = ErrorsBody),
    ),
)]
#[post("/hero_powers")]
/// Associate a hero with a power
pub async fn create(
    service: web::Data<HeroPowerService>,
    web::Json(request): web::Json<CreateHeroPower>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(service.create_hero_power(&request).await?))
}
