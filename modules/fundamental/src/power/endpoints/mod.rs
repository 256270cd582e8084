
use crate::{
    power::{
        model::{PowerHead, UpdatePower},
        service::PowerService,
    },
    Error,
};
use actix_web::{get, patch, web, HttpResponse, Responder};
use herodex_common::{
    db::Database,
    error::{ErrorBody, ErrorsBody},
};

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    config
        .app_data(web::Data::new(PowerService::new(db)))
        .service(all)
        .service(get)
        .service(update);
}

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers", body = [PowerHead]),
    ),
)]
#[get("/powers")]
/// List powers
pub async fn all(service: web::Data<PowerService>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.list_powers().await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "The matching power", body = PowerHead),
        (status = 404, description = "Power not found", body = ErrorBody),
    ),
)]
#[get("/powers/{id}")]
/// Retrieve a power
pub async fn get(
    service: web::Data<PowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match service.fetch_power(*id).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::NotFound("Power").into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    request_body = UpdatePower,
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "The updated power", body = PowerHead),
        (status = 404, description = "Power not found", body = ErrorBody),
        (status = 422, description = "Invalid description", body = ErrorsBody),
    ),
)]
#[patch("/powers/{id}")]
/// Update a power's description
pub async fn update(
    service: web::Data<PowerService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<UpdatePower>,
) -> actix_web::Result<impl Responder> {
    match service.update_description(*id, &request.description).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::NotFound("Power").into()),
    }
}
