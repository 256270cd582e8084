use crate::Error;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use herodex_common::db::Database;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    config.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    crate::hero::endpoints::configure(config, db.clone());
    crate::power::endpoints::configure(config, db.clone());
    crate::hero_power::endpoints::configure(config, db);
}

/// A body which fails to deserialize is a validation failure like any other,
/// so it surfaces as a 422 `errors` array instead of actix' default 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::Validation(vec![err.to_string()]).into()
}
