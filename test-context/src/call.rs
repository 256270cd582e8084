use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test::init_service,
    web, App, Error,
};
use serde::de::DeserializeOwned;
use std::future::Future;

/// A trait wrapping an `impl Service` in a way that we can pass it as a reference.
pub trait CallService {
    fn call_service(&self, r: Request) -> impl Future<Output = ServiceResponse>;
    fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> impl Future<Output = T>;
}

impl<S> CallService for S
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    async fn call_service(&self, r: Request) -> ServiceResponse {
        actix_web::test::call_service(self, r).await
    }

    async fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> T {
        actix_web::test::call_and_read_body_json(self, r).await
    }
}

/// Initialize a test service from an endpoint configuration.
pub async fn caller<F>(configure: F) -> anyhow::Result<impl CallService>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    Ok(init_service(App::new().configure(configure)).await)
}
