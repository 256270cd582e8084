use crate::test::{caller, seed_hero, seed_power};
use actix_web::{http::StatusCode, test::TestRequest};
use herodex_entity::hero_power;
use herodex_test_context::{call::CallService, HerodexContext};
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn create_round_trip(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let hero = seed_hero(ctx).await?;
    let power = seed_power(ctx).await?;

    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Strong",
            "hero_id": hero.id,
            "power_id": power.id,
        }))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_web::test::read_body_json(response).await;

    assert_eq!(body["hero_id"], json!(hero.id));
    assert_eq!(body["power_id"], json!(power.id));
    assert_eq!(body["strength"], json!("Strong"));
    assert_eq!(
        body["hero"],
        json!({"id": hero.id, "name": "Kamala Khan", "super_name": "Ms. Marvel"})
    );
    assert_eq!(body["power"]["id"], json!(power.id));
    assert!(body["power"].get("hero_powers").is_none());

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn invalid_strength_is_rejected(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let hero = seed_hero(ctx).await?;
    let power = seed_power(ctx).await?;

    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Invincible",
            "hero_id": hero.id,
            "power_id": power.id,
        }))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"errors": ["strength must be one of Strong, Weak, Average"]})
    );

    // no row created
    assert!(hero_power::Entity::find().all(&ctx.db).await?.is_empty());

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn malformed_ids_are_rejected(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    // non-integer hero_id fails body validation before anything is looked up
    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Strong",
            "hero_id": "one",
            "power_id": 1,
        }))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_web::test::read_body_json(response).await;
    assert!(body["errors"].is_array());

    // missing hero_id as well
    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Strong",
            "power_id": 1,
        }))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn dangling_references_are_rejected(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Weak",
            "hero_id": 42,
            "power_id": 42,
        }))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, json!({"errors": ["hero not found", "power not found"]}));

    Ok(())
}
