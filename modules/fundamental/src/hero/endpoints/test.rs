use crate::{
    hero_power::{model::CreateHeroPower, service::HeroPowerService},
    test::{caller, seed_hero, seed_power},
};
use actix_web::{http::StatusCode, test::TestRequest};
use herodex_test_context::{call::CallService, HerodexContext};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn list_heroes(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let hero = seed_hero(ctx).await?;

    let request = TestRequest::get().uri("/heroes").to_request();
    let response: Value = app.call_and_read_body_json(request).await;

    assert_eq!(
        response,
        json!([{"id": hero.id, "name": "Kamala Khan", "super_name": "Ms. Marvel"}])
    );

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn get_hero_embeds_powers_one_level(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let hero = seed_hero(ctx).await?;
    let power = seed_power(ctx).await?;

    HeroPowerService::new(ctx.db.clone())
        .create_hero_power(&CreateHeroPower {
            strength: "Strong".into(),
            hero_id: hero.id,
            power_id: power.id,
        })
        .await?;

    let request = TestRequest::get()
        .uri(&format!("/heroes/{}", hero.id))
        .to_request();
    let response: Value = app.call_and_read_body_json(request).await;

    assert_eq!(response["id"], json!(hero.id));
    assert_eq!(response["super_name"], json!("Ms. Marvel"));

    let hero_powers = response["hero_powers"]
        .as_array()
        .expect("hero_powers is an array");
    assert_eq!(hero_powers.len(), 1);
    assert_eq!(hero_powers[0]["strength"], json!("Strong"));
    assert_eq!(hero_powers[0]["hero_id"], json!(hero.id));
    assert_eq!(hero_powers[0]["power"]["name"], json!("flight"));

    // embedding stops after one level: no hero inside the association, no
    // hero_powers inside the embedded power
    assert!(hero_powers[0].get("hero").is_none());
    assert!(hero_powers[0]["power"].get("hero_powers").is_none());

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn missing_hero_is_404(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::get().uri("/heroes/999").to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, json!({"error": "Hero not found"}));

    Ok(())
}
