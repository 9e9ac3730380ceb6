//! Integration tests for the reward catalog and the redemption gate.

mod common;

use axum::body::Body;
use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, seed_client, seed_salon};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

async fn seed_reward(app: axum::Router, salon: i64, name: &str, cost: i64) -> i64 {
    let response = post_json(
        app,
        "/api/v1/loyalty/rewards",
        json!({ "salon_id": salon, "name": name, "points_cost": cost }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["data"]["id"].as_i64().unwrap()
}

async fn earn(app: axum::Router, client: i64, salon: i64, points: i64) {
    let response = post_json(
        app,
        "/api/v1/loyalty/earn",
        json!({ "client_id": client, "salon_id": salon, "points": points, "source": "appointment" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Catalog CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn rewards_list_cheapest_first_and_hides_inactive(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let app = common::build_test_app(pool);

    let expensive = seed_reward(app.clone(), salon, "Full Day Spa", 2000).await;
    seed_reward(app.clone(), salon, "Free Blowout", 300).await;
    seed_reward(app.clone(), salon, "Product Discount", 150).await;

    delete(
        app.clone(),
        &format!("/api/v1/loyalty/rewards/{expensive}?salon_id={salon}"),
    )
    .await;

    let response = get(app.clone(), &format!("/api/v1/loyalty/rewards?salon_id={salon}")).await;
    let body = body_json(response).await;
    let costs: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["points_cost"].as_i64().unwrap())
        .collect();
    assert_eq!(costs, [150, 300]);

    let response = get(
        app,
        &format!("/api/v1/loyalty/rewards?salon_id={salon}&include_inactive=true"),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reward_create_rejects_non_positive_cost(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/loyalty/rewards",
        json!({ "salon_id": salon, "name": "Freebie", "points_cost": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reward_partial_update(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let app = common::build_test_app(pool);
    let id = seed_reward(app.clone(), salon, "Free Blowout", 300).await;

    let response = put_json(
        app,
        &format!("/api/v1/loyalty/rewards/{id}?salon_id={salon}"),
        json!({ "points_cost": 250 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Free Blowout");
    assert_eq!(body["data"]["points_cost"], 250);
}

// ---------------------------------------------------------------------------
// Redemption gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn redeem_reward_debits_and_records_attribution(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let client = seed_client(&pool, salon).await;
    let app = common::build_test_app(pool);
    let reward = seed_reward(app.clone(), salon, "Free Blowout", 300).await;
    earn(app.clone(), client, salon, 500).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/loyalty/rewards/{reward}/redeem"),
        json!({ "client_id": client, "salon_id": salon }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["reward_id"], reward);
    assert_eq!(body["data"]["points_spent"], 300);
    assert_eq!(body["data"]["account"]["points_balance"], 200);
    assert!(body["data"]["redeemed_at"].is_string());

    // The ledger row points back at the reward.
    let response = get(
        app,
        &format!("/api/v1/loyalty/transactions?client_id={client}&salon_id={salon}"),
    )
    .await;
    let body = body_json(response).await;
    let latest: &Value = &body["data"].as_array().unwrap()[0];
    assert_eq!(latest["kind"], "redeem");
    assert_eq!(latest["points"], -300);
    assert_eq!(latest["source"], "reward_redemption");
    assert_eq!(latest["source_id"], reward);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn redeem_unknown_reward_returns_404(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let client = seed_client(&pool, salon).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/loyalty/rewards/9999/redeem",
        json!({ "client_id": client, "salon_id": salon }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn redeem_deactivated_reward_returns_409(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let client = seed_client(&pool, salon).await;
    let app = common::build_test_app(pool);
    let reward = seed_reward(app.clone(), salon, "Free Blowout", 300).await;
    earn(app.clone(), client, salon, 500).await;

    delete(
        app.clone(),
        &format!("/api/v1/loyalty/rewards/{reward}?salon_id={salon}"),
    )
    .await;

    let response = post_json(
        app,
        &format!("/api/v1/loyalty/rewards/{reward}/redeem"),
        json!({ "client_id": client, "salon_id": salon }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "REWARD_INACTIVE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn redeem_reward_with_insufficient_balance_returns_409(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let client = seed_client(&pool, salon).await;
    let app = common::build_test_app(pool);
    let reward = seed_reward(app.clone(), salon, "Full Day Spa", 2000).await;
    earn(app.clone(), client, salon, 500).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/loyalty/rewards/{reward}/redeem"),
        json!({ "client_id": client, "salon_id": salon }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");

    // Balance untouched.
    let response = get(
        app,
        &format!("/api/v1/loyalty/accounts?client_id={client}&salon_id={salon}"),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["points_balance"], 500);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn concurrent_reward_redemptions_cannot_overspend(pool: PgPool) {
    let salon = seed_salon(&pool).await;
    let client = seed_client(&pool, salon).await;
    let app = common::build_test_app(pool);
    let reward = seed_reward(app.clone(), salon, "Free Blowout", 300).await;
    earn(app.clone(), client, salon, 500).await;

    let request = |app: axum::Router| async move {
        app.oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri(format!("/api/v1/loyalty/rewards/{reward}/redeem"))
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "client_id": client, "salon_id": salon }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap()
    };

    let (first, second) = futures::join!(request(app.clone()), request(app.clone()));
    let statuses = [first.status(), second.status()];
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::OK).count(),
        1,
        "exactly one of two concurrent redemptions may succeed: {statuses:?}"
    );
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::CONFLICT)
            .count(),
        1
    );

    let response = get(
        app,
        &format!("/api/v1/loyalty/accounts?client_id={client}&salon_id={salon}"),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["points_balance"], 200);
}
