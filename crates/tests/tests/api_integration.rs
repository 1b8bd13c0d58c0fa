use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use coach_api::build_app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = build_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["status"], "ok");
    assert!(parsed.get("metrics").is_some());
}

#[tokio::test]
async fn index_lists_endpoints() {
    let app = build_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert!(parsed["endpoints"].get("/api/chat").is_some());
}

#[tokio::test]
async fn chat_answers_food_questions_from_the_catalog() {
    let app = build_app();

    let response = app
        .oneshot(post_json(
            "/api/chat",
            json!({ "message": "What food can I have?" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["intent"], "food_choices");
    assert!(parsed["reply_text"]
        .as_str()
        .unwrap()
        .starts_with("On carnivore diet, eat:"));
    assert!(parsed["suggested_actions"].as_array().unwrap().len() >= 3);
}

#[tokio::test]
async fn chat_prefers_food_rule_over_winter_rule() {
    let app = build_app();

    let response = app
        .oneshot(post_json(
            "/api/chat",
            json!({ "message": "What food should I eat in winter?" }),
        ))
        .await
        .unwrap();

    let parsed = body_json(response).await;
    assert_eq!(parsed["intent"], "food_choices");
}

#[tokio::test]
async fn chat_without_message_falls_back_to_default_reply() {
    let app = build_app();

    let response = app.oneshot(post_json("/api/chat", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["intent"], "default");
    assert!(parsed["reply_text"]
        .as_str()
        .unwrap()
        .starts_with("The carnivore diet focuses on animal foods only."));
}

#[tokio::test]
async fn meal_plan_renders_requested_days() {
    let app = build_app();

    let response = app
        .oneshot(post_json("/api/meal-plan", json!({ "days": 3 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["plan"]["days"].as_array().unwrap().len(), 3);
    let rendered = parsed["rendered"].as_str().unwrap();
    assert!(rendered.starts_with("3-Day Carnivore Meal Plan:\n\n"));
    assert_eq!(rendered.matches("Or stick One Meal A day").count(), 3);
    assert_eq!(rendered, coach_core::build_meal_plan(3).render());
}

#[tokio::test]
async fn meal_plan_defaults_to_a_week() {
    let app = build_app();

    let response = app
        .oneshot(post_json("/api/meal-plan", json!({})))
        .await
        .unwrap();

    let parsed = body_json(response).await;
    assert_eq!(parsed["plan"]["requested_days"], 7);
}

#[tokio::test]
async fn zero_day_meal_plan_is_header_only() {
    let app = build_app();

    let response = app
        .oneshot(post_json("/api/meal-plan", json!({ "days": 0 })))
        .await
        .unwrap();

    let parsed = body_json(response).await;
    assert_eq!(parsed["rendered"], "0-Day Carnivore Meal Plan:\n\n");
}

#[tokio::test]
async fn macros_echo_the_food_list() {
    let app = build_app();

    let response = app
        .oneshot(post_json("/api/macros", json!({ "foods": "eggs, cheese" })))
        .await
        .unwrap();

    let parsed = body_json(response).await;
    let estimate = parsed["estimate"].as_str().unwrap();
    assert!(estimate.contains("eggs, cheese"));
    assert!(estimate.contains("75% fat, 20% protein, 5% carbs"));
}

#[tokio::test]
async fn unknown_nutrient_food_is_not_found() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nutrients/kale")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let parsed = body_json(response).await;
    assert_eq!(parsed["detail"], "Food not found in database");
}

#[tokio::test]
async fn nutrient_lookup_returns_profile_and_benefits() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nutrients/liver")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["food"], "liver");
    assert_eq!(parsed["nutrients"]["calories"], 153);
    assert_eq!(
        parsed["health_benefits"].as_array().unwrap()[0],
        "Nature's multivitamin"
    );
}

#[tokio::test]
async fn winter_guide_is_served() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/winter-guide")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["title"], "Winter Vitamin Protocol for Carnivores");
    assert_eq!(parsed["supplement_protocol"].as_array().unwrap().len(), 4);
}
