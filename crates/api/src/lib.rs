mod completion;
mod rate_limit;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use coach_agents::CoachAgent;
use coach_core::{ChatInput, ChatReply, MealPlan};
use coach_observability::{AppMetrics, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::rate_limit::IpRateLimiter;

pub use crate::completion::OpenAiCompletion;

const MAX_BODY_BYTES: usize = 32 * 1024;
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);
const RATE_LIMIT_MAX_REQUESTS: usize = 60;
const DEFAULT_PLAN_DAYS: u32 = 7;

#[derive(Clone)]
pub struct ApiState {
    pub agent: CoachAgent<OpenAiCompletion>,
    pub metrics: Arc<AppMetrics>,
    pub limiter: IpRateLimiter,
    pub completion_enabled: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    completion_enabled: bool,
    metrics: MetricsSnapshot,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MealPlanRequest {
    days: Option<u32>,
}

#[derive(Debug, Serialize)]
struct MealPlanResponse {
    plan: MealPlan,
    rendered: String,
}

#[derive(Debug, Deserialize)]
struct MacroRequest {
    foods: String,
}

#[derive(Debug, Serialize)]
struct MacroResponse {
    estimate: String,
}

/// Builds the HTTP application. The completion backend is wired from the
/// environment; without `COACH_OPENAI_API_KEY` the service answers purely
/// from the catalog and performs no outbound calls.
pub fn build_app() -> Router {
    let metrics = AppMetrics::shared();
    let completion = OpenAiCompletion::from_env().map(Arc::new);
    let completion_enabled = completion.is_some();
    let agent = CoachAgent::new(completion, metrics.clone());

    let state = ApiState {
        agent,
        metrics,
        limiter: IpRateLimiter::new(RATE_LIMIT_WINDOW, RATE_LIMIT_MAX_REQUESTS),
        completion_enabled,
    };

    let api_routes = Router::new()
        .route("/chat", post(chat))
        .route("/meal-plan", post(meal_plan))
        .route("/macros", post(macro_estimate))
        .route("/nutrients/:food", get(nutrients))
        .route("/winter-guide", get(winter_guide))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_layer,
        ));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn rate_limit_layer(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(request.headers());
    if !state.limiter.allow(&key) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "detail": "rate limit exceeded" })),
        )
            .into_response();
    }

    next.run(request).await
}

fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "local".to_string())
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Carnivore Coach",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/chat": "Chat about the carnivore diet",
            "/api/meal-plan": "Generate a multi-day meal plan",
            "/api/macros": "Rough macro estimate for a food list",
            "/api/nutrients/{food}": "Nutrient facts for a catalog food",
            "/api/winter-guide": "Winter vitamin protocol"
        }
    }))
}

async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp_utc: Utc::now().to_rfc3339(),
        completion_enabled: state.completion_enabled,
        metrics: state.metrics.snapshot(),
    })
}

async fn chat(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Json<ChatReply> {
    let reply = state
        .agent
        .handle_chat(ChatInput {
            message: request.message,
        })
        .await;

    Json(reply)
}

async fn meal_plan(
    State(state): State<ApiState>,
    Json(request): Json<MealPlanRequest>,
) -> Json<MealPlanResponse> {
    let plan = state
        .agent
        .meal_plan(request.days.unwrap_or(DEFAULT_PLAN_DAYS));
    let rendered = plan.render();

    Json(MealPlanResponse { plan, rendered })
}

async fn macro_estimate(
    State(state): State<ApiState>,
    Json(request): Json<MacroRequest>,
) -> Json<MacroResponse> {
    Json(MacroResponse {
        estimate: state.agent.macros(&request.foods),
    })
}

async fn nutrients(State(state): State<ApiState>, Path(food): Path<String>) -> Response {
    match state.agent.nutrients(&food) {
        Ok((profile, benefits)) => Json(json!({
            "food": profile.food.clone(),
            "nutrients": profile,
            "health_benefits": benefits,
        }))
        .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Food not found in database" })),
        )
            .into_response(),
    }
}

async fn winter_guide(State(state): State<ApiState>) -> Json<coach_core::WinterGuide> {
    Json(state.agent.winter_guide())
}
