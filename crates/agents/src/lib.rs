mod completion;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use coach_core::{
    build_meal_plan, classify_intent, compose_chat_reply, estimate_macros, food_benefits,
    normalize_text, nutrient_profile, suggest_meals, winter_guide, ChatInput, ChatReply,
    CoreError, Intent, MealPlan, MealSlot, NutrientProfile, WinterGuide,
};
use coach_observability::AppMetrics;
use tracing::{info, instrument, warn};

pub use completion::{CompletionService, NoCompletion};

/// Facade over the pure core. The classifier and catalog are plain static
/// data, so the agent itself holds only the optional completion backend and
/// the shared metrics handle; cloning is cheap and every entry point is safe
/// to call concurrently.
#[derive(Clone)]
pub struct CoachAgent<C = NoCompletion>
where
    C: CompletionService,
{
    completion: Option<Arc<C>>,
    metrics: Arc<AppMetrics>,
}

impl CoachAgent<NoCompletion> {
    pub fn without_completion(metrics: Arc<AppMetrics>) -> Self {
        Self {
            completion: None,
            metrics,
        }
    }
}

impl<C> CoachAgent<C>
where
    C: CompletionService,
{
    pub fn new(completion: Option<Arc<C>>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            completion,
            metrics,
        }
    }

    /// The advisor entry point: normalize, classify, answer from the
    /// catalog. Never fails; an internal error is reported back to the user
    /// as text instead of crossing this boundary.
    pub fn advise(&self, text: Option<&str>) -> String {
        self.metrics.inc_request();

        match self.try_advise(text) {
            Ok(reply) => reply,
            Err(error) => {
                self.metrics.inc_recovered_error();
                warn!(%error, "advise recovered from internal failure");
                format!("I encountered an error: {error}")
            }
        }
    }

    fn try_advise(&self, text: Option<&str>) -> Result<String> {
        let normalized = normalize_text(text);
        let intent = classify_intent(&normalized);
        Ok(compose_chat_reply(intent).reply_text)
    }

    /// Chat entry point for the hosting layers. Catalog-backed like
    /// [`Self::advise`], but for unclassified input it consults the optional
    /// completion backend; any backend failure falls back to the catalog
    /// text for `Intent::Default`.
    #[instrument(skip(self, input))]
    pub async fn handle_chat(&self, input: ChatInput) -> ChatReply {
        let started = Instant::now();
        self.metrics.inc_request();
        self.metrics.inc_chat();

        let normalized = normalize_text(input.message.as_deref());
        let intent = classify_intent(&normalized);
        let mut reply = compose_chat_reply(intent);

        if intent == Intent::Default && !normalized.is_empty() {
            if let Some(completion) = &self.completion {
                self.metrics.inc_completion();
                match completion.complete(&normalized).await {
                    Ok(text) if !text.trim().is_empty() => reply.reply_text = text,
                    Ok(_) => {}
                    Err(error) => {
                        self.metrics.inc_recovered_error();
                        warn!(%error, "completion backend failed, keeping catalog reply");
                    }
                }
            }
        }

        self.metrics.observe_latency(started.elapsed());
        info!(intent = ?intent, "chat handled");
        reply
    }

    pub fn meal_plan(&self, days: u32) -> MealPlan {
        self.metrics.inc_request();
        build_meal_plan(days)
    }

    pub fn macros(&self, foods: &str) -> String {
        self.metrics.inc_request();
        estimate_macros(foods)
    }

    pub fn meal_suggestions(&self, slot: MealSlot) -> Vec<&'static str> {
        self.metrics.inc_request();
        suggest_meals(slot)
    }

    pub fn nutrients(&self, food: &str) -> Result<(NutrientProfile, Vec<&'static str>), CoreError> {
        self.metrics.inc_request();
        let profile = nutrient_profile(food)?;
        let benefits = food_benefits(food);
        Ok((profile, benefits))
    }

    pub fn winter_guide(&self) -> WinterGuide {
        self.metrics.inc_request();
        winter_guide()
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }
}
