// ABOUTME: LLM-backed motivational summary for a generated meal plan
// ABOUTME: Bounded by a timeout and always falls back to a deterministic template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Insight Generator
//!
//! Produces the short coaching note attached to every `PlanResult`.
//!
//! The generator never fails: a missing provider, a provider error, a timeout
//! or an empty reply all yield the template summary, tagged with
//! `InsightSource::Fallback` and the reason.
//!
//! ```rust,no_run
//! use mealwise::intelligence::InsightGenerator;
//! use mealwise::config::InsightConfig;
//!
//! let generator = InsightGenerator::without_llm(InsightConfig::default());
//! assert!(generator.provider_name().is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::config::InsightConfig;
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use crate::models::{Insight, InsightSource, MacroTargets, MealPlan, UserProfile};

/// Writes plan summaries through an optional LLM provider
#[derive(Clone)]
pub struct InsightGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
    config: InsightConfig,
}

impl InsightGenerator {
    /// Create a generator; `None` means every insight uses the template
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, config: InsightConfig) -> Self {
        Self { provider, config }
    }

    /// Generator that never calls an LLM
    #[must_use]
    pub fn without_llm(config: InsightConfig) -> Self {
        Self::new(None, config)
    }

    /// Name of the configured provider, if any
    #[must_use]
    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|provider| provider.name())
    }

    /// Summarize `plan` for `profile`
    #[instrument(skip_all, fields(provider = self.provider_name().unwrap_or("none"), goal = %profile.goal))]
    pub async fn generate(
        &self,
        profile: &UserProfile,
        targets: &MacroTargets,
        plan: &MealPlan,
    ) -> Insight {
        let Some(provider) = &self.provider else {
            return fallback(profile, targets, plan, "no LLM provider configured");
        };

        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::get_insight_system_prompt()),
            ChatMessage::user(build_insight_prompt(profile, targets, plan)),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        match timeout(self.config.timeout(), provider.complete(&request)).await {
            Ok(Ok(response)) => {
                let text = response.content.trim();
                if text.is_empty() {
                    warn!("LLM returned an empty insight");
                    return fallback(profile, targets, plan, "empty response");
                }
                debug!(model = %response.model, chars = text.len(), "LLM insight received");
                Insight {
                    text: text.to_owned(),
                    source: InsightSource::Llm {
                        provider: provider.name().to_owned(),
                        model: response.model,
                    },
                }
            }
            Ok(Err(e)) => {
                warn!(error = %e, code = ?e.code, "LLM insight failed");
                // Provider messages stay in the logs; results only carry the code
                fallback(
                    profile,
                    targets,
                    plan,
                    &format!("provider error: {}", e.code.description()),
                )
            }
            Err(_) => {
                warn!(timeout_secs = self.config.timeout_secs, "LLM insight timed out");
                fallback(
                    profile,
                    targets,
                    plan,
                    &format!("timed out after {}s", self.config.timeout_secs),
                )
            }
        }
    }
}

impl fmt::Debug for InsightGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightGenerator")
            .field("provider", &self.provider_name())
            .field("config", &self.config)
            .finish()
    }
}

/// User prompt describing the goal, the exact target and the plan averages
#[must_use]
pub fn build_insight_prompt(profile: &UserProfile, targets: &MacroTargets, plan: &MealPlan) -> String {
    let average = plan.average_totals();
    format!(
        "USER GOAL: {goal}\n\
         TARGET CALORIES: {target:.0} kcal (USE THIS EXACT NUMBER)\n\
         PLAN: {days} days averaging {avg_kcal:.0} kcal, {protein:.0} g protein, \
         {carbs:.0} g carbs and {fat:.0} g fat per day\n\
         TASK: Write a 2-sentence motivational summary explaining how this \
         {target:.0} kcal plan helps the user reach their goal. Avoid mentioning specific foods.",
        goal = profile.goal,
        target = targets.calories,
        days = plan.days.len(),
        avg_kcal = average.calories,
        protein = average.protein_g,
        carbs = average.carbs_g,
        fat = average.fat_g,
    )
}

/// Template summary used whenever the LLM cannot answer
#[must_use]
pub fn fallback_text(profile: &UserProfile, targets: &MacroTargets, plan: &MealPlan) -> String {
    let average = plan.average_totals();
    format!(
        "Your {target:.0} kcal plan is carefully designed to support your {goal} goals. \
         Across {days} days it averages {avg_kcal:.0} kcal with {protein:.0} g protein, \
         {carbs:.0} g carbs and {fat:.0} g fat per day, which keeps energy, recovery and \
         consistency on track. Stay committed for the best results.",
        target = targets.calories,
        goal = profile.goal.to_string().to_lowercase(),
        days = plan.days.len(),
        avg_kcal = average.calories,
        protein = average.protein_g,
        carbs = average.carbs_g,
        fat = average.fat_g,
    )
}

fn fallback(profile: &UserProfile, targets: &MacroTargets, plan: &MealPlan, reason: &str) -> Insight {
    Insight {
        text: fallback_text(profile, targets, plan),
        source: InsightSource::Fallback {
            reason: reason.to_owned(),
        },
    }
}
