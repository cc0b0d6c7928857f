//! The plan generation pipeline.
//!
//! build prompt → one model call → extract, or the template fallback when
//! the model call fails. [`PlanPipeline::generate_workout_plan`] always
//! resolves to a usable plan.

use crate::client::{ClientError, HuggingFaceClient, ModelClient};
use crate::extract::PlanExtractor;
use crate::models::{UserProfile, WorkoutPlan};
use crate::prompt::build_prompt;
use crate::template::fallback_plan;
use tracing::{debug, info, warn};

/// Which path produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// The model answered and its text was run through the extractor.
    Extracted,
    /// The model call failed and the template plan was returned.
    Fallback,
}

/// Orchestrates prompt building, the model call and plan extraction.
///
/// Holds no per-request state, so one pipeline can serve concurrent calls.
pub struct PlanPipeline<C> {
    client: C,
    extractor: PlanExtractor,
}

impl PlanPipeline<HuggingFaceClient> {
    /// Creates a Hugging Face backed pipeline from `HUGGINGFACE_*` variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::new(HuggingFaceClient::try_from_env()?))
    }
}

impl<C: ModelClient> PlanPipeline<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            extractor: PlanExtractor::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generates a plan for `user_message`. Never fails.
    pub async fn generate_workout_plan(
        &self,
        user_message: &str,
        profile: &UserProfile,
    ) -> WorkoutPlan {
        self.generate_with_outcome(user_message, profile).await.0
    }

    /// Like [`Self::generate_workout_plan`], also reporting which path was taken.
    pub async fn generate_with_outcome(
        &self,
        user_message: &str,
        profile: &UserProfile,
    ) -> (WorkoutPlan, PlanOutcome) {
        info!(
            client = self.client.name(),
            "Generating workout plan for message: {}...",
            preview(user_message, 100)
        );

        let prompt = build_prompt(user_message, profile);

        match self.client.generate_text(&prompt).await {
            Ok(raw_text) => {
                debug!("Model returned {} bytes", raw_text.len());
                (
                    self.extractor.extract(&raw_text, profile),
                    PlanOutcome::Extracted,
                )
            }
            Err(err) => {
                warn!(
                    timeout = err.is_timeout(),
                    "Model call failed, using template plan: {}", err
                );
                (fallback_plan(profile), PlanOutcome::Fallback)
            }
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
