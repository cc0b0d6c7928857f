//! Generates a plan for a guest request and prints it as JSON.
//!
//! Without `HUGGINGFACE_API_KEY` set, the template plan is printed instead.
//!
//! Run with: cargo run --example quick_plan -- "Quero treinar 4x por semana"

use anyhow::Result;
use gymia_planner::observability::{self, ObservabilityConfig};
use gymia_planner::{PlanAnalysis, PlanPipeline, UserProfile, fallback_plan};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init(ObservabilityConfig::default()).map_err(|e| anyhow::anyhow!("{e}"))?;

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Quero um treino para ganhar força".to_string());

    let profile = UserProfile::new()
        .with_available_days(4)
        .with_session_duration(50)
        .with_goal("Força");

    let plan = match PlanPipeline::from_env() {
        Ok(pipeline) => pipeline.generate_workout_plan(&message, &profile).await,
        Err(err) => {
            tracing::warn!("{}; printing the template plan", err);
            fallback_plan(&profile)
        }
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);

    let analysis = PlanAnalysis::of(&plan);
    println!(
        "{} sessions/week, {} sets/week, {} distinct exercises",
        analysis.sessions_per_week, analysis.sets_per_week, analysis.unique_exercises
    );
    for recommendation in analysis.recommendations() {
        println!("- {}", recommendation);
    }

    Ok(())
}
