//! 'gymia-planner' - Workout plan generation for the GymIA coaching assistant.
//!
//! The crate turns a free-text request and a sparse user profile into a
//! structured four-week [`WorkoutPlan`]. A hosted text-generation model
//! supplies the plan's title, description and tips; the weekly schedule
//! always comes from a deterministic template, and when the model cannot be
//! reached the whole plan does.
//!
//! # Example
//!
//! ```rust,no_run
//! use gymia_planner::{PlanPipeline, UserProfile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = PlanPipeline::from_env()?;
//! let profile = UserProfile::new().with_available_days(4).with_goal("Hipertrofia");
//!
//! let plan = pipeline
//!     .generate_workout_plan("Quero um treino de 4 dias", &profile)
//!     .await;
//! assert_eq!(plan.weeks.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod client;
pub mod extract;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod prompt;
pub mod template;

pub use analysis::PlanAnalysis;
pub use client::{ClientConfig, ClientError, HuggingFaceClient, ModelClient};
pub use extract::PlanExtractor;
pub use models::{DayPlan, Exercise, FitnessLevel, UserProfile, WeekPlan, WorkoutPlan};
pub use pipeline::{PlanOutcome, PlanPipeline};
pub use prompt::{ToPrompt, build_prompt};
pub use template::{fallback_plan, generate_weeks};
