//! Prompt construction for workout plan generation.

use crate::models::UserProfile;
use minijinja::Environment;
use serde::Serialize;
use tracing::warn;

/// A trait for converting a value into a prompt fragment.
pub trait ToPrompt {
    /// Converts the object into a prompt string.
    fn to_prompt(&self) -> String;
}

/// Renders a prompt from a template string and a serializable context.
pub fn render_prompt<T: Serialize>(template: &str, context: T) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("prompt", template)?;
    let tmpl = env.get_template("prompt")?;
    tmpl.render(context)
}

/// Training heuristics every request is grounded on.
pub const SCIENTIFIC_CONTEXT: &str = "\
Based on scientific research on high-frequency, low-volume training:
- Higher training frequency (4-6x/week per muscle group) is more effective than low frequency
- Lower volume per session prevents excessive fatigue and allows for better recovery
- Progressive overload should be applied gradually
- Compound movements should form the foundation of training
- Rest periods: 2-3 minutes for compound exercises, 1-2 minutes for isolation";

/// Closing instructions asking for a structured weekly plan.
pub const PLAN_INSTRUCTIONS: &str = "\
Create a detailed workout plan that follows these guidelines:
1. Use high-frequency, low-volume principles
2. Include specific exercises, sets, reps, and rest periods
3. Provide progression guidelines
4. Consider the user's constraints and goals
5. Format as a structured weekly plan

Generate a comprehensive workout plan:";

const PROFILE_TEMPLATE: &str = "\
User Profile:
- Age: {{ age }}
- Fitness Level: {{ fitness_level }}
- Available Days: {{ available_days }} days per week
- Session Duration: {{ session_duration }} minutes
- Goals: {{ goals | join(\", \") }}
- Equipment: {{ equipment | join(\", \") }}";

const DEFAULT_AGE: &str = "Not specified";
const DEFAULT_GOALS: &str = "General fitness";
const DEFAULT_EQUIPMENT: &str = "Basic gym equipment";

/// Profile values with every default already applied.
#[derive(Serialize)]
struct ProfileSummary {
    age: String,
    fitness_level: String,
    available_days: u32,
    session_duration: u32,
    goals: Vec<String>,
    equipment: Vec<String>,
}

impl ProfileSummary {
    fn from_profile(profile: &UserProfile) -> Self {
        fn or_default(items: &[String], default: &str) -> Vec<String> {
            if items.is_empty() {
                vec![default.to_string()]
            } else {
                items.to_vec()
            }
        }

        Self {
            age: profile
                .age
                .filter(|age| *age > 0)
                .map(|age| age.to_string())
                .unwrap_or_else(|| DEFAULT_AGE.to_string()),
            fitness_level: profile.level().to_string(),
            available_days: profile.days_per_week(),
            session_duration: profile.session_minutes(),
            goals: or_default(&profile.goals, DEFAULT_GOALS),
            equipment: or_default(&profile.equipment, DEFAULT_EQUIPMENT),
        }
    }
}

impl ToPrompt for UserProfile {
    fn to_prompt(&self) -> String {
        let summary = ProfileSummary::from_profile(self);
        render_prompt(PROFILE_TEMPLATE, &summary).unwrap_or_else(|err| {
            warn!("Profile template failed to render: {}", err);
            format!(
                "User Profile:\n- Age: {}\n- Fitness Level: {}\n- Available Days: {} days per week\n- Session Duration: {} minutes\n- Goals: {}\n- Equipment: {}",
                summary.age,
                summary.fitness_level,
                summary.available_days,
                summary.session_duration,
                summary.goals.join(", "),
                summary.equipment.join(", "),
            )
        })
    }
}

/// Builds the full generation prompt.
///
/// Sections, in order: training heuristics, profile summary, the user's
/// message verbatim, and the plan instructions.
pub fn build_prompt(user_message: &str, profile: &UserProfile) -> String {
    [
        SCIENTIFIC_CONTEXT.to_string(),
        profile.to_prompt(),
        format!("User Message: \"{}\"", user_message),
        PLAN_INSTRUCTIONS.to_string(),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    #[test]
    fn test_empty_profile_uses_defaults() {
        let prompt = build_prompt("Quero ganhar força", &UserProfile::default());

        for expected in [
            "Not specified",
            "Beginner",
            "3",
            "60",
            "General fitness",
            "Basic gym equipment",
        ] {
            assert!(prompt.contains(expected), "missing {expected:?} in prompt");
        }
    }

    #[test]
    fn test_sections_are_ordered() {
        let prompt = build_prompt("Treino para iniciantes", &UserProfile::default());

        let heuristics = prompt.find("high-frequency, low-volume").unwrap();
        let profile = prompt.find("User Profile:").unwrap();
        let message = prompt.find("User Message: \"Treino para iniciantes\"").unwrap();
        let instructions = prompt.find("Generate a comprehensive workout plan:").unwrap();

        assert!(heuristics < profile);
        assert!(profile < message);
        assert!(message < instructions);
    }

    #[test]
    fn test_profile_values_are_interpolated() {
        let profile = UserProfile::new()
            .with_age(28)
            .with_fitness_level(FitnessLevel::Advanced)
            .with_available_days(5)
            .with_session_duration(45)
            .with_goal("Hipertrofia")
            .with_goal("Força")
            .with_equipment("Halteres");

        let summary = profile.to_prompt();
        assert!(summary.contains("- Age: 28"));
        assert!(summary.contains("- Fitness Level: Advanced"));
        assert!(summary.contains("- Available Days: 5 days per week"));
        assert!(summary.contains("- Session Duration: 45 minutes"));
        assert!(summary.contains("- Goals: Hipertrofia, Força"));
        assert!(summary.contains("- Equipment: Halteres"));
        assert!(!summary.contains("Basic gym equipment"));
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let message = "Treino com {{ chaves }} e \"aspas\" <b>";
        let prompt = build_prompt(message, &UserProfile::default());
        assert!(prompt.contains(message));
    }

    #[test]
    fn test_render_prompt() {
        let rendered = render_prompt("{{ a }} + {{ b }}", minijinja::context!(a => 1, b => 2)).unwrap();
        assert_eq!(rendered, "1 + 2");
    }
}
