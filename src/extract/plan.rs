//! Turns raw model text into a [`WorkoutPlan`].

use super::LabeledLineExtractor;
use crate::models::{UserProfile, WorkoutPlan};
use crate::template::generate_weeks;
use chrono::Utc;

pub const TITLE_LABELS: [&str; 3] = ["título", "title", "plano"];
pub const DESCRIPTION_LABELS: [&str; 2] = ["descrição", "description"];
pub const TIP_LABELS: [&str; 3] = ["dica", "tip", "dicas"];

pub const DEFAULT_TITLE: &str = "Plano Personalizado de Treino";
pub const DEFAULT_DESCRIPTION: &str =
    "Plano de treino personalizado baseado em princípios científicos.";
pub const DEFAULT_TIPS: [&str; 3] = [
    "Mantenha a consistência",
    "Foque na técnica correta",
    "Progrida gradualmente",
];
pub const PRINCIPLES: [&str; 4] = [
    "Alta frequência",
    "Baixo volume por sessão",
    "Progressão gradual",
    "Foco em exercícios compostos",
];

/// Best-effort extraction of plan metadata from model output.
///
/// Only the title, description and tips come from the text. The weekly
/// schedule always comes from the template generator so the prescribed
/// exercises stay well-formed whatever the model wrote.
#[derive(Debug, Clone)]
pub struct PlanExtractor {
    title: LabeledLineExtractor,
    description: LabeledLineExtractor,
    tips: LabeledLineExtractor,
}

impl PlanExtractor {
    pub fn new() -> Self {
        Self {
            title: LabeledLineExtractor::new(&TITLE_LABELS),
            description: LabeledLineExtractor::new(&DESCRIPTION_LABELS),
            tips: LabeledLineExtractor::new(&TIP_LABELS),
        }
    }

    pub fn extract_title(&self, raw_text: &str) -> Option<String> {
        self.title.first(raw_text)
    }

    pub fn extract_description(&self, raw_text: &str) -> Option<String> {
        self.description.first(raw_text)
    }

    pub fn extract_tips(&self, raw_text: &str) -> Vec<String> {
        self.tips.all(raw_text)
    }

    /// Builds a plan from `raw_text`, substituting defaults for anything missing.
    pub fn extract(&self, raw_text: &str, profile: &UserProfile) -> WorkoutPlan {
        let days = profile.days_per_week();
        let duration = profile.session_minutes();

        let mut tips = self.extract_tips(raw_text);
        if tips.is_empty() {
            tips = DEFAULT_TIPS.iter().map(|t| t.to_string()).collect();
        }

        WorkoutPlan {
            title: self
                .extract_title(raw_text)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: self
                .extract_description(raw_text)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            frequency: days,
            duration,
            level: profile.level().to_string(),
            principles: PRINCIPLES.iter().map(|p| p.to_string()).collect(),
            weeks: generate_weeks(days, duration),
            tips,
            created_at: Utc::now(),
        }
    }
}

impl Default for PlanExtractor {
    fn default() -> Self {
        Self::new()
    }
}
