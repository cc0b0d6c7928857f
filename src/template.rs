//! Deterministic workout templates.
//!
//! The schedule of every plan comes from here, whether or not the model call
//! succeeded. Weeks are identical: no progression is applied between them.

use crate::models::{DayPlan, Exercise, PLAN_WEEKS, UserProfile, WeekPlan, WorkoutPlan};
use chrono::Utc;
use std::sync::Arc;

/// Split used for a training day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Upper,
    Lower,
    Full,
}

impl DayType {
    /// Picks the split for a 1-based `day` in a week of `days_per_week` sessions.
    ///
    /// Four or more sessions alternate upper/lower starting with upper;
    /// fewer sessions are all full-body.
    pub fn for_day(day: u32, days_per_week: u32) -> Self {
        if days_per_week >= 4 {
            if day % 2 == 1 {
                DayType::Upper
            } else {
                DayType::Lower
            }
        } else {
            DayType::Full
        }
    }

    pub fn session_name(&self) -> &'static str {
        match self {
            DayType::Upper => "Treino Superior",
            DayType::Lower => "Treino Inferior",
            DayType::Full => "Treino Completo",
        }
    }

    pub fn exercises(&self) -> Vec<Exercise> {
        match self {
            DayType::Upper => vec![
                Exercise::new("Supino reto", 3, "8-10", "2-3min"),
                Exercise::new("Remada curvada", 3, "8-10", "2-3min"),
                Exercise::new("Desenvolvimento militar", 3, "10-12", "2min"),
                Exercise::new("Rosca direta", 2, "12-15", "1-2min"),
                Exercise::new("Tríceps testa", 2, "12-15", "1-2min"),
            ],
            DayType::Lower => vec![
                Exercise::new("Agachamento", 3, "8-10", "2-3min"),
                Exercise::new("Levantamento terra", 3, "6-8", "3min"),
                Exercise::new("Leg press", 3, "12-15", "2min"),
                Exercise::new("Panturrilha em pé", 3, "15-20", "1min"),
            ],
            DayType::Full => vec![
                Exercise::new("Agachamento", 3, "8-10", "2-3min"),
                Exercise::new("Supino inclinado", 3, "8-10", "2-3min"),
                Exercise::new("Remada sentada", 3, "10-12", "2min"),
                Exercise::new("Desenvolvimento com halteres", 2, "12-15", "2min"),
            ],
        }
    }
}

/// The three exercise lists of one plan, allocated once and shared by
/// every day that uses them.
struct Catalog {
    upper: Arc<[Exercise]>,
    lower: Arc<[Exercise]>,
    full: Arc<[Exercise]>,
}

impl Catalog {
    fn new() -> Self {
        Self {
            upper: DayType::Upper.exercises().into(),
            lower: DayType::Lower.exercises().into(),
            full: DayType::Full.exercises().into(),
        }
    }

    fn get(&self, day_type: DayType) -> Arc<[Exercise]> {
        match day_type {
            DayType::Upper => Arc::clone(&self.upper),
            DayType::Lower => Arc::clone(&self.lower),
            DayType::Full => Arc::clone(&self.full),
        }
    }
}

/// Builds the four-week schedule for `days` sessions of `duration` minutes.
///
/// Range checks on `days` belong to the caller; `days == 0` simply yields
/// weeks without sessions.
pub fn generate_weeks(days: u32, duration: u32) -> Vec<WeekPlan> {
    let catalog = Catalog::new();

    (1..=PLAN_WEEKS)
        .map(|week| WeekPlan {
            week,
            days: (1..=days)
                .map(|day| {
                    let day_type = DayType::for_day(day, days);
                    DayPlan {
                        day,
                        name: day_type.session_name().to_string(),
                        exercises: catalog.get(day_type),
                        duration,
                    }
                })
                .collect(),
        })
        .collect()
}

const FALLBACK_TITLE: &str = "Plano de Treino Científico";
const FALLBACK_DESCRIPTION: &str =
    "Plano baseado em princípios de alta frequência e baixo volume, adaptado às suas necessidades.";
const FALLBACK_PRINCIPLES: [&str; 4] = [
    "Alta frequência de treino",
    "Baixo volume por sessão",
    "Progressão gradual",
    "Exercícios compostos prioritários",
];
const FALLBACK_TIPS: [&str; 4] = [
    "Mantenha a consistência no treino",
    "Foque na execução correta dos exercícios",
    "Aumente a carga progressivamente",
    "Descanse adequadamente entre as sessões",
];

/// The template-only plan returned when the model path is unavailable.
pub fn fallback_plan(profile: &UserProfile) -> WorkoutPlan {
    let days = profile.days_per_week();
    let duration = profile.session_minutes();

    WorkoutPlan {
        title: FALLBACK_TITLE.to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
        frequency: days,
        duration,
        level: profile.level().to_string(),
        principles: FALLBACK_PRINCIPLES.iter().map(|p| p.to_string()).collect(),
        weeks: generate_weeks(days, duration),
        tips: FALLBACK_TIPS.iter().map(|t| t.to_string()).collect(),
        created_at: Utc::now(),
    }
}
