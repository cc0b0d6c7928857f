//! Summary statistics over a generated plan.

use crate::models::WorkoutPlan;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Weekly set count above which recovery becomes the limiting factor.
pub const HIGH_WEEKLY_SETS: u32 = 60;

/// Sessions shorter than this many minutes are considered short.
pub const SHORT_SESSION_MINUTES: u32 = 30;

/// Volume and structure figures for a [`WorkoutPlan`].
///
/// Weekly figures are taken from the first week; every week of a generated
/// plan is identical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAnalysis {
    pub sessions_per_week: u32,
    pub sets_per_week: u32,
    pub average_sets_per_session: f64,
    pub session_duration: u32,
    pub unique_exercises: usize,
    /// Exercises per week grouped by prescribed rest.
    pub rest_profile: BTreeMap<String, u32>,
}

impl PlanAnalysis {
    pub fn of(plan: &WorkoutPlan) -> Self {
        let week = plan.weeks.first();
        let days = week.map(|w| w.days.as_slice()).unwrap_or_default();

        let sessions_per_week = days.len() as u32;
        let sets_per_week: u32 = days
            .iter()
            .flat_map(|day| day.exercises.iter())
            .map(|exercise| exercise.sets)
            .sum();

        let average_sets_per_session = if sessions_per_week == 0 {
            0.0
        } else {
            f64::from(sets_per_week) / f64::from(sessions_per_week)
        };

        let mut rest_profile = BTreeMap::new();
        for exercise in days.iter().flat_map(|day| day.exercises.iter()) {
            *rest_profile.entry(exercise.rest.clone()).or_insert(0) += 1;
        }

        let unique_exercises = plan
            .weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .flat_map(|day| day.exercises.iter())
            .map(|exercise| exercise.name.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            sessions_per_week,
            sets_per_week,
            average_sets_per_session,
            session_duration: plan.duration,
            unique_exercises,
            rest_profile,
        }
    }

    pub fn recommendations(&self) -> Vec<String> {
        let mut recommendations = Vec::new();

        if self.sessions_per_week < 2 {
            recommendations.push("Consider adding at least one more training day".to_string());
        }
        if self.sets_per_week > HIGH_WEEKLY_SETS {
            recommendations.push("Weekly volume is high; prioritise recovery".to_string());
        }
        if self.session_duration < SHORT_SESSION_MINUTES {
            recommendations.push("Sessions are short; focus on compound lifts".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push("Workout plan looks well-balanced!".to_string());
        }
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::template::fallback_plan;

    fn plan(days: u32, duration: u32) -> WorkoutPlan {
        fallback_plan(
            &UserProfile::new()
                .with_available_days(days)
                .with_session_duration(duration),
        )
    }

    #[test]
    fn test_full_body_plan() {
        let analysis = PlanAnalysis::of(&plan(3, 60));

        assert_eq!(analysis.sessions_per_week, 3);
        assert_eq!(analysis.sets_per_week, 33);
        assert!((analysis.average_sets_per_session - 11.0).abs() < f64::EPSILON);
        assert_eq!(analysis.unique_exercises, 4);
        assert_eq!(analysis.rest_profile.get("2-3min"), Some(&6));
        assert_eq!(analysis.rest_profile.get("2min"), Some(&6));
        assert_eq!(
            analysis.recommendations(),
            vec!["Workout plan looks well-balanced!"]
        );
    }

    #[test]
    fn test_upper_lower_plan() {
        let analysis = PlanAnalysis::of(&plan(4, 60));

        assert_eq!(analysis.sessions_per_week, 4);
        assert_eq!(analysis.sets_per_week, 50);
        assert!((analysis.average_sets_per_session - 12.5).abs() < f64::EPSILON);
        assert_eq!(analysis.unique_exercises, 9);
    }

    #[test]
    fn test_recommendations() {
        let high_volume = PlanAnalysis::of(&plan(7, 60));
        assert_eq!(high_volume.sets_per_week, 88);
        assert_eq!(
            high_volume.recommendations(),
            vec!["Weekly volume is high; prioritise recovery"]
        );

        let sparse = PlanAnalysis::of(&plan(1, 20));
        assert_eq!(
            sparse.recommendations(),
            vec![
                "Consider adding at least one more training day",
                "Sessions are short; focus on compound lifts",
            ]
        );
    }
}
