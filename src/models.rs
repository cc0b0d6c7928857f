//! Data types shared by every stage of plan generation.
//!
//! Field names serialize in snake_case, which is the shape both the profile
//! rows handed in by callers and the persisted plans use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Training days per week assumed when the profile does not say.
pub const DEFAULT_AVAILABLE_DAYS: u32 = 3;

/// Session length in minutes assumed when the profile does not say.
pub const DEFAULT_SESSION_DURATION: u32 = 60;

/// Number of weeks in every generated plan.
pub const PLAN_WEEKS: u32 = 4;

/// Self-reported training experience.
///
/// Deserialization goes through [`FromStr`], so any casing is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`FitnessLevel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fitness level: {0}")]
pub struct UnknownFitnessLevel(pub String);

impl FromStr for FitnessLevel {
    type Err = UnknownFitnessLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(UnknownFitnessLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for FitnessLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Sparse user profile supplied by the caller.
///
/// Every field is optional. Zero values are treated like missing ones, so a
/// profile row with `available_days = 0` still plans for the default three
/// days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Blank or unrecognised values read as missing.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_level"
    )]
    pub fitness_level: Option<FitnessLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_days: Option<u32>,

    /// Minutes per session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<u32>,

    #[serde(default, deserialize_with = "nullable_list")]
    pub goals: Vec<String>,

    #[serde(default, deserialize_with = "nullable_list")]
    pub equipment: Vec<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_fitness_level(mut self, level: FitnessLevel) -> Self {
        self.fitness_level = Some(level);
        self
    }

    pub fn with_available_days(mut self, days: u32) -> Self {
        self.available_days = Some(days);
        self
    }

    pub fn with_session_duration(mut self, minutes: u32) -> Self {
        self.session_duration = Some(minutes);
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Training days per week, falling back to [`DEFAULT_AVAILABLE_DAYS`].
    pub fn days_per_week(&self) -> u32 {
        self.available_days
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_AVAILABLE_DAYS)
    }

    /// Session length in minutes, falling back to [`DEFAULT_SESSION_DURATION`].
    pub fn session_minutes(&self) -> u32 {
        self.session_duration
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_SESSION_DURATION)
    }

    pub fn level(&self) -> FitnessLevel {
        self.fitness_level.unwrap_or_default()
    }
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<FitnessLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse() {
        Ok(level) => Some(level),
        Err(err) => {
            if !value.trim().is_empty() {
                tracing::debug!("{}; using the default level", err);
            }
            None
        }
    }))
}

/// A single prescribed exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Repetition range, e.g. `"8-10"`.
    pub reps: String,
    /// Rest between sets, e.g. `"2-3min"`.
    pub rest: String,
}

impl Exercise {
    pub fn new(
        name: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
        rest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sets,
            reps: reps.into(),
            rest: rest.into(),
        }
    }
}

/// One training session inside a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based position within the week.
    pub day: u32,
    pub name: String,
    /// Shared with every other day of the same type in the plan.
    pub exercises: Arc<[Exercise]>,
    /// Minutes.
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// 1-based week number.
    pub week: u32,
    pub days: Vec<DayPlan>,
}

/// The structured plan handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub title: String,
    pub description: String,
    /// Sessions per week.
    pub frequency: u32,
    /// Minutes per session.
    pub duration: u32,
    pub level: String,
    pub principles: Vec<String>,
    pub weeks: Vec<WeekPlan>,
    pub tips: Vec<String>,
    pub created_at: DateTime<Utc>,
}
