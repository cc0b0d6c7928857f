//! Extraction of structured plan data from unstructured model output.
//!
//! Extraction is deliberately lossy: every field is looked up independently
//! and replaced by a fixed default when it cannot be found.
//!
//! # Examples
//!
//! ```rust
//! use gymia_planner::extract::PlanExtractor;
//! use gymia_planner::models::UserProfile;
//!
//! let extractor = PlanExtractor::new();
//! let plan = extractor.extract(
//!     "título: Meu Plano Incrível\ndescrição: Foco em pernas\n",
//!     &UserProfile::default(),
//! );
//!
//! assert_eq!(plan.title, "Meu Plano Incrível");
//! assert_eq!(plan.weeks.len(), 4);
//! ```

pub mod extractors;
pub mod plan;

pub use self::extractors::LabeledLineExtractor;
pub use self::plan::PlanExtractor;
