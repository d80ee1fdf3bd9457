//! # compass-rules
//!
//! The table-driven advisory rules of the HealthCompass core: profile-keyed
//! recommendation lists, per-vital daily advisories, and the wellness scorer.
//!
//! Everything here is a pure function over the contract types.  Rules are
//! declared and evaluated in a fixed order; output order is the declaration
//! order.  Callers are responsible for guarding against an absent profile;
//! these functions never touch persistence or presentation.

pub mod daily;
pub mod recommend;
pub mod wellness;

pub use daily::{daily_recommendations, EMPTY_DIARY_ADVISORY};
pub use recommend::{recommend, Recommendations};
pub use wellness::{
    compute_wellness, survey_score, Severity, Wellness, WellnessLabel, DEFAULT_SURVEY_SCORE,
};
