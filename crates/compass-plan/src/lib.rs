//! # compass-plan
//!
//! The plan & calendar engine of the HealthCompass core.
//!
//! Two stages, both deterministic:
//!
//! 1. [`catalog::build_plan`]: the ordered, predicate-gated examination
//!    catalog for a profile.
//! 2. [`schedule::schedule_events`]: dated events spread over a 90-day
//!    window, merged against the existing calendar under the 20-day dedup
//!    rule.
//!
//! Custom (user-created) events never pass through this crate; the
//! application layer appends them directly.

pub mod catalog;
pub mod schedule;

pub use catalog::{build_plan, checkup_eligible, PlanItem, CHECKUP_BIRTH_YEARS};
pub use schedule::{
    distribute_date, generate_events, merge_upcoming, schedule_events, DEDUP_WINDOW_DAYS,
    LOOKAHEAD_DAYS,
};
