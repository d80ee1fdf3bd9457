//! Event scheduling: date distribution and the merge rule.
//!
//! Plan items are spread across a fixed 90-day look-ahead window so the
//! calendar never recommends N simultaneous appointments.  Re-running the
//! scheduler against the existing calendar is idempotent under the 20-day
//! dedup window: a candidate whose title already has a future event strictly
//! less than 20 days away is discarded (the existing event wins).

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use compass_contracts::Event;

use crate::catalog::PlanItem;

/// The scheduling window, in days, that generated events are spread over.
pub const LOOKAHEAD_DAYS: i64 = 90;

/// Two events with the same title closer than this are duplicates.
/// The comparison is strict: exactly 20 days apart is NOT a duplicate.
pub const DEDUP_WINDOW_DAYS: i64 = 20;

/// Due date for the item at `index` out of `total`, offset from `base` by
/// `⌊90·index / total⌋` days.
pub fn distribute_date(base: DateTime<Utc>, index: usize, total: usize) -> DateTime<Utc> {
    if total == 0 {
        return base;
    }
    base + Duration::days(LOOKAHEAD_DAYS * index as i64 / total as i64)
}

/// Turn plan items into dated candidate events, spread over the window.
pub fn generate_events(plan: &[PlanItem], now: DateTime<Utc>) -> Vec<Event> {
    plan.iter()
        .enumerate()
        .map(|(index, item)| {
            Event::generated(
                item.title.clone(),
                distribute_date(now, index, plan.len()),
                item.note.clone(),
                Some(item.detailed_description.clone()),
            )
        })
        .collect()
}

/// Merge freshly generated candidates into the existing calendar.
///
/// 1. Keep only existing events with `start > now` (past events are dropped,
///    custom ones included only while they are still upcoming).
/// 2. Append each candidate unless a kept event with the same title lies
///    strictly less than [`DEDUP_WINDOW_DAYS`] away.
/// 3. Sort ascending by start date.
pub fn merge_upcoming(existing: &[Event], candidates: Vec<Event>, now: DateTime<Utc>) -> Vec<Event> {
    let future: Vec<Event> = existing
        .iter()
        .filter(|e| e.start > now)
        .cloned()
        .collect();

    let dropped_past = existing.len() - future.len();
    if dropped_past > 0 {
        debug!(dropped_past, "dropped elapsed events during merge");
    }

    let window = Duration::days(DEDUP_WINDOW_DAYS);
    let mut merged = future.clone();

    for candidate in candidates {
        let duplicate = future.iter().any(|e| {
            e.title == candidate.title && (e.start - candidate.start).abs() < window
        });
        if duplicate {
            debug!(title = %candidate.title, "candidate within dedup window; existing event wins");
        } else {
            merged.push(candidate);
        }
    }

    merged.sort_by_key(|e| e.start);
    merged
}

/// Schedule the plan against the existing calendar.
///
/// Pure apart from the fresh ids on generated events: the same plan, the
/// same existing events, and the same `now` always yield the same titles
/// and dates.
pub fn schedule_events(plan: &[PlanItem], existing: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let candidates = generate_events(plan, now);
    let merged = merge_upcoming(existing, candidates, now);
    info!(
        plan_items = plan.len(),
        existing = existing.len(),
        scheduled = merged.len(),
        "calendar rebuilt"
    );
    merged
}
