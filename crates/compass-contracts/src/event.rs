//! Calendar events: dated instances of plan items or user reminders.
//!
//! Two id namespaces keep the lifecycles apart:
//!
//! - `gen-<uuid>`: bulk-generated by the plan engine; replaced on every
//!   profile recomputation subject to the merge rule.
//! - `custom-<uuid>`: added by the user; never deduplicated against
//!   generated events, never removed automatically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled examination or user-created reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique, stable once created.
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub desc: String,
    /// Long-form rationale text shown in the event detail view.
    #[serde(default)]
    pub detailed_description: Option<String>,
    /// True for user-created events.
    #[serde(default)]
    pub custom: bool,
}

impl Event {
    /// A plan-generated event with a fresh `gen-` id.
    pub fn generated(
        title: impl Into<String>,
        start: DateTime<Utc>,
        desc: impl Into<String>,
        detailed_description: Option<String>,
    ) -> Self {
        Self {
            id: format!("gen-{}", Uuid::new_v4()),
            title: title.into(),
            start,
            desc: desc.into(),
            detailed_description,
            custom: false,
        }
    }

    /// A user-created event with a fresh `custom-` id.
    pub fn custom(title: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            id: format!("custom-{}", Uuid::new_v4()),
            title: title.into(),
            start,
            desc: "Пользовательское событие".to_string(),
            detailed_description: None,
            custom: true,
        }
    }
}

/// A clinic the user bookmarked from the clinics screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub address: String,
}
