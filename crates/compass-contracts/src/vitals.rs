//! Daily vitals diary entries.
//!
//! The diary is append-only: entries are immutable once appended, and the
//! log either grows or is wholly cleared.  Insertion order is chronological
//! order: the "latest" entry is always the last one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One dated measurement entry.  All numeric fields are optional; an entry
/// with no populated field at all is rejected at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsEntry {
    pub date: DateTime<Utc>,
    /// Systolic blood pressure, mmHg.
    #[serde(default)]
    pub syst: Option<f64>,
    /// Diastolic blood pressure, mmHg.
    #[serde(default)]
    pub diast: Option<f64>,
    /// Beats per minute.
    #[serde(default)]
    pub pulse: Option<f64>,
    /// Kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// mmol/l.
    #[serde(default)]
    pub glucose: Option<f64>,
    /// Step count for the day.
    #[serde(default)]
    pub steps: Option<u32>,
    /// Hours of sleep.
    #[serde(default)]
    pub sleep: Option<f64>,
    #[serde(default)]
    pub note: String,
}

impl VitalsEntry {
    /// An entry with only the date set.  Fill fields before appending.
    pub fn at(date: DateTime<Utc>) -> Self {
        Self {
            date,
            syst: None,
            diast: None,
            pulse: None,
            weight: None,
            glucose: None,
            steps: None,
            sleep: None,
            note: String::new(),
        }
    }

    /// True when no field carries a value.
    ///
    /// Zero counts as empty: a zero reading is treated the same as a blank
    /// input.
    pub fn is_empty(&self) -> bool {
        fn blank(v: Option<f64>) -> bool {
            v.map_or(true, |x| x == 0.0)
        }
        blank(self.syst)
            && blank(self.diast)
            && blank(self.pulse)
            && blank(self.weight)
            && blank(self.glucose)
            && self.steps.map_or(true, |s| s == 0)
            && blank(self.sleep)
            && self.note.trim().is_empty()
    }
}
