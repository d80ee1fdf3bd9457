//! # compass-ics
//!
//! Minimal iCalendar export: one VCALENDAR with one VEVENT per calendar
//! event.  The text format is fixed and pinned by tests: UID suffix `@hc`,
//! `PRODID:-//HealthCompass//RU`, timestamps as `YYYYMMDDTHHMM00Z` (the
//! seconds field is a literal `00`), and lines joined with `\n`.

use chrono::{DateTime, Datelike, Timelike, Utc};

use compass_contracts::Event;

/// Format a UTC timestamp the way the exporter always has.
fn format_stamp(dt: DateTime<Utc>) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}00Z",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute()
    )
}

/// Render `events` as an iCalendar document.
///
/// Events are emitted in the order given; `DESCRIPTION` is included only
/// when the event's short note is non-empty.
pub fn export_ics(events: &[Event]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//HealthCompass//RU".to_string(),
    ];

    for event in events {
        let stamp = format_stamp(event.start);
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@hc", event.id));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(format!("DTSTART:{stamp}"));
        lines.push(format!("SUMMARY:{}", event.title));
        if !event.desc.is_empty() {
            lines.push(format!("DESCRIPTION:{}", event.desc));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}
