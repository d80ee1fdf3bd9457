//! The application-state service.
//!
//! `HealthApp` is an explicit application-state struct: persistence is an
//! injected `KeyValueStore`, all collections are loaded once at startup,
//! and every mutation command
//! applies its change in memory and then persists exactly one snapshot per
//! touched collection.  All computation is synchronous; there is no
//! concurrent mutation.
//!
//! Queries are read-only and never persist.  Queries that need a profile
//! no-op (return `None` or empty) when it is absent or incomplete, so
//! callers do not have to guard first.

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, info};

use compass_contracts::{
    Clinic, CompassError, CompassResult, Event, Profile, VitalsEntry,
};
use compass_plan::{build_plan, schedule_events, PlanItem};
use compass_rules::{
    compute_wellness, daily_recommendations, recommend, survey_score, Recommendations, Wellness,
    DEFAULT_SURVEY_SCORE,
};
use compass_store::{records, KeyValueStore};

/// The in-memory application state plus its injected persistence.
pub struct HealthApp {
    store: Box<dyn KeyValueStore>,
    profile: Option<Profile>,
    vitals: Vec<VitalsEntry>,
    events: Vec<Event>,
    service_linked: bool,
    clinics: Vec<Clinic>,
    devices: Vec<String>,
    survey_score: Option<i64>,
}

impl HealthApp {
    /// Load every collection from the store.
    ///
    /// Corrupt records come back as their empty defaults (the store layer's
    /// recovery policy), so startup never fails on bad data.
    pub fn load(store: Box<dyn KeyValueStore>) -> CompassResult<Self> {
        let profile = records::load_profile(store.as_ref())?;
        let vitals = records::load_vitals(store.as_ref())?;
        let events = records::load_events(store.as_ref())?;
        let service_linked = records::load_service_linked(store.as_ref())?;
        let clinics = records::load_clinics(store.as_ref())?;
        let devices = records::load_devices(store.as_ref())?;
        let survey_score = records::load_survey_score(store.as_ref())?;

        info!(
            has_profile = profile.is_some(),
            vitals = vitals.len(),
            events = events.len(),
            "application state loaded"
        );

        Ok(Self {
            store,
            profile,
            vitals,
            events,
            service_linked,
            clinics,
            devices,
            survey_score,
        })
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Save the profile wholesale and rebuild the preventive-care calendar.
    ///
    /// `age` is recomputed from the birth year here and nowhere else.  An
    /// incomplete draft is rejected before anything is persisted.  On
    /// success exactly two snapshots are written: the profile record and
    /// the merged event list.
    pub fn save_profile(&mut self, mut draft: Profile, now: DateTime<Utc>) -> CompassResult<()> {
        draft.recompute_age(now.year());
        if !draft.is_complete() {
            return Err(CompassError::IncompleteProfile);
        }

        records::save_profile(self.store.as_ref(), &draft)?;

        let plan = build_plan(&draft);
        self.events = schedule_events(&plan, &self.events, now);
        records::save_events(self.store.as_ref(), &self.events)?;

        info!(age = draft.age, events = self.events.len(), "profile saved, calendar rebuilt");
        self.profile = Some(draft);
        Ok(())
    }

    /// Forget the profile.  The diary, calendar and other records stay.
    pub fn logout(&mut self) -> CompassResult<()> {
        records::clear_profile(self.store.as_ref())?;
        self.profile = None;
        Ok(())
    }

    /// Append one diary entry.  An entry with no populated field is
    /// rejected and nothing is stored.
    pub fn append_vitals(&mut self, entry: VitalsEntry) -> CompassResult<()> {
        if entry.is_empty() {
            return Err(CompassError::EmptyVitalsEntry);
        }
        self.vitals.push(entry);
        records::save_vitals(self.store.as_ref(), &self.vitals)
    }

    /// Wholly clear the diary.
    pub fn clear_vitals(&mut self) -> CompassResult<()> {
        self.vitals.clear();
        records::save_vitals(self.store.as_ref(), &self.vitals)
    }

    /// Add a user-created reminder.  Custom events bypass the plan engine:
    /// they are never deduplicated and never removed automatically.
    pub fn add_custom_event(
        &mut self,
        title: impl Into<String>,
        start: DateTime<Utc>,
    ) -> CompassResult<Event> {
        let event = Event::custom(title, start);
        self.events.push(event.clone());
        records::save_events(self.store.as_ref(), &self.events)?;
        Ok(event)
    }

    /// Remove an event by id, unconditionally.  Returns false when no event
    /// carried that id.  A removed generated event reappears only if a
    /// later plan rebuild re-admits it past the dedup window.
    pub fn mark_event_done(&mut self, id: &str) -> CompassResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() < before;
        if removed {
            debug!(id, "event marked done and removed");
            records::save_events(self.store.as_ref(), &self.events)?;
        }
        Ok(removed)
    }

    /// Score the wellness questionnaire and persist the result.
    pub fn record_survey(&mut self, answers: &[u8]) -> CompassResult<Wellness> {
        let score = survey_score(answers);
        self.survey_score = Some(score);
        records::save_survey_score(self.store.as_ref(), score)?;
        Ok(self.wellness())
    }

    /// Toggle the linked-service flag.
    pub fn set_service_linked(&mut self, linked: bool) -> CompassResult<()> {
        self.service_linked = linked;
        records::save_service_linked(self.store.as_ref(), linked)
    }

    /// Bookmark a clinic.  Returns false (and persists nothing) when a
    /// clinic with the same id is already saved.
    pub fn save_clinic(&mut self, clinic: Clinic) -> CompassResult<bool> {
        if self.clinics.iter().any(|c| c.id == clinic.id) {
            return Ok(false);
        }
        self.clinics.push(clinic);
        records::save_clinics(self.store.as_ref(), &self.clinics)?;
        Ok(true)
    }

    /// Remove a bookmarked clinic by id.
    pub fn remove_clinic(&mut self, id: &str) -> CompassResult<()> {
        self.clinics.retain(|c| c.id != id);
        records::save_clinics(self.store.as_ref(), &self.clinics)
    }

    /// Record a paired device by name.
    pub fn connect_device(&mut self, name: impl Into<String>) -> CompassResult<()> {
        self.devices.push(name.into());
        records::save_devices(self.store.as_ref(), &self.devices)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// True when a complete profile is present; the navigation gate.
    pub fn has_usable_profile(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_complete())
    }

    pub fn vitals(&self) -> &[VitalsEntry] {
        &self.vitals
    }

    /// The most recent diary entry (insertion order is chronological).
    pub fn latest_vitals(&self) -> Option<&VitalsEntry> {
        self.vitals.last()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The earliest event starting at or after `now`.
    pub fn next_event(&self, now: DateTime<Utc>) -> Option<&Event> {
        self.events
            .iter()
            .filter(|e| e.start >= now)
            .min_by_key(|e| e.start)
    }

    /// The preventive-care plan, or empty without a usable profile.
    pub fn plan(&self) -> Vec<PlanItem> {
        match &self.profile {
            Some(p) if p.is_complete() => build_plan(p),
            _ => Vec::new(),
        }
    }

    /// Categorized advisory lists, or `None` without a usable profile.
    pub fn recommendations(&self) -> Option<Recommendations> {
        match &self.profile {
            Some(p) if p.is_complete() => Some(recommend(p)),
            _ => None,
        }
    }

    /// Per-day advisories from the latest diary entry, or empty without a
    /// usable profile.
    pub fn daily_recommendations(&self) -> Vec<String> {
        match &self.profile {
            Some(p) if p.is_complete() => daily_recommendations(p, self.latest_vitals()),
            _ => Vec::new(),
        }
    }

    /// The wellness assessment.  Works without a profile: the survey score
    /// (default 50) and the latest vitals are its only inputs.
    pub fn wellness(&self) -> Wellness {
        compute_wellness(
            self.survey_score.unwrap_or(DEFAULT_SURVEY_SCORE),
            self.latest_vitals(),
        )
    }

    pub fn service_linked(&self) -> bool {
        self.service_linked
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    pub fn survey_score(&self) -> Option<i64> {
        self.survey_score
    }

    /// Render the current calendar as an iCalendar document.
    pub fn export_ics(&self) -> String {
        compass_ics::export_ics(&self.events)
    }
}
