//! Typed accessors for the named persisted records.
//!
//! Key names are kept stable across application versions so existing data
//! loads unchanged.  Loads are lenient by policy: a record that fails to
//! parse is reset to its empty default with a warning: local recovery,
//! never fatal.  Event lists go one step further and parse per element, so
//! one event with an unparsable date is rejected at load without taking
//! the rest of the calendar with it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use compass_contracts::{Clinic, CompassResult, Event, Profile, VitalsEntry};

use crate::kv::KeyValueStore;

/// The named records of the persistence layer.
pub mod keys {
    pub const PROFILE: &str = "healthCompassUser";
    pub const VITALS: &str = "healthData";
    pub const EVENTS: &str = "hcEvents";
    pub const SERVICE_LINKED: &str = "gosLinked";
    pub const CLINICS: &str = "savedClinics";
    pub const DEVICES: &str = "connectedDevices";
    pub const SURVEY_SCORE: &str = "surveyScore";
}

fn load_or_default<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> CompassResult<T> {
    match store.get(key)? {
        None => Ok(T::default()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt record; resetting to default");
                Ok(T::default())
            }
        },
    }
}

fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> CompassResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| compass_contracts::CompassError::Storage {
        reason: format!("failed to serialize record '{}': {}", key, e),
    })?;
    store.set(key, &raw)
}

/// Load the profile, or `None` when absent or corrupt.
pub fn load_profile(store: &dyn KeyValueStore) -> CompassResult<Option<Profile>> {
    load_or_default(store, keys::PROFILE)
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &Profile) -> CompassResult<()> {
    save(store, keys::PROFILE, profile)
}

/// Delete the profile record (logout).
pub fn clear_profile(store: &dyn KeyValueStore) -> CompassResult<()> {
    store.remove(keys::PROFILE)
}

pub fn load_vitals(store: &dyn KeyValueStore) -> CompassResult<Vec<VitalsEntry>> {
    load_or_default(store, keys::VITALS)
}

pub fn save_vitals(store: &dyn KeyValueStore, vitals: &[VitalsEntry]) -> CompassResult<()> {
    save(store, keys::VITALS, &vitals)
}

/// Load the event list, parsing per element.
///
/// An element that fails to deserialize (bad shape or an unparsable start
/// date) is rejected at load with a warning; valid siblings survive.  A
/// record that is not a JSON array at all resets to empty.
pub fn load_events(store: &dyn KeyValueStore) -> CompassResult<Vec<Event>> {
    let elements: Vec<serde_json::Value> = load_or_default(store, keys::EVENTS)?;

    let mut events = Vec::with_capacity(elements.len());
    for element in elements {
        match serde_json::from_value::<Event>(element) {
            Ok(event) => events.push(event),
            Err(e) => {
                warn!(key = keys::EVENTS, error = %e, "rejecting unparsable event at load");
            }
        }
    }
    Ok(events)
}

pub fn save_events(store: &dyn KeyValueStore, events: &[Event]) -> CompassResult<()> {
    save(store, keys::EVENTS, &events)
}

pub fn load_service_linked(store: &dyn KeyValueStore) -> CompassResult<bool> {
    load_or_default(store, keys::SERVICE_LINKED)
}

pub fn save_service_linked(store: &dyn KeyValueStore, linked: bool) -> CompassResult<()> {
    save(store, keys::SERVICE_LINKED, &linked)
}

pub fn load_clinics(store: &dyn KeyValueStore) -> CompassResult<Vec<Clinic>> {
    load_or_default(store, keys::CLINICS)
}

pub fn save_clinics(store: &dyn KeyValueStore, clinics: &[Clinic]) -> CompassResult<()> {
    save(store, keys::CLINICS, &clinics)
}

pub fn load_devices(store: &dyn KeyValueStore) -> CompassResult<Vec<String>> {
    load_or_default(store, keys::DEVICES)
}

pub fn save_devices(store: &dyn KeyValueStore, devices: &[String]) -> CompassResult<()> {
    save(store, keys::DEVICES, &devices)
}

/// Load the persisted survey score, or `None` if never computed.
pub fn load_survey_score(store: &dyn KeyValueStore) -> CompassResult<Option<i64>> {
    load_or_default(store, keys::SURVEY_SCORE)
}

pub fn save_survey_score(store: &dyn KeyValueStore, score: i64) -> CompassResult<()> {
    save(store, keys::SURVEY_SCORE, &score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use chrono::{TimeZone, Utc};
    use compass_contracts::{Gender, HealthConditions};

    fn profile() -> Profile {
        Profile {
            full_name: "Иванова Мария Петровна".to_string(),
            birth_year: 1990,
            age: 36,
            gender: Gender::Female,
            blood_type: "A+".to_string(),
            weight: 64.0,
            height: 168.0,
            emergency_contact: "+7 900 000-00-00".to_string(),
            health_conditions: HealthConditions::default(),
        }
    }

    #[test]
    fn absent_records_load_as_defaults() {
        let store = MemoryStore::new();
        assert!(load_profile(&store).unwrap().is_none());
        assert!(load_vitals(&store).unwrap().is_empty());
        assert!(load_events(&store).unwrap().is_empty());
        assert!(!load_service_linked(&store).unwrap());
        assert!(load_clinics(&store).unwrap().is_empty());
        assert!(load_devices(&store).unwrap().is_empty());
        assert_eq!(load_survey_score(&store).unwrap(), None);
    }

    #[test]
    fn profile_round_trips() {
        let store = MemoryStore::new();
        save_profile(&store, &profile()).unwrap();
        let loaded = load_profile(&store).unwrap().unwrap();
        assert_eq!(loaded.full_name, "Иванова Мария Петровна");
        assert_eq!(loaded.gender, Gender::Female);
    }

    #[test]
    fn corrupt_profile_resets_to_none() {
        let store = MemoryStore::new();
        store.set(keys::PROFILE, "{not json").unwrap();
        assert!(load_profile(&store).unwrap().is_none());
    }

    #[test]
    fn corrupt_vitals_reset_to_empty() {
        let store = MemoryStore::new();
        store.set(keys::VITALS, "\"oops\"").unwrap();
        assert!(load_vitals(&store).unwrap().is_empty());
    }

    #[test]
    fn event_with_unparsable_date_is_rejected_at_load() {
        let store = MemoryStore::new();
        let good = Event::generated(
            "ЭКГ",
            Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap(),
            "Проверка работы сердца",
            None,
        );
        let raw = format!(
            "[{},{{\"id\":\"gen-bad\",\"title\":\"Сломанное\",\"start\":\"не дата\"}}]",
            serde_json::to_string(&good).unwrap()
        );
        store.set(keys::EVENTS, &raw).unwrap();

        let events = load_events(&store).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "ЭКГ");
    }

    #[test]
    fn events_record_that_is_not_an_array_resets_to_empty() {
        let store = MemoryStore::new();
        store.set(keys::EVENTS, "{\"id\":\"x\"}").unwrap();
        assert!(load_events(&store).unwrap().is_empty());
    }

    #[test]
    fn survey_score_and_flag_round_trip() {
        let store = MemoryStore::new();
        save_survey_score(&store, 67).unwrap();
        save_service_linked(&store, true).unwrap();
        assert_eq!(load_survey_score(&store).unwrap(), Some(67));
        assert!(load_service_linked(&store).unwrap());
    }

    #[test]
    fn clearing_profile_removes_the_record() {
        let store = MemoryStore::new();
        save_profile(&store, &profile()).unwrap();
        clear_profile(&store).unwrap();
        assert!(load_profile(&store).unwrap().is_none());
    }
}
