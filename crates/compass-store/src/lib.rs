//! # compass-store
//!
//! Persistence for the HealthCompass core: the `KeyValueStore` seam, the
//! in-memory reference store, and typed accessors for the named records
//! (profile, vitals log, events, linked-service flag, clinics, devices,
//! survey score).
//!
//! Recovery policy: corrupt records reset to their empty defaults at load
//! (never fatal); events additionally parse per element so one bad event
//! does not discard the calendar.

pub mod kv;
pub mod records;

pub use kv::{KeyValueStore, MemoryStore};
