//! # compass-core
//!
//! The application layer of the HealthCompass core: [`HealthApp`] owns an
//! injected `KeyValueStore`, exposes mutation commands (save profile,
//! append vitals, custom events, mark done, clear diary) and read-only
//! queries (plan, calendar, recommendations, wellness, ICS export), and
//! guarantees one persisted snapshot per collection per command.

pub mod app;

pub use app::HealthApp;
