//! # compass-contracts
//!
//! Shared types and error contracts for the HealthCompass core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.  Serialized shapes
//! keep the legacy record layout (camelCase JSON), so data written by
//! earlier versions of the application loads unchanged.

pub mod error;
pub mod event;
pub mod profile;
pub mod vitals;

pub use error::{CompassError, CompassResult};
pub use event::{Clinic, Event};
pub use profile::{BloodGroup, Gender, HealthConditions, Profile, Vision, WorkType};
pub use vitals::VitalsEntry;
