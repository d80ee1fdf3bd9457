//! The user health profile.
//!
//! A `Profile` is created or replaced wholesale when the user saves the
//! profile form; there is no partial-update path.  `age` is derived from
//! `birth_year` at save time and stored; downstream rules read the stored
//! value and never re-derive it.
//!
//! Serialized field names match the legacy `healthCompassUser` record
//! (camelCase JSON), so previously persisted profiles load unchanged.

use serde::{Deserialize, Serialize};

/// Biological gender as recorded in the profile form.
///
/// Any persisted value outside `male`/`female` deserializes to
/// `Unspecified`.  Gender-gated plan and recommendation branches simply do
/// not fire for `Unspecified`: silent exclusion, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Unspecified,
}

/// Vision status from the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vision {
    Normal,
    Myopia,
    Hyperopia,
    Astigmatism,
    #[serde(other)]
    Other,
}

/// Predominant daily work posture from the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Sedentary,
    Standing,
    Active,
    #[serde(other)]
    Other,
}

/// The ABO blood group extracted from the profile's blood-type string.
///
/// Used as the lookup key for the nutrition regimen table.  The Rh factor
/// suffix (`+`/`-`) is kept in the stored string but plays no role in any
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodGroup {
    O,
    A,
    B,
    Ab,
}

/// Free-text and categorical health-condition attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthConditions {
    /// Free text; non-empty means "has allergies".
    #[serde(default)]
    pub allergies: String,
    pub vision: Vision,
    pub work_type: WorkType,
    /// Free-text past medical history.
    #[serde(default)]
    pub medical_history: String,
    /// Free-text current conditions; keyword-matched by the rules
    /// ("гипертония", "диабет").
    #[serde(default)]
    pub current_conditions: String,
}

impl Default for Vision {
    fn default() -> Self {
        Vision::Normal
    }
}

impl Default for WorkType {
    fn default() -> Self {
        WorkType::Other
    }
}

/// The user's demographic and health-condition attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub birth_year: i32,
    /// Derived as `current_year - birth_year` when the profile is saved.
    /// Optional in hand-written profile files; always present once persisted.
    #[serde(default)]
    pub age: u32,
    pub gender: Gender,
    /// Blood type with Rh suffix, e.g. `"A+"`, `"0-"`, `"AB+"`.
    pub blood_type: String,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    pub emergency_contact: String,
    pub health_conditions: HealthConditions,
}

impl Profile {
    /// Return true if every required field is filled in.
    ///
    /// Navigation and the profile-save command treat an incomplete profile
    /// as unusable.  Required: full name, birth year, gender, blood type,
    /// weight, height, and the emergency contact.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && self.birth_year > 0
            && self.gender != Gender::Unspecified
            && !self.blood_type.trim().is_empty()
            && self.weight > 0.0
            && self.height > 0.0
            && !self.emergency_contact.trim().is_empty()
    }

    /// Recompute the stored `age` from `birth_year`.
    ///
    /// Called exactly once per save; rules read the stored value afterwards.
    pub fn recompute_age(&mut self, current_year: i32) {
        self.age = (current_year - self.birth_year).max(0) as u32;
    }

    /// Extract the ABO group from the blood-type string.
    ///
    /// Returns `None` for unrecognized strings, in which case the
    /// blood-type nutrition regimen is simply omitted.
    pub fn blood_group(&self) -> Option<BloodGroup> {
        let group = self
            .blood_type
            .trim()
            .trim_end_matches(['+', '-'])
            .to_ascii_uppercase();
        match group.as_str() {
            "0" | "O" => Some(BloodGroup::O),
            "A" => Some(BloodGroup::A),
            "B" => Some(BloodGroup::B),
            "AB" => Some(BloodGroup::Ab),
            _ => None,
        }
    }

    /// True when the free-text current conditions mention the keyword.
    ///
    /// Matching is a plain case-insensitive substring check
    /// ("гипертония" → swimming, "диабет" → carb control).
    pub fn has_condition_keyword(&self, keyword: &str) -> bool {
        self.health_conditions
            .current_conditions
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// True when the allergies field is non-empty.
    pub fn has_allergies(&self) -> bool {
        !self.health_conditions.allergies.trim().is_empty()
    }
}
