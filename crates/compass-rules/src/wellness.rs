//! The wellness scorer.
//!
//! The raw score is a *risk magnitude* on 0–100: a persisted survey score
//! adjusted by the latest vitals entry, then clamped.  The UI presents the
//! inverted value (`100 - score`) as a "wellness percentage"; both numbers
//! matter and [`Wellness::display_percent`] preserves the inversion exactly.

use compass_contracts::VitalsEntry;
use serde::{Deserialize, Serialize};

/// Survey score used when the questionnaire was never completed.
pub const DEFAULT_SURVEY_SCORE: i64 = 50;

/// Severity color slot associated with a wellness label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Accent,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Accent => "accent",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// Qualitative band on the clamped risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessLabel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl WellnessLabel {
    /// The label text shown to the user.
    pub fn as_ru(self) -> &'static str {
        match self {
            WellnessLabel::Excellent => "Отличное",
            WellnessLabel::Good => "Хорошее",
            WellnessLabel::Fair => "Удовлетворительное",
            WellnessLabel::Low => "Низкое",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            WellnessLabel::Excellent => Severity::Success,
            WellnessLabel::Good => Severity::Accent,
            WellnessLabel::Fair => Severity::Warning,
            WellnessLabel::Low => Severity::Danger,
        }
    }
}

/// The computed wellness assessment.  Never persisted; only the survey
/// score input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wellness {
    /// Risk magnitude, clamped to 0..=100.
    pub score: u8,
    pub label: WellnessLabel,
}

impl Wellness {
    /// The inverted value shown in the UI as "wellness percentage".
    pub fn display_percent(&self) -> u8 {
        100 - self.score
    }
}

/// Combine the persisted survey score with the latest vitals entry.
///
/// Adjustments are additive and mutually exclusive per vital:
///
/// - blood pressure: +25 / +15 / +8 by severity, −8 in the 110–130/70–85
///   optimal range
/// - glucose: +15 (≥7), +6 (≥5.6), −5 (4.0–5.5)
/// - sleep: +6 (<6h), +3 (>9.5h), −2 otherwise
///
/// A zero reading counts as absent and shifts nothing, the same convention
/// `VitalsEntry::is_empty` uses.
pub fn compute_wellness(survey_score: i64, latest: Option<&VitalsEntry>) -> Wellness {
    let mut score = survey_score;

    if let Some(entry) = latest {
        if let (Some(s), Some(d)) = (reading(entry.syst), reading(entry.diast)) {
            if s > 180.0 || d > 110.0 {
                score += 25;
            } else if s > 160.0 || d > 100.0 {
                score += 15;
            } else if s > 140.0 || d > 90.0 {
                score += 8;
            } else if (110.0..=130.0).contains(&s) && (70.0..=85.0).contains(&d) {
                score -= 8;
            }
        }

        if let Some(glucose) = reading(entry.glucose) {
            if glucose >= 7.0 {
                score += 15;
            } else if glucose >= 5.6 {
                score += 6;
            } else if (4.0..=5.5).contains(&glucose) {
                score -= 5;
            }
        }

        if let Some(sleep) = reading(entry.sleep) {
            if sleep < 6.0 {
                score += 6;
            } else if sleep > 9.5 {
                score += 3;
            } else {
                score -= 2;
            }
        }
    }

    let score = score.clamp(0, 100) as u8;
    let label = if score <= 35 {
        WellnessLabel::Excellent
    } else if score <= 65 {
        WellnessLabel::Good
    } else if score <= 85 {
        WellnessLabel::Fair
    } else {
        WellnessLabel::Low
    };

    Wellness { score, label }
}

/// A field value with zero filtered out (zero reading == blank input).
fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Normalize the seven 0–3 questionnaire answers to a 0–100 survey score.
///
/// `round(sum / 21 * 100)`; the maximum answer sum is 7 × 3 = 21.
pub fn survey_score(answers: &[u8]) -> i64 {
    let sum: u32 = answers.iter().map(|&a| a.min(3) as u32).sum();
    (((sum as f64) / 21.0 * 100.0).round() as i64).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry() -> VitalsEntry {
        VitalsEntry::at(Utc::now())
    }

    #[test]
    fn base_score_passes_through_without_vitals() {
        let w = compute_wellness(50, None);
        assert_eq!(w.score, 50);
        assert_eq!(w.label, WellnessLabel::Good);
    }

    #[test]
    fn severe_pressure_adds_25() {
        let mut e = entry();
        e.syst = Some(185.0);
        e.diast = Some(95.0);
        assert_eq!(compute_wellness(50, Some(&e)).score, 75);
    }

    #[test]
    fn optimal_pressure_subtracts_8() {
        let mut e = entry();
        e.syst = Some(120.0);
        e.diast = Some(80.0);
        assert_eq!(compute_wellness(50, Some(&e)).score, 42);
    }

    #[test]
    fn pressure_bands_are_mutually_exclusive() {
        // 165/95 hits only the +15 band, not also +8.
        let mut e = entry();
        e.syst = Some(165.0);
        e.diast = Some(95.0);
        assert_eq!(compute_wellness(50, Some(&e)).score, 65);
    }

    #[test]
    fn glucose_bands() {
        for (glucose, expected) in [(7.0, 65), (5.6, 56), (5.0, 45), (3.5, 50)] {
            let mut e = entry();
            e.glucose = Some(glucose);
            assert_eq!(
                compute_wellness(50, Some(&e)).score,
                expected,
                "glucose {glucose}"
            );
        }
    }

    #[test]
    fn sleep_bands() {
        for (sleep, expected) in [(5.0, 56), (10.0, 53), (8.0, 48)] {
            let mut e = entry();
            e.sleep = Some(sleep);
            assert_eq!(compute_wellness(50, Some(&e)).score, expected, "sleep {sleep}");
        }
    }

    #[test]
    fn zero_readings_shift_nothing() {
        let mut e = entry();
        e.syst = Some(0.0);
        e.diast = Some(0.0);
        e.glucose = Some(0.0);
        e.sleep = Some(0.0);
        assert_eq!(compute_wellness(50, Some(&e)).score, 50);

        // A zero on one side of the pressure pair disables the whole axis.
        let mut e = entry();
        e.syst = Some(185.0);
        e.diast = Some(0.0);
        assert_eq!(compute_wellness(50, Some(&e)).score, 50);
    }

    #[test]
    fn score_always_clamped() {
        // Worst case: high survey score plus every penalty.
        let mut worst = entry();
        worst.syst = Some(200.0);
        worst.diast = Some(120.0);
        worst.glucose = Some(9.0);
        worst.sleep = Some(4.0);
        let w = compute_wellness(95, Some(&worst));
        assert_eq!(w.score, 100);
        assert_eq!(w.label, WellnessLabel::Low);

        // Best case: low survey score plus every bonus.
        let mut best = entry();
        best.syst = Some(120.0);
        best.diast = Some(80.0);
        best.glucose = Some(5.0);
        best.sleep = Some(8.0);
        let w = compute_wellness(3, Some(&best));
        assert_eq!(w.score, 0);
        assert_eq!(w.label, WellnessLabel::Excellent);
    }

    #[test]
    fn display_percent_is_inverted() {
        for survey in [0, 20, 50, 80, 100] {
            let w = compute_wellness(survey, None);
            assert_eq!(w.display_percent(), 100 - w.score);
        }

        // The displayed value is the inversion, not the raw score.
        let w = compute_wellness(80, None);
        assert_eq!(w.score, 80);
        assert_eq!(w.display_percent(), 20);
    }

    #[test]
    fn label_bands_and_severities() {
        for (survey, label, severity) in [
            (35, WellnessLabel::Excellent, Severity::Success),
            (36, WellnessLabel::Good, Severity::Accent),
            (65, WellnessLabel::Good, Severity::Accent),
            (66, WellnessLabel::Fair, Severity::Warning),
            (85, WellnessLabel::Fair, Severity::Warning),
            (86, WellnessLabel::Low, Severity::Danger),
        ] {
            let w = compute_wellness(survey, None);
            assert_eq!(w.label, label, "survey {survey}");
            assert_eq!(w.label.severity(), severity);
        }
    }

    #[test]
    fn survey_score_normalizes_answer_sum() {
        assert_eq!(survey_score(&[0; 7]), 0);
        assert_eq!(survey_score(&[3; 7]), 100);
        assert_eq!(survey_score(&[1, 1, 1, 1, 1, 1, 1]), 33);
    }
}
