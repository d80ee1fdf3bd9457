//! Per-day advisories from the most recent vitals entry.
//!
//! Each vital maps through its own threshold bands to exactly one advisory
//! string; absent fields produce no advisory for that axis.  A zero reading
//! counts as absent, the same convention `VitalsEntry::is_empty` uses.  Only
//! the *latest* diary entry is consulted; trends are a charting concern.

use compass_contracts::{Profile, VitalsEntry};

/// Shown when the diary is empty.
pub const EMPTY_DIARY_ADVISORY: &str =
    "💪 Начните вести дневник здоровья — заполните данные для получения персональных рекомендаций";

/// Band the latest entry's vitals into advisory strings.
///
/// `latest = None` yields the single [`EMPTY_DIARY_ADVISORY`] placeholder.
/// BMI needs both the entry's weight and the profile's height; either one
/// missing skips that axis.
pub fn daily_recommendations(profile: &Profile, latest: Option<&VitalsEntry>) -> Vec<String> {
    let Some(entry) = latest else {
        return vec![EMPTY_DIARY_ADVISORY.to_string()];
    };

    let mut recommendations = Vec::new();

    if let Some(weight) = reading(entry.weight) {
        if profile.height > 0.0 {
            let bmi = weight / (profile.height / 100.0).powi(2);
            recommendations.push(bmi_advisory(bmi).to_string());
        }
    }

    if let (Some(syst), Some(diast)) = (reading(entry.syst), reading(entry.diast)) {
        recommendations.push(pressure_advisory(syst, diast).to_string());
    }

    if let Some(pulse) = reading(entry.pulse) {
        recommendations.push(pulse_advisory(pulse).to_string());
    }

    if let Some(glucose) = reading(entry.glucose) {
        recommendations.push(glucose_advisory(glucose).to_string());
    }

    if let Some(sleep) = reading(entry.sleep) {
        recommendations.push(sleep_advisory(sleep).to_string());
    }

    if let Some(steps) = entry.steps.filter(|s| *s != 0) {
        recommendations.push(steps_advisory(steps).to_string());
    }

    recommendations
}

/// A field value with zero filtered out (zero reading == blank input).
fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn bmi_advisory(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "📉 Ваш вес ниже нормы. Рекомендуется проконсультироваться с врачом."
    } else if bmi < 25.0 {
        "✅ Ваш вес в норме. Продолжайте поддерживать здоровый образ жизни!"
    } else if bmi < 30.0 {
        "⚠️ У вас избыточный вес. Рекомендуется увеличить физическую активность."
    } else {
        "🚨 У вас ожирение. Рекомендуется обратиться к врачу для консультации."
    }
}

fn pressure_advisory(syst: f64, diast: f64) -> &'static str {
    if syst < 90.0 || diast < 60.0 {
        "🩸 Пониженное давление. Рекомендуется проконсультироваться с врачом."
    } else if syst > 140.0 || diast > 90.0 {
        "❤️ Повышенное давление. Рекомендуется проконсультироваться с кардиологом."
    } else {
        "✅ Артериальное давление в норме."
    }
}

fn pulse_advisory(pulse: f64) -> &'static str {
    if pulse < 60.0 {
        "🫀 Низкий пульс. Рекомендуется проконсультироваться с врачом."
    } else if pulse > 100.0 {
        "💓 Высокий пульс. Рекомендуется проконсультироваться с кардиологом."
    } else {
        "✅ Пульс в норме."
    }
}

fn glucose_advisory(glucose: f64) -> &'static str {
    if glucose < 3.9 {
        "🩸 Низкий уровень глюкозы. Рекомендуется проконсультироваться с врачом."
    } else if glucose > 5.5 {
        "🍬 Повышенный уровень глюкозы. Рекомендуется проконсультироваться с эндокринологом."
    } else {
        "✅ Уровень глюкозы в норме."
    }
}

fn sleep_advisory(sleep: f64) -> &'static str {
    if sleep < 6.0 {
        "😴 Недостаточно сна. Рекомендуется спать 7-9 часов в сутки."
    } else if sleep > 9.0 {
        "🛌 Избыток сна. Рекомендуется 7-9 часов в сутки."
    } else {
        "💤 Продолжительность сна в норме."
    }
}

fn steps_advisory(steps: u32) -> &'static str {
    if steps < 5000 {
        "🚶‍♂️ Низкая активность. Рекомендуется увеличить количество шагов до 10,000 в день."
    } else if steps < 10000 {
        "🏃‍♂️ Средняя активность. Отлично! Стремитесь к 10,000 шагов в день."
    } else {
        "🎯 Отличная активность! Продолжайте в том же духе."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use compass_contracts::{Gender, HealthConditions};

    fn profile() -> Profile {
        Profile {
            full_name: "Тестовый Пользователь".to_string(),
            birth_year: 1990,
            age: 36,
            gender: Gender::Male,
            blood_type: "B+".to_string(),
            weight: 80.0,
            height: 180.0,
            emergency_contact: "+7 900 111-22-33".to_string(),
            health_conditions: HealthConditions::default(),
        }
    }

    #[test]
    fn empty_diary_yields_single_placeholder() {
        let recs = daily_recommendations(&profile(), None);
        assert_eq!(recs, vec![EMPTY_DIARY_ADVISORY.to_string()]);
    }

    #[test]
    fn elevated_pressure_advisory() {
        let mut entry = VitalsEntry::at(Utc::now());
        entry.syst = Some(150.0);
        entry.diast = Some(95.0);

        let recs = daily_recommendations(&profile(), Some(&entry));
        assert!(recs.iter().any(|r| r.contains("Повышенное давление")
            && r.contains("кардиологом")));
        assert!(!recs.iter().any(|r| r.contains("давление в норме")));
    }

    #[test]
    fn low_pressure_advisory() {
        let mut entry = VitalsEntry::at(Utc::now());
        entry.syst = Some(85.0);
        entry.diast = Some(55.0);

        let recs = daily_recommendations(&profile(), Some(&entry));
        assert!(recs.iter().any(|r| r.contains("Пониженное давление")));
    }

    #[test]
    fn pressure_needs_both_readings() {
        let mut entry = VitalsEntry::at(Utc::now());
        entry.syst = Some(150.0);

        let recs = daily_recommendations(&profile(), Some(&entry));
        assert!(!recs.iter().any(|r| r.contains("давление")));
    }

    #[test]
    fn bmi_bands_are_contiguous() {
        let p = profile(); // 180 cm
        for (weight, marker) in [
            (55.0, "ниже нормы"),    // BMI ≈ 17.0
            (70.0, "вес в норме"),   // BMI ≈ 21.6
            (85.0, "избыточный"),    // BMI ≈ 26.2
            (100.0, "ожирение"),     // BMI ≈ 30.9
        ] {
            let mut entry = VitalsEntry::at(Utc::now());
            entry.weight = Some(weight);
            let recs = daily_recommendations(&p, Some(&entry));
            assert!(
                recs.iter().any(|r| r.contains(marker)),
                "weight {weight} should band to '{marker}'"
            );
        }
    }

    #[test]
    fn one_advisory_per_populated_axis() {
        let mut entry = VitalsEntry::at(Utc::now());
        entry.pulse = Some(72.0);
        entry.glucose = Some(5.0);
        entry.sleep = Some(8.0);
        entry.steps = Some(12000);

        let recs = daily_recommendations(&profile(), Some(&entry));
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("Пульс в норме"));
        assert!(recs[1].contains("глюкозы в норме"));
        assert!(recs[2].contains("сна в норме"));
        assert!(recs[3].contains("Отличная активность"));
    }

    #[test]
    fn zero_readings_emit_no_advisory() {
        let mut entry = VitalsEntry::at(Utc::now());
        entry.weight = Some(0.0);
        entry.glucose = Some(0.0);
        entry.sleep = Some(0.0);
        entry.steps = Some(0);
        entry.pulse = Some(72.0);

        let recs = daily_recommendations(&profile(), Some(&entry));
        assert_eq!(recs, vec!["✅ Пульс в норме.".to_string()]);
    }

    #[test]
    fn zero_pressure_reading_skips_the_pressure_axis() {
        let mut entry = VitalsEntry::at(Utc::now());
        entry.syst = Some(120.0);
        entry.diast = Some(0.0);

        let recs = daily_recommendations(&profile(), Some(&entry));
        assert!(recs.is_empty());
    }

    #[test]
    fn glucose_band_edges() {
        let p = profile();
        for (glucose, marker) in [
            (3.8, "Низкий уровень глюкозы"),
            (3.9, "глюкозы в норме"),
            (5.5, "глюкозы в норме"),
            (5.6, "Повышенный уровень глюкозы"),
        ] {
            let mut entry = VitalsEntry::at(Utc::now());
            entry.glucose = Some(glucose);
            let recs = daily_recommendations(&p, Some(&entry));
            assert!(
                recs.iter().any(|r| r.contains(marker)),
                "glucose {glucose} should band to '{marker}'"
            );
        }
    }
}
