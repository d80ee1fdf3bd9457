//! Profile-driven advisory lists.
//!
//! `recommend` is a pure function over the profile: three categorized lists
//! of advisory strings (examinations, exercises, nutrition).  Rules are
//! evaluated in fixed declaration order and the output preserves that order.
//! Gender-gated rules simply do not fire for `Gender::Unspecified`.

use compass_contracts::{BloodGroup, Gender, Profile, Vision, WorkType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Categorized advisory strings derived from the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub examinations: Vec<String>,
    pub exercises: Vec<String>,
    pub nutrition: Vec<String>,
}

/// Build all three advisory lists for `profile`.
pub fn recommend(profile: &Profile) -> Recommendations {
    let recommendations = Recommendations {
        examinations: examination_recommendations(profile),
        exercises: exercise_recommendations(profile),
        nutrition: nutrition_recommendations(profile),
    };
    debug!(
        age = profile.age,
        examinations = recommendations.examinations.len(),
        exercises = recommendations.exercises.len(),
        nutrition = recommendations.nutrition.len(),
        "built profile recommendations"
    );
    recommendations
}

/// Baseline four examinations plus gender-, age- and condition-gated items.
fn examination_recommendations(profile: &Profile) -> Vec<String> {
    let mut exams = vec![
        "💉 Общий анализ крови - ежегодно".to_string(),
        "🦷 Стоматолог - каждые 6 месяцев".to_string(),
        "👁 Офтальмолог - ежегодно".to_string(),
        "❤️ Кардиолог - раз в 2 года (ЭКГ)".to_string(),
    ];

    match profile.gender {
        Gender::Female => {
            exams.push("👩 Гинеколог - ежегодно".to_string());
            if profile.age >= 40 {
                exams.push("👙 Маммолог - ежегодно".to_string());
            }
        }
        Gender::Male => {
            if profile.age >= 45 {
                exams.push("👨 Уролог - ежегодно".to_string());
            }
        }
        Gender::Unspecified => {}
    }

    let conditions = &profile.health_conditions;
    if profile.has_allergies() {
        exams.push("🤧 Аллерголог - по показаниям".to_string());
    }
    if conditions.vision != Vision::Normal {
        exams.push("👓 Офтальмолог - каждые 6 месяцев".to_string());
    }
    if conditions.work_type == WorkType::Sedentary {
        exams.push("🦴 Ортопед - раз в 2 года".to_string());
    }

    exams
}

/// Daily walk baseline plus work-type- and condition-gated exercises.
fn exercise_recommendations(profile: &Profile) -> Vec<String> {
    let mut exercises = vec!["🚶 Ежедневная ходьба 30-60 минут".to_string()];

    let conditions = &profile.health_conditions;
    match conditions.work_type {
        WorkType::Sedentary => {
            exercises.push("💺 Упражнения для спины каждые 2 часа".to_string());
            exercises.push("👀 Гимнастика для глаз каждый час".to_string());
        }
        WorkType::Standing => {
            exercises.push("🦵 Упражнения для ног и вен".to_string());
            exercises.push("🧘 Растяжка спины ежедневно".to_string());
        }
        _ => {}
    }

    if conditions.vision == Vision::Myopia {
        exercises.push("👁 Гимнастика для глаз по Жданову".to_string());
    }
    if profile.has_condition_keyword("гипертония") {
        exercises.push("🏊 Плавание 2-3 раза в неделю".to_string());
    }

    exercises
}

/// Blood-group-keyed base regimen plus condition notes and universal items.
fn nutrition_recommendations(profile: &Profile) -> Vec<String> {
    let mut nutrition: Vec<String> = Vec::new();

    let regimen: &[&str] = match profile.blood_group() {
        Some(BloodGroup::O) => &["🍖 Белковая диета", "💊 Витамины B, K"],
        Some(BloodGroup::A) => &["🥗 Вегетарианское питание", "💊 Витамины C, E"],
        Some(BloodGroup::B) => &["🥛 Сбалансированная диета", "💊 Магний"],
        Some(BloodGroup::Ab) => &["🍣 Смешанное питание", "💊 Цинк, селен"],
        None => &[],
    };
    nutrition.extend(regimen.iter().map(|s| s.to_string()));

    if profile.has_allergies() {
        nutrition.push("🚫 Исключить аллергены из рациона".to_string());
    }
    if profile.has_condition_keyword("диабет") {
        nutrition.push("📊 Контроль углеводов".to_string());
        nutrition.push("🕒 Дробное питание 5-6 раз в день".to_string());
    }

    nutrition.push("💧 2 литра воды в день".to_string());
    nutrition.push("🥦 5 порций овощей и фруктов ежедневно".to_string());

    nutrition
}
