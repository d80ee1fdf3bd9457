//! The preventive-examination catalog.
//!
//! `build_plan` walks a fixed ordered sequence of candidate items, each
//! gated by an include predicate over (age, gender, birth year).  Order of
//! evaluation is fixed and determines output order; excluded items are
//! omitted entirely.  Gender-gated items do not fire for
//! `Gender::Unspecified`.

use compass_contracts::{Gender, Profile};
use serde::{Deserialize, Serialize};

/// Birth years eligible for the comprehensive checkup (диспансеризация)
/// regardless of age.  Past 40 everyone is eligible annually.
pub const CHECKUP_BIRTH_YEARS: [i32; 8] = [1987, 1990, 1993, 1996, 1999, 2002, 2005, 2008];

/// A candidate preventive examination that passed its gating predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub title: String,
    /// Human-readable frequency label, e.g. "ежегодно", "раз в 2 года".
    pub frequency: String,
    /// One-line purpose note.
    pub note: String,
    /// Long-form rationale shown in the event detail view.
    pub detailed_description: String,
}

impl PlanItem {
    fn new(title: &str, frequency: &str, note: &str, detailed_description: String) -> Self {
        Self {
            title: title.to_string(),
            frequency: frequency.to_string(),
            note: note.to_string(),
            detailed_description,
        }
    }
}

/// True when the profile is due for the comprehensive checkup.
pub fn checkup_eligible(profile: &Profile) -> bool {
    CHECKUP_BIRTH_YEARS.contains(&profile.birth_year) || profile.age >= 40
}

/// Build the ordered preventive-care plan for `profile`.
///
/// The caller guards against an absent profile; an incomplete one still
/// produces whatever its age/gender admit.
pub fn build_plan(profile: &Profile) -> Vec<PlanItem> {
    let age = profile.age;
    let gender = profile.gender;
    let mut plan = Vec::new();

    // Baseline items for all ages.
    plan.push(PlanItem::new(
        "Общий анализ крови",
        "ежегодно",
        "Выявление анемии и воспалений",
        "Общий анализ крови (ОАК) оценивает общее состояние организма: \
         уровень гемоглобина и эритроцитов (анемия), лейкоцитарную формулу \
         (воспаления и инфекции), тромбоциты (свертываемость) и СОЭ.\n\
         Поводы пройти внепланово: утомляемость, бледность, частые инфекции, \
         необъяснимые кровоподтеки, потеря веса."
            .to_string(),
    ));

    plan.push(PlanItem::new(
        "Общий анализ мочи",
        "ежегодно",
        "Проверка почек и обмена веществ",
        "Общий анализ мочи (ОАМ) выявляет ранние признаки заболеваний почек \
         и мочевыводящих путей: физические свойства, белок, глюкозу, \
         микроскопию осадка.\n\
         Поводы пройти внепланово: боли в пояснице, изменение цвета мочи, \
         учащенное мочеиспускание, отеки под глазами, повышенное давление."
            .to_string(),
    ));

    plan.push(PlanItem::new(
        "Биохимия крови",
        "ежегодно",
        "Оценка работы печени и почек",
        "Биохимический анализ крови показывает состояние печени, почек и \
         поджелудочной железы: глюкоза, мочевина и креатинин, АЛТ/АСТ и \
         билирубин, общий белок, холестерин, электролиты.\n\
         Поводы пройти внепланово: жажда, тошнота, отеки, желтушность, \
         необъяснимая слабость."
            .to_string(),
    ));

    plan.push(PlanItem::new(
        "ЭКГ",
        if age >= 40 { "ежегодно" } else { "раз в 2 года" },
        "Проверка работы сердца",
        "Электрокардиограмма регистрирует электрическую активность сердца: \
         нарушения ритма, признаки ишемической болезни, перенесенный инфаркт.\n\
         Поводы пройти немедленно: давящая боль за грудиной, одышка в покое, \
         нерегулярное сердцебиение с головокружением, холодный пот."
            .to_string(),
    ));

    // Age-gated items.
    if age >= 18 {
        plan.push(PlanItem::new(
            "Флюорография",
            "ежегодно",
            "Обследование легких",
            "Флюорография выявляет туберкулез, опухоли легких и пневмонию, \
             изменения средостения, размеры и контуры сердца. Особенно важна \
             для курильщиков и при профессиональных вредностях.\n\
             Поводы пройти немедленно: кашель дольше 2-3 недель, боль в груди \
             при дыхании, кровохарканье, ночная потливость."
                .to_string(),
        ));
    }

    if age >= 30 {
        plan.push(PlanItem::new(
            "УЗИ брюшной полости",
            "раз в 1–2 года",
            "Обследование внутренних органов",
            "УЗИ брюшной полости оценивает печень, желчный пузырь, \
             поджелудочную железу, селезенку и почки; выявляет кисты, камни и \
             воспалительные процессы.\n\
             Поводы пройти немедленно: острая боль в правом подреберье, \
             желтушность, рвота с кровью, резкое увеличение живота."
                .to_string(),
        ));
    }

    if gender == Gender::Female && age >= 40 {
        plan.push(PlanItem::new(
            "Маммография",
            "каждые 1–2 года",
            "Обследование молочных желез",
            "Маммография обнаруживает ранние формы рака молочной железы, \
             когда опухоль еще не прощупывается, а также кисты и фиброаденомы.\n\
             Поводы пройти немедленно: уплотнение в железе, выделения из \
             соска, изменение формы, втяжение кожи."
                .to_string(),
        ));
    }

    if gender == Gender::Male && age >= 45 {
        plan.push(PlanItem::new(
            "Анализ на ПСА",
            "ежегодно",
            "Обследование предстательной железы",
            "Анализ на простат-специфический антиген выявляет ранние формы \
             рака предстательной железы и помогает отличить аденому от \
             злокачественного процесса.\n\
             Поводы пройти немедленно: затрудненное или частое \
             мочеиспускание, боль в промежности, кровь в моче."
                .to_string(),
        ));
    }

    if checkup_eligible(profile) {
        plan.push(PlanItem::new(
            "Диспансеризация",
            if age >= 40 { "ежегодно" } else { "раз в 3 года" },
            "Комплексное обследование",
            checkup_description(profile),
        ));
    }

    plan
}

/// Assemble the comprehensive-checkup rationale with its age/gender-gated
/// sub-components.
fn checkup_description(profile: &Profile) -> String {
    let age = profile.age;
    let mut lines = vec![
        "Диспансеризация — бесплатное комплексное обследование для выявления \
         заболеваний на ранней стадии. Включает:"
            .to_string(),
        "• Анкетирование и опрос о жалобах".to_string(),
        "• Измерение роста, веса, окружности талии, расчет ИМТ".to_string(),
        "• Измерение артериального давления".to_string(),
        "• Анализы крови (общий, биохимический, холестерин, глюкоза)".to_string(),
        "• Общий анализ мочи".to_string(),
        "• Флюорографию и ЭКГ".to_string(),
        "• Осмотр терапевта с определением группы здоровья".to_string(),
    ];

    if age >= 40 {
        lines.push("• Измерение внутриглазного давления".to_string());
    }
    if (40..=64).contains(&age) {
        lines.push("• Анализ кала на скрытую кровь (2 раза)".to_string());
    }
    if age >= 45 {
        lines.push("• Эзофагогастродуоденоскопию (однократно)".to_string());
    }
    if profile.gender == Gender::Female && (40..=75).contains(&age) {
        lines.push("• Маммографию (раз в 2 года)".to_string());
    }
    if profile.gender == Gender::Male && [45, 50, 55, 60, 64].contains(&age) {
        lines.push("• Анализ ПСА для мужчин".to_string());
    }

    lines.push("С собой: паспорт и полис ОМС. Обычно занимает 1 рабочий день.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_contracts::HealthConditions;

    fn profile(gender: Gender, age: u32, birth_year: i32) -> Profile {
        Profile {
            full_name: "Тестовый Пользователь".to_string(),
            birth_year,
            age,
            gender,
            blood_type: "A+".to_string(),
            weight: 70.0,
            height: 170.0,
            emergency_contact: "+7 900 111-22-33".to_string(),
            health_conditions: HealthConditions::default(),
        }
    }

    fn titles(plan: &[PlanItem]) -> Vec<&str> {
        plan.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn plan_for_woman_of_42() {
        let plan = build_plan(&profile(Gender::Female, 42, 1990));
        let titles = titles(&plan);

        assert_eq!(
            titles,
            vec![
                "Общий анализ крови",
                "Общий анализ мочи",
                "Биохимия крови",
                "ЭКГ",
                "Флюорография",
                "УЗИ брюшной полости",
                "Маммография",
                "Диспансеризация",
            ]
        );

        // Birth year in the enumerated set AND age ≥ 40 → annual checkup.
        let checkup = plan.iter().find(|p| p.title == "Диспансеризация").unwrap();
        assert_eq!(checkup.frequency, "ежегодно");
        assert!(!titles.contains(&"Анализ на ПСА"));
    }

    #[test]
    fn ecg_frequency_flips_at_40() {
        let plan = build_plan(&profile(Gender::Male, 39, 1987));
        let ecg = plan.iter().find(|p| p.title == "ЭКГ").unwrap();
        assert_eq!(ecg.frequency, "раз в 2 года");

        let plan = build_plan(&profile(Gender::Male, 40, 1986));
        let ecg = plan.iter().find(|p| p.title == "ЭКГ").unwrap();
        assert_eq!(ecg.frequency, "ежегодно");
    }

    #[test]
    fn young_profile_skips_age_gated_items() {
        let plan = build_plan(&profile(Gender::Male, 17, 2009));
        let titles = titles(&plan);
        assert!(!titles.contains(&"Флюорография"));
        assert!(!titles.contains(&"УЗИ брюшной полости"));
        assert!(!titles.contains(&"Диспансеризация"));
        assert_eq!(titles.len(), 4);
    }

    #[test]
    fn psa_only_for_men_from_45() {
        let plan = build_plan(&profile(Gender::Male, 45, 1981));
        assert!(titles(&plan).contains(&"Анализ на ПСА"));

        let plan = build_plan(&profile(Gender::Male, 44, 1982));
        assert!(!titles(&plan).contains(&"Анализ на ПСА"));

        let plan = build_plan(&profile(Gender::Female, 50, 1976));
        assert!(!titles(&plan).contains(&"Анализ на ПСА"));
    }

    #[test]
    fn unspecified_gender_gets_no_gendered_items() {
        let plan = build_plan(&profile(Gender::Unspecified, 50, 1976));
        let titles = titles(&plan);
        assert!(!titles.contains(&"Маммография"));
        assert!(!titles.contains(&"Анализ на ПСА"));
        // Age-gated items still apply.
        assert!(titles.contains(&"Диспансеризация"));
    }

    #[test]
    fn checkup_by_birth_year_before_40_is_triennial() {
        // Born 2002, age 24: eligible through the birth-year set only.
        let plan = build_plan(&profile(Gender::Male, 24, 2002));
        let checkup = plan.iter().find(|p| p.title == "Диспансеризация").unwrap();
        assert_eq!(checkup.frequency, "раз в 3 года");

        // Born 2001, age 25: not in the set, under 40 → no checkup.
        let plan = build_plan(&profile(Gender::Male, 25, 2001));
        assert!(!titles(&plan).contains(&"Диспансеризация"));
    }

    #[test]
    fn checkup_description_gates_sub_components() {
        let plan = build_plan(&profile(Gender::Female, 42, 1990));
        let desc = &plan
            .iter()
            .find(|p| p.title == "Диспансеризация")
            .unwrap()
            .detailed_description;

        assert!(desc.contains("внутриглазного давления")); // age ≥ 40
        assert!(desc.contains("скрытую кровь")); // 40..=64
        assert!(!desc.contains("Эзофагогастродуоденоскопию")); // age < 45
        assert!(desc.contains("Маммографию")); // female 40..=75
        assert!(!desc.contains("ПСА")); // not male

        let plan = build_plan(&profile(Gender::Male, 45, 1981));
        let desc = &plan
            .iter()
            .find(|p| p.title == "Диспансеризация")
            .unwrap()
            .detailed_description;
        assert!(desc.contains("Эзофагогастродуоденоскопию"));
        assert!(desc.contains("ПСА")); // male, age in {45,50,55,60,64}
        assert!(!desc.contains("Маммографию"));
    }
}
