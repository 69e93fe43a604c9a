use mealboard_plan::{AssignMealInput, Weekday, WeeklyPlan};
use strum::VariantArray;

#[test]
fn starts_with_all_days_empty() {
    let plan = WeeklyPlan::default();

    assert!(plan.is_empty());
    for day in Weekday::VARIANTS {
        assert_eq!(plan.meal(*day), None);
    }
}

#[test]
fn assign_installs_a_fresh_meal() {
    let mut plan = WeeklyPlan::default();

    let id = plan
        .assign(
            Weekday::Wednesday,
            AssignMealInput {
                name: "Tacos de pescado".to_owned(),
                note: "Comprar tortillas".to_owned(),
            },
        )
        .unwrap();

    let meal = plan.meal(Weekday::Wednesday).unwrap();
    assert_eq!(meal.id, id);
    assert_eq!(meal.name, "Tacos de pescado");
    assert_eq!(meal.note, "Comprar tortillas");
    assert!(!meal.completed);
    assert!(!plan.is_empty());
}

#[test]
fn assign_trims_name_and_note() {
    let mut plan = WeeklyPlan::default();

    plan.assign(
        Weekday::Monday,
        AssignMealInput {
            name: "  Sopa de lentejas  ".to_owned(),
            note: "  con pan  ".to_owned(),
        },
    )
    .unwrap();

    let meal = plan.meal(Weekday::Monday).unwrap();
    assert_eq!(meal.name, "Sopa de lentejas");
    assert_eq!(meal.note, "con pan");
}

#[test]
fn assign_rejects_whitespace_only_name() {
    let mut plan = WeeklyPlan::default();

    let result = plan.assign(
        Weekday::Friday,
        AssignMealInput {
            name: "   ".to_owned(),
            note: String::new(),
        },
    );

    assert!(result.is_err());
    assert_eq!(plan.meal(Weekday::Friday), None);
}

#[test]
fn assign_overwrites_with_new_identity() {
    let mut plan = WeeklyPlan::default();

    let first = plan
        .assign(
            Weekday::Sunday,
            AssignMealInput {
                name: "Paella de mariscos".to_owned(),
                note: String::new(),
            },
        )
        .unwrap();
    plan.toggle_completed(Weekday::Sunday);

    let second = plan
        .assign(
            Weekday::Sunday,
            AssignMealInput {
                name: "Pizza casera".to_owned(),
                note: String::new(),
            },
        )
        .unwrap();

    let meal = plan.meal(Weekday::Sunday).unwrap();
    assert_ne!(first, second);
    assert_eq!(meal.id, second);
    assert_eq!(meal.name, "Pizza casera");
    assert!(!meal.completed);
}

#[test]
fn ids_are_unique_across_days() {
    let mut plan = WeeklyPlan::default();
    let mut ids = std::collections::HashSet::new();

    for day in Weekday::VARIANTS {
        let id = plan
            .assign(
                *day,
                AssignMealInput {
                    name: format!("Cena del {day}"),
                    note: String::new(),
                },
            )
            .unwrap();
        ids.insert(id);
    }

    assert_eq!(ids.len(), 7);
}
