#![forbid(unsafe_code)]
use chrono::NaiveDate;
use shibutz::engine::assign_slot_missions;
use shibutz::model::{Person, PersonId, Requirement, SlotMission};

fn person(uid: &str, role: &str, pakal: &str, exstra: &str) -> Person {
    let mut p = Person::new("Prenom", "Nom", role);
    p.uid = PersonId::new(uid);
    p.pakal = pakal.to_string();
    p.exstra_pakal = exstra.to_string();
    p
}

fn requirement(role: &str, pakal: &str, exstra: &str) -> Requirement {
    let mut r = Requirement::new(role);
    r.pakal = pakal.to_string();
    r.exstra_pakal = exstra.to_string();
    r
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
}

#[test]
fn no_double_booking_across_missions() {
    let roster = vec![
        person("w1", "combatant", "", ""),
        person("w2", "combatant", "", ""),
    ];
    let missions = vec![
        SlotMission::new("gate", vec![requirement("combatant", "", "")]),
        SlotMission::new("patrol", vec![requirement("combatant", "", "")]),
    ];

    let outcome = assign_slot_missions(&missions, &roster, today());
    let all: Vec<_> = outcome.plan.values().flatten().collect();
    assert_eq!(all.len(), 2);
    assert_ne!(all[0].uid, all[1].uid);
}

#[test]
fn role_and_qualifications_gate_eligibility() {
    let roster = vec![
        person("w1", "combatant", "medic", ""),
        person("w2", "commander", "radio", ""),
        person("w3", "combatant", "radio", ""),
    ];
    let missions = vec![SlotMission::new(
        "radio gate",
        vec![requirement("combatant", "radio", "")],
    )];

    let outcome = assign_slot_missions(&missions, &roster, today());
    let assigned = &outcome.plan[&missions[0].id];
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].uid, PersonId::new("w3"));
    assert_eq!(assigned[0].requirement_index, 0);
}

#[test]
fn unrestricted_sentinels_match_anything() {
    let roster = vec![person("w1", "combatant", "whatever", "also whatever")];

    for sentinel in ["", "ללא דרישה", "אין"] {
        let missions = vec![SlotMission::new(
            "open slot",
            vec![requirement("combatant", sentinel, sentinel)],
        )];
        let outcome = assign_slot_missions(&missions, &roster, today());
        assert_eq!(outcome.plan[&missions[0].id].len(), 1, "sentinel {sentinel:?}");
    }
}

#[test]
fn prefers_least_recently_assigned() {
    let mut stale = person("old", "combatant", "", "");
    stale.last_assigned = NaiveDate::from_ymd_opt(2026, 8, 10);
    let mut recent = person("recent", "combatant", "", "");
    recent.last_assigned = NaiveDate::from_ymd_opt(2026, 8, 20);

    let missions = vec![SlotMission::new("gate", vec![requirement("combatant", "", "")])];

    let outcome = assign_slot_missions(&missions, &[recent.clone(), stale.clone()], today());
    assert_eq!(outcome.plan[&missions[0].id][0].uid, PersonId::new("old"));

    // jamais affecté passe devant toute date réelle
    let fresh = person("fresh", "combatant", "", "");
    let outcome = assign_slot_missions(&missions, &[recent, stale, fresh], today());
    assert_eq!(outcome.plan[&missions[0].id][0].uid, PersonId::new("fresh"));
}

#[test]
fn ledger_reports_todays_picks() {
    let roster = vec![person("w1", "combatant", "", "")];
    let missions = vec![SlotMission::new("gate", vec![requirement("combatant", "", "")])];

    let outcome = assign_slot_missions(&missions, &roster, today());
    assert_eq!(outcome.ledger.date_of(&PersonId::new("w1")), Some(today()));
}

#[test]
fn off_base_people_are_never_assignable() {
    let mut away = person("away", "combatant", "", "");
    away.is_at_base = false;

    let missions = vec![SlotMission::new("gate", vec![requirement("combatant", "", "")])];
    let outcome = assign_slot_missions(&missions, &[away], today());
    assert!(outcome.plan[&missions[0].id].is_empty());
}

#[test]
fn vacant_requirement_does_not_block_later_ones() {
    let roster = vec![person("w1", "combatant", "", "")];
    let missions = vec![SlotMission::new(
        "mixed",
        vec![
            requirement("pilot", "", ""),
            requirement("combatant", "", ""),
        ],
    )];

    let outcome = assign_slot_missions(&missions, &roster, today());
    let assigned = &outcome.plan[&missions[0].id];
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].requirement_index, 1);
}

#[test]
fn empty_requirements_yield_empty_list() {
    let roster = vec![person("w1", "combatant", "", "")];
    let missions = vec![SlotMission::new("empty", Vec::new())];

    let outcome = assign_slot_missions(&missions, &roster, today());
    assert!(outcome.plan[&missions[0].id].is_empty());
}

#[test]
fn rerun_on_frozen_snapshot_is_identical() {
    let roster = vec![
        person("w1", "combatant", "radio", ""),
        person("w2", "combatant", "", ""),
        person("w3", "commander", "", ""),
    ];
    let missions = vec![
        SlotMission::new(
            "gate",
            vec![
                requirement("commander", "", ""),
                requirement("combatant", "radio", ""),
            ],
        ),
        SlotMission::new("patrol", vec![requirement("combatant", "", "")]),
    ];

    let first = assign_slot_missions(&missions, &roster, today());
    let second = assign_slot_missions(&missions, &roster, today());
    assert_eq!(first.plan, second.plan);
}
