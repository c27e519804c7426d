#![forbid(unsafe_code)]
use shibutz::engine::{
    assign_interval_missions, committed_uids, derived_slot_count, minutes_to_hhmm, slot_window,
};
use shibutz::model::{Assignment, IntervalMission, Person, PersonId, Roster, SlotMission};
use std::collections::HashSet;

fn person(uid: &str) -> Person {
    let mut p = Person::new("Prenom", "Nom", "combatant");
    p.uid = PersonId::new(uid);
    p
}

fn mission(title: &str, start: &str, end: &str, duration: &str) -> IntervalMission {
    IntervalMission::new(title, start, end, duration)
}

#[test]
fn slot_count_and_windows() {
    let m = mission("tower", "08:00", "16:00", "2");
    assert_eq!(derived_slot_count(&m), 4);
    assert_eq!(slot_window(480, 0, 120), ("08:00".into(), "10:00".into()));
    assert_eq!(slot_window(480, 3, 120), ("14:00".into(), "16:00".into()));
}

#[test]
fn fractional_duration_drops_the_remainder() {
    // 285 minutes / 90 minutes = 3 tranches, reste abandonné
    let m = mission("tower", "08:00", "12:45", "1.5");
    assert_eq!(derived_slot_count(&m), 3);
}

#[test]
fn malformed_missions_degrade_to_zero_slots() {
    for m in [
        mission("bad duration", "08:00", "12:00", "abc"),
        mission("inverted", "14:00", "08:00", "2"),
        mission("bad time", "8h00", "12:00", "2"),
        mission("zero duration", "08:00", "12:00", "0"),
    ] {
        assert_eq!(derived_slot_count(&m), 0, "{}", m.title);
        let plan = assign_interval_missions(&[m.clone()], &[person("w1")], &HashSet::new());
        assert!(plan[&m.id].is_empty(), "{}", m.title);
    }
}

#[test]
fn wall_clock_labels_wrap_within_a_day() {
    assert_eq!(minutes_to_hhmm(0), "00:00");
    assert_eq!(minutes_to_hhmm(23 * 60 + 59), "23:59");
    assert_eq!(minutes_to_hhmm(25 * 60), "01:00");
}

#[test]
fn shared_cursor_spreads_load_across_missions() {
    let roster = vec![person("w1"), person("w2"), person("w3"), person("w4")];
    let missions = vec![
        mission("gate", "08:00", "12:00", "2"),  // 2 tranches
        mission("tower", "08:00", "12:00", "2"), // 2 tranches
    ];

    let plan = assign_interval_missions(&missions, &roster, &HashSet::new());
    let gate: Vec<_> = plan[&missions[0].id].iter().map(|a| a.uid.as_str()).collect();
    let tower: Vec<_> = plan[&missions[1].id].iter().map(|a| a.uid.as_str()).collect();
    assert_eq!(gate, ["w1", "w2"]);
    assert_eq!(tower, ["w3", "w4"]);
}

#[test]
fn exhaustion_leaves_trailing_slots_vacant() {
    let roster = vec![person("w1"), person("w2"), person("w3")];
    let missions = vec![
        mission("gate", "08:00", "12:00", "2"),  // 2 tranches
        mission("tower", "08:00", "14:00", "2"), // 3 tranches
    ];

    let plan = assign_interval_missions(&missions, &roster, &HashSet::new());
    assert_eq!(plan[&missions[0].id].len(), 2);
    assert_eq!(plan[&missions[1].id].len(), 1);
    assert_eq!(plan[&missions[1].id][0].requirement_index, 0);

    let mut seen: Vec<_> = plan.values().flatten().map(|a| a.uid.clone()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 3);
}

#[test]
fn committed_and_off_base_people_are_excluded_from_the_pool() {
    let mut away = person("away");
    away.is_at_base = false;
    let roster = vec![person("busy"), away, person("free")];

    let committed: HashSet<_> = [PersonId::new("busy")].into_iter().collect();
    let missions = vec![mission("gate", "08:00", "12:00", "2")];

    let plan = assign_interval_missions(&missions, &roster, &committed);
    let gate = &plan[&missions[0].id];
    assert_eq!(gate.len(), 1);
    assert_eq!(gate[0].uid, PersonId::new("free"));
}

#[test]
fn committed_uids_scans_every_stored_assignment_list() {
    let mut roster = Roster::default();
    let mut daily = SlotMission::new("gate", Vec::new());
    daily.assigned_to.push(Assignment {
        uid: PersonId::new("d1"),
        requirement_index: 0,
    });
    let mut hourly = mission("tower", "08:00", "12:00", "2");
    hourly.assigned_to.push(Assignment {
        uid: PersonId::new("h1"),
        requirement_index: 0,
    });
    roster.slot_missions.push(daily);
    roster.interval_missions.push(hourly);

    let committed = committed_uids(&roster);
    assert!(committed.contains(&PersonId::new("d1")));
    assert!(committed.contains(&PersonId::new("h1")));
    assert_eq!(committed.len(), 2);
}
