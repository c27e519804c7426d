use super::eligibility;
use super::types::{AssignmentPlan, FairnessLedger, SlotOutcome};
use crate::model::{Assignment, Person, PersonId, SlotMission};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Affecte chaque exigence de chaque mission journalière à la personne
/// éligible la moins récemment affectée. Les exigences sont servies dans
/// l'ordre de la liste (glouton, les premières se servent d'abord) ; une
/// exigence sans candidat reste simplement vacante. Personne n'est retenu
/// deux fois dans la même passe, toutes missions confondues.
pub fn assign_slot_missions(
    missions: &[SlotMission],
    roster: &[Person],
    today: NaiveDate,
) -> SlotOutcome {
    let mut plan = AssignmentPlan::new();
    let mut ledger = FairnessLedger::seed_from(roster);
    let mut used: HashSet<PersonId> = HashSet::new();

    for mission in missions {
        let mut assigned: Vec<Assignment> = Vec::new();

        for (index, req) in mission.requirements.iter().enumerate() {
            let mut candidates: Vec<&Person> = roster
                .iter()
                .filter(|p| !used.contains(&p.uid) && eligibility::is_eligible(p, req))
                .collect();
            // tri stable : jamais affecté (None) devance toute date réelle,
            // à égalité l'ordre de l'effectif tranche
            candidates.sort_by_key(|p| ledger.date_of(&p.uid));

            if let Some(chosen) = candidates.first() {
                assigned.push(Assignment {
                    uid: chosen.uid.clone(),
                    requirement_index: index,
                });
                used.insert(chosen.uid.clone());
                // rétrograde l'élu derrière ses pairs pour la suite de la passe
                ledger.touch(chosen.uid.clone(), today);
            }
        }

        plan.insert(mission.id.clone(), assigned);
    }

    SlotOutcome { plan, ledger }
}
