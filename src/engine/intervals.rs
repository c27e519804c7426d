use super::clock;
use super::types::AssignmentPlan;
use crate::model::{Assignment, IntervalMission, Person, PersonId};
use std::collections::HashSet;

/// Dérive les tranches de chaque mission horaire et les remplit par
/// tourniquet cyclique, avec un curseur unique partagé sur tout le lot
/// (la charge s'étale entre missions au lieu d'épuiser la réserve sur la
/// première). `committed` : uids déjà engagés dans des listes d'affectation
/// persistées, exclus de la réserve avant toute mission.
pub fn assign_interval_missions(
    missions: &[IntervalMission],
    roster: &[Person],
    committed: &HashSet<PersonId>,
) -> AssignmentPlan {
    let pool: Vec<&Person> = roster
        .iter()
        .filter(|p| p.is_at_base && !committed.contains(&p.uid))
        .collect();

    let mut plan = AssignmentPlan::new();
    let mut used: HashSet<PersonId> = HashSet::new();
    let mut cursor = 0usize;

    for mission in missions {
        let assigned = plan.entry(mission.id.clone()).or_default();

        for index in 0..derived_slot_count(mission) {
            if used.len() == pool.len() {
                // réserve épuisée : les tranches restantes demeurent vacantes
                break;
            }
            let chosen = pool[cursor % pool.len()];
            assigned.push(Assignment {
                uid: chosen.uid.clone(),
                requirement_index: index,
            });
            used.insert(chosen.uid.clone());
            cursor += 1;
        }
    }

    plan
}

/// Nombre de tranches d'une mission horaire. Toute entrée mal formée
/// (heure imparsable, durée non numérique, fin avant début) vaut zéro
/// tranche : dégradation silencieuse, jamais une erreur.
pub fn derived_slot_count(mission: &IntervalMission) -> usize {
    let (Ok(start), Ok(end), Ok(duration)) = (
        clock::parse_hhmm(&mission.start_hour),
        clock::parse_hhmm(&mission.end_hour),
        clock::parse_duration_hours(&mission.shift_duration),
    ) else {
        return 0;
    };
    clock::slot_count(start, end, duration)
}
