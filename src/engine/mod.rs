mod clock;
mod eligibility;
mod intervals;
mod slots;
mod types;

pub use clock::{
    minutes_to_hhmm, parse_duration_hours, parse_hhmm, slot_count, slot_window, ClockError,
};
pub use eligibility::{is_eligible, is_unrestricted};
pub use intervals::{assign_interval_missions, derived_slot_count};
pub use slots::assign_slot_missions;
pub use types::{AssignmentPlan, FairnessLedger, SlotOutcome};

use crate::model::{PersonId, Roster};
use std::collections::HashSet;

/// Ensemble d'exclusion pour le moteur horaire : uids déjà présents dans une
/// liste d'affectation persistée, toutes missions confondues. Calculé à part
/// pour découpler la lecture de l'état du calcul des affectations.
pub fn committed_uids(roster: &Roster) -> HashSet<PersonId> {
    let slot = roster.slot_missions.iter().flat_map(|m| &m.assigned_to);
    let interval = roster.interval_missions.iter().flat_map(|m| &m.assigned_to);
    slot.chain(interval).map(|a| a.uid.clone()).collect()
}

/// Reporte un plan dans les listes `assignedTo` de l'instantané. Les moteurs
/// eux-mêmes n'écrivent rien ; la persistance revient à l'appelant.
pub fn apply_plan(roster: &mut Roster, plan: &AssignmentPlan) {
    for (mission_id, assignments) in plan {
        if let Some(m) = roster.find_slot_mission_mut(mission_id) {
            m.assigned_to = assignments.clone();
            continue;
        }
        if let Some(m) = roster.find_interval_mission_mut(mission_id) {
            m.assigned_to = assignments.clone();
        }
    }
}

/// Reporte le registre d'équité dans le champ `lastAssigned` des personnes.
pub fn apply_ledger(roster: &mut Roster, ledger: &FairnessLedger) {
    for person in &mut roster.people {
        if let Some(date) = ledger.date_of(&person.uid) {
            person.last_assigned = Some(date);
        }
    }
}
