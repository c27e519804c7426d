use crate::model::{Assignment, MissionId, Person, PersonId};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Plan produit par un moteur : mission → liste d'affectations (clé ordonnée
/// pour une itération déterministe). Le moteur n'écrit rien lui-même.
pub type AssignmentPlan = BTreeMap<MissionId, Vec<Assignment>>;

/// Registre d'équité du moteur journalier : uid → date de dernière
/// affectation. Accumulateur explicite, à la place d'une mutation en place
/// du marqueur sur `Person` ; retourné à l'appelant qui décide de le
/// persister ou non.
#[derive(Debug, Clone, Default)]
pub struct FairnessLedger {
    dates: HashMap<PersonId, NaiveDate>,
}

impl FairnessLedger {
    /// Amorce le registre depuis les marqueurs `lastAssigned` d'un effectif.
    pub fn seed_from<'a, I>(people: I) -> Self
    where
        I: IntoIterator<Item = &'a Person>,
    {
        let dates = people
            .into_iter()
            .filter_map(|p| p.last_assigned.map(|d| (p.uid.clone(), d)))
            .collect();
        Self { dates }
    }

    /// `None` = jamais affecté : passe devant toute date réelle au tri.
    pub fn date_of(&self, uid: &PersonId) -> Option<NaiveDate> {
        self.dates.get(uid).copied()
    }

    pub fn touch(&mut self, uid: PersonId, date: NaiveDate) {
        self.dates.insert(uid, date);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &NaiveDate)> {
        self.dates.iter()
    }
}

/// Résultat du moteur journalier : plan + registre d'équité mis à jour.
#[derive(Debug, Clone)]
pub struct SlotOutcome {
    pub plan: AssignmentPlan,
    pub ledger: FairnessLedger,
}
