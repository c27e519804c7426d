use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Person (opaque, attribué par l'annuaire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Mission
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MissionId(String);

impl MissionId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Personne (membre de l'unité). Noms de champs côté fichier : ceux de
/// l'annuaire d'origine (camelCase, "pakal" = spécialité).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub uid: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(default)]
    pub pakal: String,
    #[serde(default)]
    pub pakal_gil: String,
    #[serde(default)]
    pub exstra_pakal: String,
    pub is_at_base: bool,
    /// Date de dernière affectation (équité slot-engine). Optionnelle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assigned: Option<NaiveDate>,
}

impl Person {
    pub fn new<F: Into<String>, L: Into<String>, R: Into<String>>(
        first_name: F,
        last_name: L,
        role: R,
    ) -> Self {
        Self {
            uid: PersonId::random(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
            pakal: String::new(),
            pakal_gil: String::new(),
            exstra_pakal: String::new(),
            is_at_base: true,
            last_assigned: None,
        }
    }
}

/// Exigence d'un poste de mission journalière. Chaque champ de spécialité
/// peut être "sans exigence" (chaîne vide ou sentinelle, voir
/// [`crate::engine::is_unrestricted`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub role: String,
    #[serde(default)]
    pub pakal: String,
    #[serde(default)]
    pub pakal_gil: String,
    #[serde(default)]
    pub exstra_pakal: String,
}

impl Requirement {
    pub fn new<R: Into<String>>(role: R) -> Self {
        Self {
            role: role.into(),
            pakal: String::new(),
            pakal_gil: String::new(),
            exstra_pakal: String::new(),
        }
    }
}

/// Affectation : une personne sur un index d'exigence (mission journalière)
/// ou de tranche (mission horaire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub uid: PersonId,
    pub requirement_index: usize,
}

/// Mission journalière : liste ordonnée d'exigences hétérogènes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotMission {
    pub id: MissionId,
    pub title: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub assigned_to: Vec<Assignment>,
}

impl SlotMission {
    pub fn new<T: Into<String>>(title: T, requirements: Vec<Requirement>) -> Self {
        Self {
            id: MissionId::random(),
            title: title.into(),
            requirements,
            assigned_to: Vec::new(),
        }
    }
}

/// Mission horaire : fenêtre `HH:MM`..`HH:MM` découpée en tranches de durée
/// fixe (heures, fraction permise, stockée en chaîne comme dans le dépôt
/// d'origine). Le nombre de tranches est toujours dérivé, jamais stocké.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalMission {
    pub id: MissionId,
    pub title: String,
    pub start_hour: String,
    pub end_hour: String,
    pub shift_duration: String,
    #[serde(default)]
    pub assigned_to: Vec<Assignment>,
}

impl IntervalMission {
    pub fn new<T, S, E, D>(title: T, start_hour: S, end_hour: E, shift_duration: D) -> Self
    where
        T: Into<String>,
        S: Into<String>,
        E: Into<String>,
        D: Into<String>,
    {
        Self {
            id: MissionId::random(),
            title: title.into(),
            start_hour: start_hour.into(),
            end_hour: end_hour.into(),
            shift_duration: shift_duration.into(),
            assigned_to: Vec::new(),
        }
    }
}

/// Instantané complet de l'unité (annuaire + dépôt de missions).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub people: Vec<Person>,
    #[serde(default)]
    pub slot_missions: Vec<SlotMission>,
    #[serde(default)]
    pub interval_missions: Vec<IntervalMission>,
}

impl Roster {
    pub fn find_person_by_uid<'a>(&'a self, uid: &PersonId) -> Option<&'a Person> {
        self.people.iter().find(|p| &p.uid == uid)
    }

    pub fn find_slot_mission_mut(&mut self, id: &MissionId) -> Option<&mut SlotMission> {
        self.slot_missions.iter_mut().find(|m| &m.id == id)
    }

    pub fn find_interval_mission_mut(&mut self, id: &MissionId) -> Option<&mut IntervalMission> {
        self.interval_missions.iter_mut().find(|m| &m.id == id)
    }
}
