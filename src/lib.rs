#![forbid(unsafe_code)]
//! Shibutz — affectation automatique pour tableaux de service d'unité (sans BD).
//!
//! - Stockage fichiers (JSON/CSV), instantané complet en mémoire.
//! - Moteur journalier : exigences hétérogènes rôle/spécialité, équité
//!   « moins récemment affecté », personne jamais retenu deux fois par passe.
//! - Moteur horaire : tranches dérivées d'une fenêtre `HH:MM`, tourniquet
//!   cyclique à curseur partagé, exclusion des gens déjà engagés.
//! - Moteurs purs : plan et registre d'équité retournés à l'appelant, qui
//!   persiste (ou pas).

pub mod engine;
pub mod io;
pub mod model;
pub mod report;
pub mod storage;

pub use engine::{
    apply_ledger, apply_plan, assign_interval_missions, assign_slot_missions, committed_uids,
    is_unrestricted, AssignmentPlan, ClockError, FairnessLedger, SlotOutcome,
};
pub use model::{
    Assignment, IntervalMission, MissionId, Person, PersonId, Requirement, Roster, SlotMission,
};
pub use report::{unfilled_duties, Gap, GapRenderer, TextReport};
pub use storage::{JsonStorage, Storage};
