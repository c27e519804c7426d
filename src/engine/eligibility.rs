use crate::model::{Person, Requirement};

/// Sentinelles « sans exigence » héritées du dépôt d'origine.
const UNRESTRICTED_MARKERS: [&str; 2] = ["ללא דרישה", "אין"];

/// Vrai si la valeur d'exigence n'impose rien (chaîne vide ou sentinelle).
pub fn is_unrestricted(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || UNRESTRICTED_MARKERS.contains(&v)
}

fn qualification_matches(required: &str, actual: &str) -> bool {
    is_unrestricted(required) || required == actual
}

/// Porte d'éligibilité complète : présence à la base, rôle exact,
/// spécialités principale et secondaire (sans exigence ou égalité stricte).
/// `pakalGil` est porté par les fiches mais ne filtre pas.
pub fn is_eligible(person: &Person, req: &Requirement) -> bool {
    person.is_at_base
        && person.role == req.role
        && qualification_matches(&req.pakal, &person.pakal)
        && qualification_matches(&req.exstra_pakal, &person.exstra_pakal)
}
