use crate::engine::{derived_slot_count, is_unrestricted, parse_duration_hours, parse_hhmm, slot_window};
use crate::model::{MissionId, Requirement, Roster};

/// Poste resté vacant après une passe d'affectation. Le sous-effectif n'est
/// pas une erreur des moteurs ; c'est ici qu'il devient visible.
#[derive(Debug, Clone)]
pub struct Gap {
    pub mission_id: MissionId,
    pub mission_title: String,
    pub slot_index: usize,
    /// Exigence (journalier) ou fenêtre horaire (horaire), lisible telle quelle.
    pub detail: String,
}

/// Permet de customiser le rendu du rapport (texte, mail, etc.).
pub trait GapRenderer {
    fn render(&self, gaps: &[Gap]) -> String;
}

/// Gabarit texte simple, une ligne par poste vacant.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl GapRenderer for TextReport {
    fn render(&self, gaps: &[Gap]) -> String {
        if gaps.is_empty() {
            return "OK: all duties filled\n".to_string();
        }
        let mut out = format!("{} unfilled dut{}:\n", gaps.len(), plural(gaps.len()));
        for gap in gaps {
            out.push_str(&format!(
                "{} | slot {} | {}\n",
                gap.mission_title, gap.slot_index, gap.detail
            ));
        }
        out
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}

/// Liste les postes vacants de l'instantané : exigences journalières sans
/// entrée d'affectation, tranches horaires dérivées sans entrée.
pub fn unfilled_duties(roster: &Roster) -> Vec<Gap> {
    let mut out = Vec::new();

    for m in &roster.slot_missions {
        for (index, req) in m.requirements.iter().enumerate() {
            if m.assigned_to.iter().any(|a| a.requirement_index == index) {
                continue;
            }
            out.push(Gap {
                mission_id: m.id.clone(),
                mission_title: m.title.clone(),
                slot_index: index,
                detail: describe_requirement(req),
            });
        }
    }

    for m in &roster.interval_missions {
        let window = parse_hhmm(&m.start_hour)
            .ok()
            .zip(parse_duration_hours(&m.shift_duration).ok());
        for index in 0..derived_slot_count(m) {
            if m.assigned_to.iter().any(|a| a.requirement_index == index) {
                continue;
            }
            let detail = window
                .map(|(start, duration)| {
                    let (from, to) = slot_window(start, index, duration);
                    format!("{from}-{to}")
                })
                .unwrap_or_default();
            out.push(Gap {
                mission_id: m.id.clone(),
                mission_title: m.title.clone(),
                slot_index: index,
                detail,
            });
        }
    }

    out
}

fn describe_requirement(req: &Requirement) -> String {
    let mut s = req.role.clone();
    if !is_unrestricted(&req.pakal) {
        s.push_str(" / ");
        s.push_str(&req.pakal);
    }
    if !is_unrestricted(&req.exstra_pakal) {
        s.push_str(" / ");
        s.push_str(&req.exstra_pakal);
    }
    s
}
