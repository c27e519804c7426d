use crate::engine::{parse_duration_hours, parse_hhmm, slot_window};
use crate::model::{Person, PersonId, Requirement, Roster};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnes depuis CSV :
/// header `uid,first_name,last_name,role,pakal,pakal_gil,exstra_pakal,is_at_base`.
/// `uid` vide → identifiant généré ; colonnes de spécialité vides permises.
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let uid = rec.get(0).context("missing uid")?.trim();
        let first = rec.get(1).context("missing first_name")?.trim();
        let last = rec.get(2).context("missing last_name")?.trim();
        let role = rec.get(3).context("missing role")?.trim();
        if first.is_empty() || last.is_empty() || role.is_empty() {
            bail!("invalid people row (empty name or role)");
        }
        let mut person = Person::new(first, last, role);
        if !uid.is_empty() {
            person.uid = PersonId::new(uid);
        }
        if let Some(v) = rec.get(4) {
            person.pakal = v.trim().to_string();
        }
        if let Some(v) = rec.get(5) {
            person.pakal_gil = v.trim().to_string();
        }
        if let Some(v) = rec.get(6) {
            person.exstra_pakal = v.trim().to_string();
        }
        if let Some(flag) = rec.get(7) {
            let flag = flag.trim();
            if !flag.is_empty() {
                person.is_at_base = parse_bool(flag)
                    .with_context(|| format!("invalid is_at_base value for {first} {last}"))?;
            }
        }
        out.push(person);
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Spécification d'exigence côté CLI : `role[:pakal[:exstra_pakal]]`.
/// Les champs absents restent « sans exigence ».
pub fn parse_requirement_spec(spec: &str) -> anyhow::Result<Requirement> {
    let mut parts = spec.splitn(3, ':').map(str::trim);
    let role = parts.next().unwrap_or_default();
    if role.is_empty() {
        bail!("requirement spec needs a role: {spec}");
    }
    let mut req = Requirement::new(role);
    if let Some(pakal) = parts.next() {
        req.pakal = pakal.to_string();
    }
    if let Some(exstra) = parts.next() {
        req.exstra_pakal = exstra.to_string();
    }
    Ok(req)
}

/// Export JSON de l'instantané (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des affectations :
/// header `mission_id,mission_title,kind,slot,detail,uid,name`.
/// `detail` : rôle exigé (journalier) ou fenêtre `HH:MM-HH:MM` (horaire).
pub fn export_assignments_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["mission_id", "mission_title", "kind", "slot", "detail", "uid", "name"])?;

    for m in &roster.slot_missions {
        for a in &m.assigned_to {
            let detail = m
                .requirements
                .get(a.requirement_index)
                .map(|r| r.role.clone())
                .unwrap_or_default();
            let slot = a.requirement_index.to_string();
            let name = person_name(roster, &a.uid);
            w.write_record([
                m.id.as_str(),
                m.title.as_str(),
                "daily",
                slot.as_str(),
                detail.as_str(),
                a.uid.as_str(),
                name.as_str(),
            ])?;
        }
    }

    for m in &roster.interval_missions {
        let window = parse_hhmm(&m.start_hour)
            .ok()
            .zip(parse_duration_hours(&m.shift_duration).ok());
        for a in &m.assigned_to {
            let detail = window
                .map(|(start, duration)| {
                    let (from, to) = slot_window(start, a.requirement_index, duration);
                    format!("{from}-{to}")
                })
                .unwrap_or_default();
            let slot = a.requirement_index.to_string();
            let name = person_name(roster, &a.uid);
            w.write_record([
                m.id.as_str(),
                m.title.as_str(),
                "hourly",
                slot.as_str(),
                detail.as_str(),
                a.uid.as_str(),
                name.as_str(),
            ])?;
        }
    }

    w.flush()?;
    Ok(())
}

fn person_name(roster: &Roster, uid: &PersonId) -> String {
    roster
        .find_person_by_uid(uid)
        .map(|p| format!("{} {}", p.first_name, p.last_name))
        .unwrap_or_default()
}
