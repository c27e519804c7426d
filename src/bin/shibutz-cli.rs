#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use shibutz::{
    engine, io,
    model::{IntervalMission, Roster, SlotMission},
    report::{unfilled_duties, GapRenderer, TextReport},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de tableau de service (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'instantané d'unité
    #[arg(long, global = true, default_value = "unit.json")]
    snapshot: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des personnes depuis un CSV
    ImportPeople {
        #[arg(long)]
        csv: String,
    },

    /// Créer une mission journalière (postes rôle/spécialité)
    AddDaily {
        #[arg(long)]
        title: String,
        /// Exigence `role[:pakal[:exstra_pakal]]`, répétable, ordre significatif
        #[arg(long = "require")]
        require: Vec<String>,
    },

    /// Créer une mission horaire (fenêtre découpée en tranches)
    AddHourly {
        #[arg(long)]
        title: String,
        /// HH:MM (24 h)
        #[arg(long)]
        start: String,
        /// HH:MM (24 h)
        #[arg(long)]
        end: String,
        /// Durée d'une tranche, en heures (fraction permise, ex. 1.5)
        #[arg(long)]
        duration: String,
    },

    /// Affecter les missions journalières (équité « moins récemment affecté »)
    AssignDaily {
        /// Date de la passe, AAAA-MM-JJ (défaut : aujourd'hui UTC)
        #[arg(long)]
        date: Option<String>,
    },

    /// Affecter les missions horaires (tourniquet cyclique)
    AssignHourly,

    /// Lister les affectations et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Rapport des postes vacants (code retour 2 s'il en reste)
    Report {
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.snapshot)?;
    let mut roster = storage.load().unwrap_or_else(|_| Roster::default());

    let code = match cli.cmd {
        Commands::ImportPeople { csv } => {
            let people = io::import_people_csv(csv)?;
            println!("{} person(s) imported", people.len());
            roster.people.extend(people);
            storage.save(&roster)?;
            0
        }
        Commands::AddDaily { title, require } => {
            let requirements = require
                .iter()
                .map(|spec| io::parse_requirement_spec(spec))
                .collect::<Result<Vec<_>>>()?;
            let mission = SlotMission::new(title, requirements);
            println!("daily mission created: {}", mission.id.as_str());
            roster.slot_missions.push(mission);
            storage.save(&roster)?;
            0
        }
        Commands::AddHourly {
            title,
            start,
            end,
            duration,
        } => {
            // validation stricte à la saisie ; le moteur, lui, dégrade en
            // zéro tranche si le fichier contient du mal formé
            let start_min = engine::parse_hhmm(&start)?;
            let end_min = engine::parse_hhmm(&end)?;
            engine::parse_duration_hours(&duration)?;
            if end_min <= start_min {
                bail!("end must be after start (single-day window)");
            }
            let mission = IntervalMission::new(title, start, end, duration);
            println!("hourly mission created: {}", mission.id.as_str());
            roster.interval_missions.push(mission);
            storage.save(&roster)?;
            0
        }
        Commands::AssignDaily { date } => {
            let today = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
                None => Utc::now().date_naive(),
            };
            let outcome =
                engine::assign_slot_missions(&roster.slot_missions, &roster.people, today);
            let total: usize = outcome.plan.values().map(Vec::len).sum();
            engine::apply_plan(&mut roster, &outcome.plan);
            engine::apply_ledger(&mut roster, &outcome.ledger);
            storage.save(&roster)?;
            println!(
                "{} assignment(s) over {} daily mission(s)",
                total,
                outcome.plan.len()
            );
            0
        }
        Commands::AssignHourly => {
            let committed = engine::committed_uids(&roster);
            let plan = engine::assign_interval_missions(
                &roster.interval_missions,
                &roster.people,
                &committed,
            );
            let total: usize = plan.values().map(Vec::len).sum();
            engine::apply_plan(&mut roster, &plan);
            storage.save(&roster)?;
            println!(
                "{} assignment(s) over {} hourly mission(s)",
                total,
                plan.len()
            );
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, &roster)?;
            }
            // impression compacte
            for m in &roster.slot_missions {
                for a in &m.assigned_to {
                    println!(
                        "daily | {} | slot {} | {}",
                        m.title,
                        a.requirement_index,
                        person_label(&roster, a)
                    );
                }
            }
            for m in &roster.interval_missions {
                for a in &m.assigned_to {
                    println!(
                        "hourly | {} | slot {} | {}",
                        m.title,
                        a.requirement_index,
                        person_label(&roster, a)
                    );
                }
            }
            0
        }
        Commands::Report { out } => {
            let gaps = unfilled_duties(&roster);
            let rendered = TextReport.render(&gaps);
            if let Some(path) = out {
                std::fs::write(&path, &rendered)?;
            }
            print!("{rendered}");
            if gaps.is_empty() {
                0
            } else {
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn person_label(roster: &Roster, assignment: &shibutz::Assignment) -> String {
    roster
        .find_person_by_uid(&assignment.uid)
        .map(|p| format!("{} {}", p.first_name, p.last_name))
        .unwrap_or_else(|| assignment.uid.as_str().to_string())
}
