//! Interactive terminal front end for the clinic visit log.
//!
//! This binary is the presentation adapter: it prompts the operator for
//! already-delimited field values, hands them to `cvl-core` for validation
//! and storage, and renders lists, dashboards and charts back. The in-memory
//! store lives for the process lifetime; persistence happens at the explicit
//! load-at-startup and save-on-request points, not on every mutation.
//!
//! # Environment Variables
//! - `CVL_DATA_FILE`: Path of the CSV data file (default: "data/visits.csv")

use chrono::Local;
use cvl_core::{
    dashboard, render_charts, validate_entry_date, Dashboard, ReportError, Visit, VisitStore,
};
use cvl_storage::CsvStorage;
use cvl_types::PatientStatus;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DATA_FILE: &str = "data/visits.csv";

const MENU: &str = "\n=== Clinic Visit Log ===\n\
    1. Register a visit\n\
    2. List visits\n\
    3. Dashboard\n\
    4. Charts\n\
    5. Save to CSV\n\
    6. Exit";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("cvl=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_file =
        std::env::var("CVL_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_owned());
    let storage = CsvStorage::new(data_file);
    tracing::info!(path = %storage.path().display(), "++ Starting CVL");

    let mut store = VisitStore::new();
    match storage.load() {
        Ok(visits) => {
            for visit in visits {
                store.add(visit);
            }
            tracing::info!(count = store.len(), "visit journal ready");
        }
        Err(e) => {
            // Start with an empty journal; the file is only touched again on
            // an explicit save.
            tracing::warn!(path = %storage.path().display(), error = %e, "starting empty");
            eprintln!("Could not load {}: {e}", storage.path().display());
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{MENU}");
        let Some(choice) = prompt(&mut input, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if register_visit(&mut input, &mut store)?.is_none() {
                    break;
                }
            }
            "2" => list_visits(&store),
            "3" => show_dashboard(&store),
            "4" => show_charts(&store),
            "5" => save_visits(&storage, &store),
            "6" => break,
            other => println!("Unknown option '{other}', pick 1-6."),
        }
    }

    Ok(())
}

/// Prints a prompt and reads one trimmed line. `None` means end of input
/// (the operator closed stdin), which callers treat as "stop here".
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Collects visit fields, looping on validation errors until the tuple is
/// accepted. The entry-date rule (no dates before today) applies here and
/// only here; rows loaded from the CSV are exempt by design.
///
/// Returns `Ok(None)` when input ends mid-form.
fn register_visit(input: &mut impl BufRead, store: &mut VisitStore) -> io::Result<Option<()>> {
    println!("\n--- Register a new visit ---");

    let visit = loop {
        let Some(name) = prompt(input, "Patient name: ")? else {
            return Ok(None);
        };
        let Some(service) = prompt(input, "Service requested: ")? else {
            return Ok(None);
        };
        let Some(responsible) = prompt(input, "Responsible staff: ")? else {
            return Ok(None);
        };
        let Some(date) = prompt(input, "Date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        let Some(outcome) = prompt(input, "Visit outcome: ")? else {
            return Ok(None);
        };
        let Some(status) = prompt_status(input)? else {
            return Ok(None);
        };

        match Visit::new(&name, &service, &responsible, &date, &outcome, status.as_str()) {
            Ok(visit) => {
                let today = Local::now().date_naive();
                match validate_entry_date(visit.date(), today) {
                    Ok(()) => break visit,
                    Err(e) => println!("{e}. Please try again.\n"),
                }
            }
            Err(e) => println!("{e}. Please try again.\n"),
        }
    };

    println!("Visit registered with status: {}.", visit.status());
    store.add(visit);
    Ok(Some(()))
}

/// Shows the five statuses as a numbered menu and loops until a valid pick.
fn prompt_status(input: &mut impl BufRead) -> io::Result<Option<PatientStatus>> {
    println!("Patient status:");
    for (i, status) in PatientStatus::ALL.iter().enumerate() {
        println!("  {}. {status}", i + 1);
    }

    loop {
        let Some(picked) = prompt(input, "Pick a number: ")? else {
            return Ok(None);
        };
        match picked.parse::<usize>() {
            Ok(n) if (1..=PatientStatus::ALL.len()).contains(&n) => {
                return Ok(Some(PatientStatus::ALL[n - 1]));
            }
            _ => println!("Enter a number between 1 and {}.", PatientStatus::ALL.len()),
        }
    }
}

fn list_visits(store: &VisitStore) {
    if store.is_empty() {
        println!("No visits registered yet.");
        return;
    }

    println!("\n--- Registered visits ---");
    for (i, visit) in store.list().iter().enumerate() {
        println!("{}. {visit}", i + 1);
    }
}

fn show_dashboard(store: &VisitStore) {
    let today = Local::now().date_naive();
    match dashboard(store.list(), today) {
        Dashboard::NoVisits => println!("No visits registered yet."),
        Dashboard::Summary(summary) => {
            println!("\n--- Dashboard ---");
            println!("Total visits:  {}", summary.total);
            println!("Visits today:  {}", summary.visits_today);

            println!("By service:");
            for (service, count) in &summary.by_service {
                println!("  {service}: {count}");
            }
            println!("By status:");
            for (status, count) in &summary.by_status {
                println!("  {status}: {count}");
            }
            println!("By responsible:");
            for (responsible, count) in &summary.by_responsible {
                println!("  {responsible}: {count}");
            }
        }
    }
}

fn show_charts(store: &VisitStore) {
    match render_charts(store.list()) {
        Ok(text) => println!("\n{text}"),
        Err(ReportError::EmptyInput) => println!("No visits to chart yet."),
    }
}

fn save_visits(storage: &CsvStorage, store: &VisitStore) {
    match storage.save(store.list()) {
        Ok(()) => println!("Saved {} visits to {}.", store.len(), storage.path().display()),
        // The in-memory journal stays valid; the operator can retry or exit
        // without losing entries from this session.
        Err(e) => eprintln!("Could not save visits: {e}"),
    }
}
