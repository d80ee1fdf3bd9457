//! HealthCompass core demo CLI.
//!
//! Loads a profile (from a TOML file or the built-in sample), saves it
//! through the application service, and prints the derived plan, calendar,
//! recommendations, wellness assessment, or ICS export.
//!
//! Usage:
//!   cargo run -p demo -- summary
//!   cargo run -p demo -- plan --profile demo/profile.toml
//!   cargo run -p demo -- export > calendar.ics

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use compass_contracts::{CompassError, CompassResult, Profile};
use compass_core::HealthApp;
use compass_store::MemoryStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Preventive-care plan and calendar engine demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "HealthCompass core demo",
    long_about = "Builds the preventive-care plan, calendar, recommendations and\n\
                  wellness assessment for a profile loaded from TOML."
)]
struct Cli {
    /// Profile file in TOML; the built-in sample is used when omitted.
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// The ordered examination plan with frequencies.
    Plan,
    /// The scheduled calendar events.
    Calendar,
    /// Examination / exercise / nutrition recommendations.
    Recommend,
    /// Wellness score and label.
    Wellness,
    /// iCalendar export of the scheduled events.
    Export,
    /// Everything at once.
    Summary,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging; set RUST_LOG=debug for the scheduler's decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CompassResult<()> {
    let profile = match &cli.profile {
        Some(path) => profile_from_file(path)?,
        None => sample_profile(),
    };

    let mut app = HealthApp::load(Box::new(MemoryStore::new()))?;
    let now = Utc::now();
    app.save_profile(profile, now)?;

    match cli.command {
        Command::Plan => print_plan(&app),
        Command::Calendar => print_calendar(&app),
        Command::Recommend => print_recommendations(&app),
        Command::Wellness => print_wellness(&app),
        Command::Export => println!("{}", app.export_ics()),
        Command::Summary => {
            print_plan(&app);
            print_calendar(&app);
            print_recommendations(&app);
            print_wellness(&app);
        }
    }

    Ok(())
}

// ── Profile loading ───────────────────────────────────────────────────────────

/// Read the file at `path` and parse it as a TOML profile.
fn profile_from_file(path: &Path) -> CompassResult<Profile> {
    let contents = std::fs::read_to_string(path).map_err(|e| CompassError::Config {
        reason: format!("failed to read profile file '{}': {}", path.display(), e),
    })?;
    toml::from_str(&contents).map_err(|e| CompassError::Config {
        reason: format!("failed to parse profile TOML: {}", e),
    })
}

fn sample_profile() -> Profile {
    Profile {
        full_name: "Иванова Мария Петровна".to_string(),
        birth_year: 1984,
        age: 0, // derived on save
        gender: compass_contracts::Gender::Female,
        blood_type: "A+".to_string(),
        weight: 64.0,
        height: 168.0,
        emergency_contact: "+7 900 000-00-00".to_string(),
        health_conditions: compass_contracts::HealthConditions::default(),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_plan(app: &HealthApp) {
    println!();
    println!("План обследований");
    println!("=================");
    for item in app.plan() {
        println!("• {} — {}", item.title, item.frequency);
        println!("  {}", item.note);
    }
}

fn print_calendar(app: &HealthApp) {
    println!();
    println!("Календарь");
    println!("=========");
    for event in app.events() {
        println!("{}  {}", event.start.format("%d.%m.%Y"), event.title);
    }
    if let Some(next) = app.next_event(Utc::now()) {
        println!("Ближайшее: {} ({})", next.title, next.start.format("%d.%m.%Y"));
    }
}

fn print_recommendations(app: &HealthApp) {
    let Some(recs) = app.recommendations() else {
        return;
    };
    println!();
    println!("Рекомендации");
    println!("============");
    for (heading, list) in [
        ("Обследования:", &recs.examinations),
        ("Упражнения:", &recs.exercises),
        ("Питание:", &recs.nutrition),
    ] {
        println!("{heading}");
        for line in list {
            println!("  • {line}");
        }
    }
}

fn print_wellness(app: &HealthApp) {
    let wellness = app.wellness();
    println!();
    println!(
        "Оценка здоровья: {}% ({})",
        wellness.display_percent(),
        wellness.label.as_ru()
    );
}
