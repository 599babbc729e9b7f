//! CLI entry point for the campus-enroll interactive menu.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use campus_arango::{ArangoClient, ArangoError, Database};
use campus_core::{ArangoSettings, Console, CLASS_CATALOG, STUDENT_ROSTER};
use campus_enroll::menu::EnrollMenu;
use campus_enroll::seed;

#[derive(Parser)]
#[command(name = "campus-enroll")]
#[command(about = "Enroll students in classes on an ArangoDB school graph")]
struct Cli {
    /// Create the school graph and seed it before starting.
    #[arg(long)]
    new: bool,

    /// Database holding the school graph.
    #[arg(long, default_value = "esau")]
    database: String,

    /// Config file prefix (default: campus).
    #[arg(short, long, default_value = "campus")]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let db = match connect(&cli).await {
        Ok(db) => db,
        Err(e) => {
            println!("{}", setup_failure_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let menu = EnrollMenu::new(&db, &STUDENT_ROSTER, &CLASS_CATALOG);
    let mut console = Console::stdio();
    if let Err(e) = menu.run(&mut console).await {
        tracing::error!(error = %e, "Terminal I/O failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn connect(cli: &Cli) -> anyhow::Result<Database> {
    let settings = ArangoSettings::load(&cli.config)?;
    let client = ArangoClient::connect(&settings)?;
    println!("Successful connection to ArangoDB!");

    if cli.new {
        println!("Creating new database");
        if let Err(e) = seed::seed_school(&client.db(&cli.database)).await {
            tracing::debug!(error = %e, "Seeding failed");
            println!("Error seeding database: {e}");
        }
    }

    Ok(client.open(&cli.database).await?)
}

/// The single line shown when setup fails.
fn setup_failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ArangoError>() {
        Some(e) if e.is_database_not_found() => "Database not found".to_string(),
        _ => format!("Error connecting to the database: {err}"),
    }
}
