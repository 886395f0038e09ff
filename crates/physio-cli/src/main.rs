use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use physio_cli::commands;
use physio_cli::config::{self, LogFormat, PhysioConfig};
use physio_core::models::measure_type::MeasureType;
use physio_service::OutcomesService;
use physio_storage::fs::FileStore;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "physio")]
#[command(about = "Clinical outcome tracking for physiotherapy measurements")]
struct Cli {
    /// Path to the config file
    #[arg(long, env = "PHYSIO_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file pointing at a data directory and seed the catalog
    Init {
        /// Directory holding definitions, measurements and re-evaluations
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Add catalog measures missing from the library
    Seed,
    /// List the measure library
    Measures,
    /// Record a measurement from a JSON request file
    Record { request: PathBuf },
    /// Correct a measurement from a JSON request file
    Update { id: Uuid, request: PathBuf },
    /// Delete a measurement
    Delete {
        id: Uuid,
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        clinic: Uuid,
    },
    /// Show progress for a patient on one measure type
    Progress {
        #[arg(long)]
        patient: Uuid,
        /// Measure type, e.g. nprs, odi, quick_dash
        #[arg(long)]
        measure_type: MeasureType,
    },
    /// Compare a re-evaluation from a JSON request file and store it
    Compare { request: PathBuf },
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    // `init` writes a fresh config and seeds; every other command reads it.
    let config = match &cli.command {
        Commands::Init { data_dir } => {
            let data_dir = match data_dir {
                Some(dir) => dir.clone(),
                None => config::default_data_dir()?,
            };
            let config = PhysioConfig::with_data_dir(data_dir);
            config::save_config(&config_path, &config)?;
            config
        }
        _ => config::load_config(&config_path)?,
    };
    init_logging(config.log_format);
    let service = service(&config);

    match cli.command {
        Commands::Init { .. } | Commands::Seed => commands::seed(&service).await,
        Commands::Measures => commands::measures(&service).await,
        Commands::Record { request } => commands::record(&service, &request).await,
        Commands::Update { id, request } => commands::update(&service, id, &request).await,
        Commands::Delete {
            id,
            patient,
            clinic,
        } => commands::delete(&service, id, patient, clinic).await,
        Commands::Progress {
            patient,
            measure_type,
        } => commands::progress(&service, patient, measure_type).await,
        Commands::Compare { request } => commands::compare(&service, &request).await,
    }
}

fn service(config: &PhysioConfig) -> commands::Service {
    OutcomesService::new(FileStore::new(config.data_dir.clone()), config.service.clone())
}
