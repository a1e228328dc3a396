// Tarot Core Entry Point
// Reads an annual reading request, resolves it and prints the interpretation.

use anyhow::Context;
use std::io::Read;
use std::path::PathBuf;
use tarot_core::database;
use tarot_core::fs_manager::PortablePathManager;
use tarot_core::models::EnhancementConfig;
use tarot_core::reading::{AnnualReadingRequest, ReadingService, ReadingSource, ResolvedReading};
use tarot_core::telemetry::{get_subscriber, init_subscriber};
use tracing::{info, warn};

const USAGE: &str = "Usage: tarot-core [--regenerate] [request.json]\n\
Reads the annual reading request from the file, or from stdin when omitted.";

struct CliArgs {
    regenerate: bool,
    input: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<CliArgs>> {
    let mut args = CliArgs {
        regenerate: false,
        input: None,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--regenerate" => args.regenerate = true,
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with('-') => anyhow::bail!("Unknown option: {}\n{}", flag, USAGE),
            path => {
                if args.input.is_some() {
                    anyhow::bail!("Only one request file may be given\n{}", USAGE);
                }
                args.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Some(args))
}

fn read_request(input: Option<&PathBuf>) -> anyhow::Result<AnnualReadingRequest> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("Request is not a valid annual reading request")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_subscriber(get_subscriber("tarot-core", "info", std::io::stderr))?;

    let Some(args) = parse_args()? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = EnhancementConfig::from_env()?;
    let request = read_request(args.input.as_ref())?;

    PortablePathManager::init().context("Failed to create data directory")?;
    let pool = database::init_db(&PortablePathManager::db_path()).await?;

    if !args.regenerate {
        if let Some(stored) = database::get_reading(&pool, request.year).await? {
            info!(year = request.year, "Returning archived reading");
            let resolved = ResolvedReading {
                source: stored.source.parse::<ReadingSource>()?,
                interpretation: stored.interpretation.0,
            };
            println!("{}", serde_json::to_string_pretty(&resolved)?);
            return Ok(());
        }
    }

    let service = ReadingService::from_config(&config)?;
    let resolved = service.resolve(&request).await?;

    if let Err(e) =
        database::save_reading(&pool, request.year, resolved.source, &resolved.interpretation).await
    {
        warn!("Failed to archive reading for {}: {}", request.year, e);
    }

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
