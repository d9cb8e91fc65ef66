use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alamat_config::Config;
use alamat_core::Location;

pub mod registry;

#[derive(Parser)]
#[command(name = "alamat")]
#[command(version = "0.1.0")]
#[command(about = "Verify and standardize postal addresses against national map services")]
struct Cli {
    /// First street line (block number and road)
    #[arg(long, default_value = "")]
    street1: String,

    /// Second street line (unit number, building)
    #[arg(long)]
    street2: Option<String>,

    /// Postal code to verify
    #[arg(long)]
    postal_code: String,

    /// ISO 3166-1 alpha-2 country code
    #[arg(long, default_value = "SG")]
    country: String,

    /// Provider to verify against, overriding the configured default
    #[arg(long)]
    provider: Option<String>,

    /// Print the outcome and rewritten location as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alamat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = Config::new();

    let provider = cli.provider.as_deref().unwrap_or(&config.provider);
    let verifier = registry::find(&config, provider)
        .ok_or_else(|| anyhow::anyhow!("no enabled provider named {provider:?}"))?;

    let mut location = Location {
        country: cli.country,
        postal_code: cli.postal_code,
        street1: cli.street1,
        street2: cli.street2,
        ..Default::default()
    };

    let verification = verifier.verify(&mut location).await?;
    tracing::info!("{}: {}", verifier.metadata().name, verification.message);

    if cli.json {
        let output = serde_json::json!({
            "result": verification.result,
            "message": verification.message,
            "location": location,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", verification.message);
        if verification.is_match() {
            println!("street1: {}", location.street1);
            if let Some(street2) = &location.street2 {
                println!("street2: {street2}");
            }
            println!("postal_code: {}", location.postal_code);
            if let Some(point) = location.point {
                println!("point: {}, {}", point.latitude, point.longitude);
            }
        }
    }

    Ok(verification.is_match())
}
