use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heatrisk::{
    DISCLAIMER, HeatRiskConfig, HeatRiskError, HeatRiskService, OpenMeteoClient, RiskReport,
    logging, web,
};
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "heatrisk",
    version,
    about = "Heat & Sun Risk Checker - heat stress danger for your district"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported districts
    Locations,

    /// Check current heat risk for a district
    Check {
        /// District name (see `heatrisk locations`)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        name: Option<String>,

        /// Check every district
        #[arg(long)]
        all: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<HeatRiskError>() {
                Some(heat_err) => {
                    eprintln!("Error: {}", heat_err.user_message());
                    eprintln!("  caused by: {heat_err}");
                }
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = HeatRiskConfig::load_from_path(cli.config.as_deref())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    debug!(
        "Using config from: {}",
        cli.config
            .as_ref()
            .map(|p| p.display().to_string())
            .or_else(|| HeatRiskConfig::get_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string())
    );

    let client = OpenMeteoClient::new(&config.weather)?;
    let service = HeatRiskService::new(Box::new(client));

    match cli.command {
        Commands::Locations => {
            for name in service.list_locations() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { name, all, json } => {
            if all {
                check_all(&service, json).await
            } else {
                let name = name.context("a district name or --all is required")?;
                let report = service.compute_risk(&name).await?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print_reports(&[report]);
                }
                Ok(ExitCode::SUCCESS)
            }
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            web::run(&host, port, Arc::new(service)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn check_all(service: &HeatRiskService, json: bool) -> Result<ExitCode> {
    let mut reports = Vec::new();
    let mut failed = false;

    for (name, result) in service.compute_all().await {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{}: {}", name, e);
                eprintln!("Error for {name}: {}", e.user_message());
                failed = true;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if !reports.is_empty() {
        print_reports(&reports);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_reports(reports: &[RiskReport]) {
    println!("☀️ Heat & Sun Risk Checker");
    for report in reports {
        println!("---");
        print!("{}", report.render());
    }
    println!("---");
    println!("{DISCLAIMER}");
}
