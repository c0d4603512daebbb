//! Command line harness for the form to search URL mapper.

mod payload;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend::api::{WebhookOutcome, fallback_communes, search_communes, send_to_webhook};
use common::mapper::{map_to_search_params, map_to_search_url};


#[derive(Parser)]
#[command(name = "form-lbc")]
#[command(about = "Maps real-estate search forms to LeBonCoin query URLs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a payload to the marketplace search URL
    Map {
        /// Payload JSON file, stdin when omitted or `-`
        payload: Option<PathBuf>,

        /// Look up a commune by name and attach it before mapping
        #[arg(long)]
        city: Option<String>,

        /// Also print every query parameter on its own line
        #[arg(short, long)]
        params: bool,
    },

    /// Look up communes by name
    City {
        /// Commune name to search for
        name: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Map a payload and deliver the submission to the webhook
    Submit {
        /// Payload JSON file, stdin when omitted or `-`
        payload: Option<PathBuf>,

        /// Look up a commune by name and attach it before mapping
        #[arg(long)]
        city: Option<String>,

        /// Webhook endpoint override
        #[arg(long)]
        webhook: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cli=info,backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Commands::Map { payload, city, params } => run_map(payload, city, params).await,
        Commands::City { name, limit } => run_city(&name, limit).await,
        Commands::Submit { payload, city, webhook } => {
            run_submit(payload, city, webhook.as_deref()).await
        }
    }
}

async fn run_map(path: Option<PathBuf>, city: Option<String>, show_params: bool) -> Result<()> {
    let mut snapshot = payload::load_snapshot(path.as_deref())?;
    if let Some(name) = city {
        payload::attach_city(&mut snapshot, &name).await?;
    }
    let params = map_to_search_params(&snapshot);
    render::print_mapping(&map_to_search_url(&snapshot), &params, show_params);
    Ok(())
}

async fn run_city(name: &str, limit: usize) -> Result<()> {
    let communes = match search_communes(name, limit).await {
        Ok(communes) => communes,
        Err(err) => {
            warn!("commune lookup failed, using built-in list: {:#}", err);
            fallback_communes(name)
        }
    };
    if communes.is_empty() {
        println!("No commune found for {name:?}");
        return Ok(());
    }
    for city in &communes {
        println!("{}", render::commune_line(city));
    }
    Ok(())
}

async fn run_submit(
    path: Option<PathBuf>,
    city: Option<String>,
    webhook: Option<&str>,
) -> Result<()> {
    let mut snapshot = payload::load_snapshot(path.as_deref())?;
    if let Some(name) = city {
        payload::attach_city(&mut snapshot, &name).await?;
    }
    // A submission without a selected commune is incomplete, same rule
    // as the form's submit handler.
    if snapshot.ville_data.is_none() {
        anyhow::bail!("payload has no ville_data; pick a commune first (--city)");
    }

    let url = map_to_search_url(&snapshot);
    match send_to_webhook(webhook, &snapshot, &url).await {
        WebhookOutcome::Sent => println!("Submission delivered."),
        WebhookOutcome::NotConfigured => println!("No webhook configured; nothing delivered."),
        WebhookOutcome::Failed(reason) => println!("Delivery failed: {reason}"),
    }
    println!("{url}");
    Ok(())
}
