mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vsphere_node_id::{
    array_contains_case_insensitive, convert_k8s_uuid_to_normal, normalized_uuid_from_provider_id,
    provider_id_from_uuid, should_process_node, uuid_from_provider_id, uuids_match, BiosUuid,
};

use crate::config::{CliConfig, OutputFormat, LOG_ENV};

#[derive(Parser, Debug)]
#[command(name = "vsphere-node-id")]
#[command(about = "Inspect and convert vSphere node provider IDs and UUIDs")]
struct Cli {
    /// Output format (falls back to VSPHERE_NODE_ID_FORMAT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    /// Reject malformed UUIDs instead of passing them through
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report whether a node with this provider ID belongs to vSphere
    ShouldProcess {
        /// Node provider ID (may be empty)
        provider_id: String,
    },
    /// Extract the UUID from a provider ID
    Extract {
        provider_id: String,
        /// Trim and lowercase the extracted UUID
        #[arg(long)]
        normalize: bool,
    },
    /// Convert a UUID between node and BIOS byte order
    Convert { uuid: String },
    /// Build a vSphere provider ID from a UUID
    ProviderId { uuid: String },
    /// Report whether two UUIDs identify the same machine
    Matches { node_uuid: String, vm_uuid: String },
    /// Report whether any item equals the target, ignoring case
    Contains {
        target: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
enum Outcome {
    Flag(bool),
    Text(String),
}

#[derive(Serialize, Debug)]
struct Report<'a> {
    command: &'a str,
    input: Vec<&'a str>,
    result: Outcome,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Flag(value) => write!(f, "{}", value),
            Outcome::Text(value) => write!(f, "{}", value),
        }
    }
}

fn run(command: &Commands, config: &CliConfig) -> Result<Outcome> {
    let outcome = match command {
        Commands::ShouldProcess { provider_id } => Outcome::Flag(should_process_node(provider_id)),
        Commands::Extract {
            provider_id,
            normalize,
        } => {
            if config.strict {
                Outcome::Text(BiosUuid::from_provider_id(provider_id.trim())?.to_string())
            } else if *normalize {
                Outcome::Text(normalized_uuid_from_provider_id(provider_id))
            } else {
                Outcome::Text(uuid_from_provider_id(provider_id).to_owned())
            }
        }
        Commands::Convert { uuid } => {
            if config.strict {
                Outcome::Text(BiosUuid::from_k8s(uuid)?.to_string())
            } else {
                Outcome::Text(convert_k8s_uuid_to_normal(uuid))
            }
        }
        Commands::ProviderId { uuid } => {
            if config.strict {
                Outcome::Text(BiosUuid::parse(uuid)?.provider_id())
            } else {
                Outcome::Text(provider_id_from_uuid(uuid))
            }
        }
        Commands::Matches { node_uuid, vm_uuid } => {
            if config.strict {
                let node = BiosUuid::parse(node_uuid)?;
                let vm = BiosUuid::parse(vm_uuid)?;
                Outcome::Flag(node == vm || node.to_k8s() == vm.uuid())
            } else {
                Outcome::Flag(uuids_match(node_uuid, vm_uuid))
            }
        }
        Commands::Contains { target, items } => {
            Outcome::Flag(array_contains_case_insensitive(items.as_slice(), target))
        }
    };
    Ok(outcome)
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::ShouldProcess { .. } => "should-process",
            Commands::Extract { .. } => "extract",
            Commands::Convert { .. } => "convert",
            Commands::ProviderId { .. } => "provider-id",
            Commands::Matches { .. } => "matches",
            Commands::Contains { .. } => "contains",
        }
    }

    fn inputs(&self) -> Vec<&str> {
        match self {
            Commands::ShouldProcess { provider_id } | Commands::Extract { provider_id, .. } => {
                vec![provider_id.as_str()]
            }
            Commands::Convert { uuid } | Commands::ProviderId { uuid } => vec![uuid.as_str()],
            Commands::Matches { node_uuid, vm_uuid } => vec![node_uuid.as_str(), vm_uuid.as_str()],
            Commands::Contains { target, items } => std::iter::once(target.as_str())
                .chain(items.iter().map(String::as_str))
                .collect(),
        }
    }
}

fn render(command: &Commands, outcome: Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.to_string()),
        OutputFormat::Json => {
            let report = Report {
                command: command.name(),
                input: command.inputs(),
                result: outcome,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.format, cli.strict)?;
    tracing::debug!(?config, command = cli.command.name(), "resolved configuration");

    let outcome = run(&cli.command, &config)?;
    println!("{}", render(&cli.command, outcome, config.format)?);
    Ok(())
}
