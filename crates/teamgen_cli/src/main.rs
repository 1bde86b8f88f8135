//! Teamgen CLI
//!
//! Loads a roster file, drives the JSON API gateway and prints the raw JSON
//! response, so the output shape is identical to what any other transport
//! would see.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use teamgen_core::{demo_records, ApiGateway, ApiSettings, PlayerRecord, RosterStore};

const CALLER: &str = "cli";

#[derive(Parser)]
#[command(name = "teamgen")]
#[command(about = "Assemble teams and player batches from a roster file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in demo roster to a JSON file
    Seed {
        /// Output roster file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Assemble and persist a team from a positional-skill request
    ProcessTeam {
        /// Roster JSON file (list of players with skills)
        #[arg(long)]
        roster: PathBuf,

        /// Request JSON file ({"required_positions": [...]})
        #[arg(long)]
        request: PathBuf,
    },

    /// Select a batch of players from requirement triples (no team is created)
    Select {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,

        /// Request JSON file ({"requirements": [...]})
        #[arg(long)]
        request: PathBuf,
    },

    /// List roster players, optionally filtered by position
    Players {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,

        /// Position filter, case-insensitive
        #[arg(long)]
        position: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Seed { out } => seed(&out),
        Commands::ProcessTeam { roster, request } => {
            let gateway = load_gateway(&roster)?;
            let request_json = read_file(&request)?;
            emit(&gateway.process_team(CALLER, &request_json))
        }
        Commands::Select { roster, request } => {
            let gateway = load_gateway(&roster)?;
            let request_json = read_file(&request)?;
            emit(&gateway.select_players(CALLER, &request_json))
        }
        Commands::Players { roster, position } => {
            let gateway = load_gateway(&roster)?;
            let response = match position {
                Some(pos) => gateway.players_by_position(CALLER, &pos),
                None => gateway.list_players(CALLER),
            };
            emit(&response)
        }
    }
}

fn seed(out: &Path) -> Result<()> {
    let records = demo_records();
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {} players to {}", records.len(), out.display());
    Ok(())
}

fn load_gateway(roster: &Path) -> Result<ApiGateway> {
    let store = load_roster(roster)?;
    let settings = ApiSettings::load_from_env()
        .map_err(|e| anyhow::anyhow!("failed to load API settings: {e}"))?;
    debug!(
        players = store.all_players().map(|p| p.len()).unwrap_or(0),
        "roster loaded"
    );
    Ok(ApiGateway::new(store, settings))
}

fn load_roster(path: &Path) -> Result<RosterStore> {
    let content = read_file(path)?;
    let records: Vec<PlayerRecord> = serde_json::from_str(&content)
        .with_context(|| format!("invalid roster file {}", path.display()))?;
    RosterStore::from_records(&records)
        .map_err(|e| anyhow::anyhow!("invalid roster entry in {}: {e}", path.display()))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Print the gateway response and fail the process when the call failed.
fn emit(response_json: &str) -> Result<()> {
    println!("{response_json}");
    let value: serde_json::Value = serde_json::from_str(response_json)
        .context("gateway returned malformed JSON")?;
    if value["success"].as_bool() != Some(true) {
        let code = value["error"]["code"].as_str().unwrap_or("UNKNOWN");
        bail!("request failed: {code}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seed_output_loads_back_as_a_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        seed(&path).unwrap();

        let store = load_roster(&path).unwrap();
        assert_eq!(store.all_players().unwrap().len(), 8);
        assert_eq!(store.find_by_position("Forward").unwrap().len(), 2);
    }

    #[test]
    fn invalid_roster_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "X", "position": "", "skills": []}}]"#).unwrap();
        assert!(load_roster(file.path()).is_err());
    }

    #[test]
    fn emit_fails_on_error_envelopes() {
        assert!(emit(r#"{"success": true, "data": null}"#).is_ok());
        let err = emit(r#"{"success": false, "error": {"code": "NOT_FOUND", "message": "x"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("NOT_FOUND"));
    }
}
