//! Profiles command: list content profiles or show one.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jurbix_core::profiles::{ContentProfile, ProfileStore};

/// Arguments for the `profiles` subcommand.
#[derive(Args, Debug, Default)]
pub struct ProfilesArgs {
    /// Profile id to show in full. Omit to list all profiles.
    pub id: Option<String>,
}

#[derive(Serialize)]
struct ProfileSummary<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    active: bool,
}

/// List the available profiles, or print one profile's thresholds.
#[instrument(name = "cmd_profiles", skip_all, fields(id = ?args.id))]
pub fn cmd_profiles(
    args: ProfilesArgs,
    global_json: bool,
    store: &ProfileStore,
    active_id: &str,
) -> anyhow::Result<()> {
    debug!(id = ?args.id, active = active_id, "executing profiles command");

    match args.id {
        Some(ref id) => {
            if !store.contains(id) {
                let known: Vec<_> = store.profiles().iter().map(|p| p.id.as_str()).collect();
                bail!("unknown profile: {id} (available: {})", known.join(", "));
            }
            show_profile(store.get_profile_by_id(id), global_json)
        }
        None => list_profiles(store, active_id, global_json),
    }
}

fn list_profiles(store: &ProfileStore, active_id: &str, global_json: bool) -> anyhow::Result<()> {
    let summaries: Vec<_> = store
        .profiles()
        .iter()
        .map(|p| ProfileSummary {
            id: &p.id,
            name: &p.name,
            description: &p.description,
            active: p.id == active_id,
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for s in &summaries {
        let marker = if s.active { "*" } else { " " };
        println!(
            "{} {:<18} {}  {}",
            marker.green(),
            s.id.bold(),
            s.name,
            s.description.dimmed()
        );
    }
    Ok(())
}

fn show_profile(profile: &ContentProfile, global_json: bool) -> anyhow::Result<()> {
    if global_json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("{} ({})", profile.name.bold(), profile.id);
    println!("{}", profile.description.dimmed());
    println!();
    // Serialized form, keys sorted by name.
    let value = serde_json::to_value(&profile.thresholds)?;
    if let serde_json::Value::Object(map) = value {
        for (key, v) in map {
            println!("  {:<30} {}", key.cyan(), v);
        }
    }
    Ok(())
}
