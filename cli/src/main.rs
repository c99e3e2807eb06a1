/*
    spotify-sweep-rs | Rust CLI tool to follow artists and save tracks from your Spotify library.
    Copyright (C) 2025  Israel Alberto Roldan Vega

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::process;
use sweep_core::{
    get_spotify_client, Operation, SelectionPolicy, SpotifyLibrary, SweepConfig, SweepReport,
    Sweeper,
};

#[derive(Parser)]
#[command(name = "spotify-sweep")]
#[command(about = "Follow artists and save tracks in bulk from your Spotify library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follows the artists of every track in 'Liked Songs'
    FollowFromTracks {
        /// Follow every listed artist, not just the first one of each track
        #[arg(long)]
        all_artists: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Follows the artists of every saved album
    FollowFromAlbums {
        /// Follow every listed artist, not just the first one of each album
        #[arg(long)]
        all_artists: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Saves every track of every saved album to 'Liked Songs'
    SaveAlbumTracks {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Collect and report without following or saving anything
    #[arg(long)]
    dry_run: bool,

    /// Output the report to a JSON file (e.g., --json=report.json)
    #[arg(long)]
    json: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if dotenv().is_err() {
        debug!("No .env file found");
    }

    let cli = Cli::parse();

    let (operation, policy, output) = match &cli.command {
        Commands::FollowFromTracks {
            all_artists,
            output,
        } => (
            Operation::FollowFromTracks,
            SelectionPolicy::from_all_artists(*all_artists),
            output,
        ),
        Commands::FollowFromAlbums {
            all_artists,
            output,
        } => (
            Operation::FollowFromAlbums,
            SelectionPolicy::from_all_artists(*all_artists),
            output,
        ),
        Commands::SaveAlbumTracks { output } => (
            Operation::SaveTracksFromAlbums,
            SelectionPolicy::default(),
            output,
        ),
    };

    handle_sweep(operation, policy, output).await;
}

async fn get_sweeper(dry_run: bool) -> Sweeper<SpotifyLibrary> {
    let spotify = match get_spotify_client().await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error initializing Spotify client: {}", e);
            process::exit(1);
        }
    };
    let config = SweepConfig::from_env().with_dry_run(dry_run);
    Sweeper::with_config(SpotifyLibrary::new(spotify), config)
}

async fn handle_sweep(operation: Operation, policy: SelectionPolicy, output: &OutputArgs) {
    let sweeper = get_sweeper(output.dry_run).await;

    println!("Starting: {} ...", operation);
    if output.dry_run {
        println!("(Dry run: nothing will be followed or saved)");
    }

    match sweeper.run(operation, policy).await {
        Ok(report) => {
            print_report(&report);

            if let Some(path) = output.json.as_deref() {
                match write_json_report(path, &report) {
                    Ok(()) => {
                        println!();
                        println!("[SAVED] Report saved to: {}", path);
                    }
                    Err(e) => {
                        eprintln!();
                        eprintln!("[ERROR] {:#}", e);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("[ERROR] Sweep failed: {}", e);
            process::exit(1);
        }
    }
}

fn print_report(report: &SweepReport) {
    let (verb, noun) = match report.operation {
        Operation::SaveTracksFromAlbums => ("Saved", "Tracks"),
        _ => ("Followed", "Artists"),
    };
    let verb = if report.dry_run { "Would have" } else { verb };

    println!();
    println!("---------------------------------------------------");
    println!("SWEEP COMPLETE");
    println!("---------------------------------------------------");
    println!("Pages Read:      {}", report.pages_fetched);
    println!("Items Scanned:   {}", report.items_scanned);
    println!(
        "Requests Sent:   {} / {}",
        report.batches_submitted, report.batches_planned
    );
    println!("---------------------------------------------------");
    println!("{} {} {}!", verb, report.names.len(), noun);

    if !report.names.is_empty() {
        println!();
        println!("{} the following {}:", verb, noun.to_lowercase());
        for name in &report.names {
            println!("{}", name);
        }
    }
}

fn write_json_report(path: &str, report: &SweepReport) -> anyhow::Result<()> {
    let json_content =
        serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file '{}'", path))?;
    file.write_all(json_content.as_bytes())
        .with_context(|| format!("Failed to write report to '{}'", path))?;
    Ok(())
}
