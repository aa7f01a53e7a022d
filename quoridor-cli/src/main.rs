// --- File: quoridor-room-server/quoridor-cli/src/main.rs ---

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use quoridor_core::{GameMode, PlayerType};
use quoridor_server::{scheduler, BotWorker};
use quoridor_store::{InMemoryRoomStore, MoveRecord, RoomStatus, RoomStore};

#[derive(Parser)]
#[command(name = "quoridor-cli", about = "Seeds rooms, drives bot-vs-bot games, and runs the worker loop standalone")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drive one or more bot-vs-bot games to completion by ticking the
    /// worker directly, then optionally export each room's move history.
    Simulate {
        #[arg(long, default_value_t = 1)]
        rooms: usize,
        #[arg(long, default_value = "two", value_parser = parse_game_mode)]
        mode: GameMode,
        /// Comma-separated bot tiers, one per seat (e.g. "medium,hard" for two-player).
        #[arg(long, default_value = "medium,hard")]
        bots: String,
        /// Room seed; omit for a fresh random seed per room.
        #[arg(long)]
        seed: Option<String>,
        /// Directory to write one <room-code>.csv move-history file per finished room.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Safety cap on worker ticks, mirroring the teacher's move-limit draw rule.
        #[arg(long, default_value_t = 400)]
        max_ticks: usize,
    },
    /// Seed a single bot-vs-bot room and drive it via the standalone,
    /// long-lived `BotWorker::run` poll loop rather than manual ticking.
    Worker {
        #[arg(long, default_value = "two", value_parser = parse_game_mode)]
        mode: GameMode,
        #[arg(long, default_value = "medium,hard")]
        bots: String,
        #[arg(long)]
        seed: Option<String>,
    },
}

fn parse_game_mode(s: &str) -> Result<GameMode, String> {
    match s {
        "two" | "2" => Ok(GameMode::TwoPlayer),
        "four" | "4" => Ok(GameMode::FourPlayer),
        other => Err(format!("unknown game mode '{other}', expected \"two\" or \"four\"")),
    }
}

fn parse_bot_types(spec: &str, expected: usize) -> Result<Vec<PlayerType>> {
    let types: Vec<PlayerType> = spec
        .split(',')
        .map(|tier| match tier.trim() {
            "easy" => Ok(PlayerType::BotEasy),
            "medium" => Ok(PlayerType::BotMedium),
            "hard" => Ok(PlayerType::BotHard),
            other => bail!("unknown bot tier '{other}', expected easy/medium/hard"),
        })
        .collect::<Result<_>>()?;
    if types.len() != expected {
        bail!("expected {expected} bot tiers for this game mode, got {}", types.len());
    }
    Ok(types)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate { rooms, mode, bots, seed, out, max_ticks } => simulate(rooms, mode, &bots, seed, out, max_ticks).await,
        Command::Worker { mode, bots, seed } => run_worker_loop(mode, &bots, seed).await,
    }
}

async fn simulate(room_count: usize, mode: GameMode, bots: &str, seed: Option<String>, out: Option<PathBuf>, max_ticks: usize) -> Result<()> {
    let bot_types = parse_bot_types(bots, mode.seats().len())?;
    let store = InMemoryRoomStore::new();

    let mut codes = Vec::with_capacity(room_count);
    for i in 0..room_count {
        let room_seed = seed.clone().map(|s| format!("{s}-{i}"));
        let code = store.create_bot_room(mode, &bot_types, room_seed).await?;
        scheduler::on_commit(&store, &code).await?;
        codes.push(code);
    }

    let store = Arc::new(store);
    let worker = BotWorker::new(store.clone());

    let bar = ProgressBar::new(room_count as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} rooms finished ({elapsed})").unwrap());

    for _ in 0..max_ticks {
        worker.tick().await;
        let finished = count_finished(&store, &codes).await;
        bar.set_position(finished as u64);
        if finished == codes.len() {
            break;
        }
    }
    bar.finish();

    let finished = count_finished(&store, &codes).await;
    if finished < codes.len() {
        tracing::warn!(finished, total = codes.len(), "max_ticks reached before every room finished");
    }

    if let Some(dir) = out {
        std::fs::create_dir_all(&dir).context("creating move-history output directory")?;
        for code in &codes {
            let room = store.load_room(code).await?;
            if room.status != RoomStatus::Finished {
                continue;
            }
            export_move_history(&dir, code, &room.moves)?;
        }
        println!("move history written to {}", dir.display());
    }

    for code in &codes {
        let room = store.load_room(code).await?;
        println!("room {code}: winner={:?} turn_number={}", room.winner, room.turn_number);
    }

    Ok(())
}

async fn count_finished(store: &InMemoryRoomStore, codes: &[String]) -> usize {
    let mut n = 0;
    for code in codes {
        if let Ok(room) = store.load_room(code).await {
            if room.status == RoomStatus::Finished {
                n += 1;
            }
        }
    }
    n
}

fn export_move_history(dir: &std::path::Path, code: &str, moves: &[MoveRecord]) -> Result<()> {
    let path = dir.join(format!("{code}.csv"));
    let mut writer = csv::Writer::from_path(&path).with_context(|| format!("opening {}", path.display()))?;
    writer.write_record(["player_id", "from_row", "from_col", "to_row", "to_col", "created_at"])?;
    for mv in moves {
        writer.write_record([
            mv.player_id.to_string(),
            mv.from.0.to_string(),
            mv.from.1.to_string(),
            mv.to.0.to_string(),
            mv.to.1.to_string(),
            mv.created_at.to_rfc3339(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Seeds a single bot room and drives it via `BotWorker::run`'s own poll
/// loop, demonstrating the standalone worker rather than manual ticking.
async fn run_worker_loop(mode: GameMode, bots: &str, seed: Option<String>) -> Result<()> {
    let bot_types = parse_bot_types(bots, mode.seats().len())?;
    let store = Arc::new(InMemoryRoomStore::new());
    let code = store.create_bot_room(mode, &bot_types, seed).await?;
    scheduler::on_commit(store.as_ref(), &code).await?;

    let worker = BotWorker::new(store.clone());
    let handle = tokio::spawn(async move { worker.run().await });

    loop {
        let room = store.load_room(&code).await?;
        if room.status == RoomStatus::Finished {
            println!("room {code}: winner={:?} turn_number={}", room.winner, room.turn_number);
            break;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    handle.abort();
    Ok(())
}
