#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use naval_combat::prelude::*;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play computer against computer and report the results.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: usize,
        #[arg(long, help = "Print one JSON object per game")]
        json: bool,
        #[arg(long, help = "Print both boards when a game ends")]
        show_boards: bool,
    },
    /// Place a random fleet and print the board.
    Fleet {
        #[arg(long, help = "Fix RNG seed for reproducible placement")]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
#[cfg(feature = "std")]
struct GameReport {
    game: usize,
    winner: Side,
    first_shots: usize,
    second_shots: usize,
    first_sunk: usize,
    second_sunk: usize,
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Plays the current game to the end. The turn cap only guards against a
/// broken engine; a normal game needs at most two full boards of shots.
#[cfg(feature = "std")]
fn play_out(game: &mut Game) -> anyhow::Result<Side> {
    let limit = 2 * GRID_CELLS;
    for _ in 0..limit {
        if let Some(winner) = game.winner() {
            return Ok(winner);
        }
        game.play_computer_turn()?;
    }
    game.winner()
        .ok_or_else(|| anyhow::anyhow!("game did not finish within {} shots", limit))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim {
            seed,
            games,
            json,
            show_boards,
        } => {
            if let Some(s) = seed {
                log::info!("using fixed seed {} (games are reproducible)", s);
            }
            let mut game = Game::new(GameMode::ComputerVsComputer, seeded_rng(seed))?;
            for n in 1..=games {
                if n > 1 {
                    game.new_game()?;
                }
                let winner = play_out(&mut game)?;
                let report = GameReport {
                    game: n,
                    winner,
                    first_shots: game.shots_fired(Side::First),
                    second_shots: game.shots_fired(Side::Second),
                    first_sunk: game.board(Side::First).sunk_count(),
                    second_sunk: game.board(Side::Second).sunk_count(),
                };
                if json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!(
                        "game {}: {:?} wins ({} vs {} shots)",
                        report.game, winner, report.first_shots, report.second_shots
                    );
                }
                if show_boards {
                    println!("First:\n{:?}", game.board(Side::First));
                    println!("Second:\n{:?}", game.board(Side::Second));
                }
            }
        }
        Commands::Fleet { seed } => {
            let mut rng = seeded_rng(seed);
            let mut board = Board::new();
            AiPlayer::new()
                .place_fleet(&mut rng, &mut board)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{:?}", board);
        }
    }
    Ok(())
}
