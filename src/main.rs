#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_sim::{
    driver::{play_game, run_series, FirstValidPolicy, Policy, RandomPolicy},
    init_logging, GameConfig, GameEngine, DEFAULT_COLS, DEFAULT_PLAYERS, DEFAULT_ROWS,
    DEFAULT_SEED,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about = "Simulate Battleship games between scripted players", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PolicyKind {
    /// Uniformly random legal shot.
    Random,
    /// Lowest-index legal shot.
    First,
}

#[cfg(feature = "std")]
impl PolicyKind {
    fn build(self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy),
            PolicyKind::First => Box::new(FirstValidPolicy),
        }
    }
}

#[derive(clap::Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct GridArgs {
    #[arg(long, default_value_t = DEFAULT_PLAYERS)]
    players: usize,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a single game from a fixed placement seed.
    Play {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, default_value_t = DEFAULT_SEED, help = "Placement seed (e.g., --seed 1999)")]
        seed: u64,
        #[arg(long, help = "Seed for shot selection; random when omitted")]
        policy_seed: Option<u64>,
        #[arg(long, help = "Print the final grids")]
        show: bool,
    },
    /// Play many games, re-seeding each one from a driver seed.
    Series {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 12, help = "Driver seed for reproducible series")]
        seed: u64,
        #[arg(long, help = "Print the summaries as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            grid,
            seed,
            policy_seed,
            show,
        } => {
            let config = GameConfig::new(grid.players, grid.rows, grid.cols, seed);
            let mut engine = GameEngine::from_config(&config)?;
            let mut rng = match policy_seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let mut policy = grid.policy.build();
            let summary = play_game(&mut engine, policy.as_mut(), &mut rng)?;
            println!(
                "Game over in {} turns, winner player {} (shots: {:?})",
                summary.steps, summary.winner, summary.shots
            );
            if show {
                for (i, g) in engine.state().encoded_grids().iter().enumerate() {
                    println!("grid {}:\n{}\n", i, g);
                }
            }
        }
        Commands::Series {
            grid,
            games,
            seed,
            json,
        } => {
            let config = GameConfig::new(grid.players, grid.rows, grid.cols, seed);
            let mut policy = grid.policy.build();
            let summaries = run_series(&config, games, policy.as_mut(), seed)?;
            if json {
                println!("{}", serde_json::to_string(&summaries)?);
            } else {
                for (i, s) in summaries.iter().enumerate() {
                    println!(
                        "game {}: seed {:?}, {} turns, winner player {}",
                        i, s.seed, s.steps, s.winner
                    );
                }
            }
            info!("played {} games", summaries.len());
        }
    }
    Ok(())
}
