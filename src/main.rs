//! Tic-tac-toe engine CLI
//!
//! Plays games between minimax and random agents and prints every move.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tictactoe::{Agent, Engine, EngineConfig, GameRecord, Mark, State};

/// Move source selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentArg {
    Minimax,
    Random,
}

impl From<AgentArg> for Agent {
    fn from(arg: AgentArg) -> Self {
        match arg {
            AgentArg::Minimax => Agent::Minimax,
            AgentArg::Random => Agent::Random,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Play N x N tic-tac-toe with a minimax engine")]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Search depth in plies
    #[arg(long, default_value_t = 9)]
    depth: u32,

    /// Agent playing X
    #[arg(long = "x", value_enum, default_value_t = AgentArg::Minimax)]
    x_agent: AgentArg,

    /// Agent playing O
    #[arg(long = "o", value_enum, default_value_t = AgentArg::Minimax)]
    o_agent: AgentArg,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Start position, rows separated by '/', e.g. "X../.O./..."
    #[arg(long)]
    position: Option<String>,

    /// Number of games; more than one prints only the tally
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let (mut engine, start) = setup(&cli)?;

    if cli.games <= 1 {
        play_verbose(&mut engine, start)
    } else {
        play_many(&mut engine, start, cli.games)
    }
}

/// Validated engine and start position from the command line. A given
/// position fixes the board size and overrides `--size`.
fn setup(cli: &Cli) -> Result<(Engine, State)> {
    let position = cli
        .position
        .as_deref()
        .map(|position| {
            position
                .parse::<State>()
                .with_context(|| format!("invalid --position '{position}'"))
        })
        .transpose()?;
    let size = position.as_ref().map_or(cli.size, State::size);

    let mut config = EngineConfig::default()
        .with_size(size)
        .with_depth(cli.depth)
        .with_agents(cli.x_agent.into(), cli.o_agent.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let engine = Engine::new(config)?;

    let start = position.unwrap_or_else(|| engine.new_game());
    Ok((engine, start))
}

fn play_verbose(engine: &mut Engine, start: State) -> Result<()> {
    println!("{start}\n");
    let record = engine.play_observed(start, |mv, state| {
        println!("{mv}");
        println!("{state}\n");
    })?;
    print_result(&record);
    Ok(())
}

fn play_many(engine: &mut Engine, start: State, games: u32) -> Result<()> {
    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for game in 1..=games {
        let record = engine
            .play(start.clone())
            .with_context(|| format!("game {game} failed"))?;
        match record.outcome.winner {
            Mark::X => x_wins += 1,
            Mark::O => o_wins += 1,
            Mark::Empty => draws += 1,
        }
    }
    println!("games: {games}  X wins: {x_wins}  O wins: {o_wins}  draws: {draws}");
    Ok(())
}

fn print_result(record: &GameRecord) {
    if record.outcome.is_draw() {
        println!("GAME OVER: draw after {} moves", record.moves.len());
    } else {
        println!(
            "GAME OVER: {} wins after {} moves (score {})",
            record.outcome.winner,
            record.moves.len(),
            record.outcome.score()
        );
    }
}
