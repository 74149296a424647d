//! Bombing-variant engine command line
//!
//! Reads snapshots as JSON, prints recommendations and evaluations, and can
//! let the engine play against itself. `RUST_LOG=debug` shows each decision.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use bombchess::{apply, AIEngine, AiLevel, EngineConfig, EngineError, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "bombchess", about = "Bombing-variant four-in-a-row engine")]
struct Cli {
    /// JSON engine configuration (depth, weights)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Difficulty preset; ignored when --depth is given
    #[arg(long, value_enum, global = true)]
    level: Option<LevelOpt>,

    /// Search depth in plies (1-6)
    #[arg(long, global = true)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the opening snapshot
    New,
    /// Recommend an action for the player on move
    Best {
        /// Snapshot JSON file, or "-" for stdin
        #[arg(default_value = "-")]
        snapshot: String,
    },
    /// Static evaluation for the player on move
    Eval {
        /// Snapshot JSON file, or "-" for stdin
        #[arg(default_value = "-")]
        snapshot: String,
    },
    /// Let the engine play both sides from the opening
    Selfplay {
        /// Maximum number of plies
        #[arg(long, default_value_t = 200)]
        plies: u32,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LevelOpt {
    Beginner,
    Expert,
    Master,
}

impl From<LevelOpt> for AiLevel {
    fn from(level: LevelOpt) -> Self {
        match level {
            LevelOpt::Beginner => AiLevel::Beginner,
            LevelOpt::Expert => AiLevel::Expert,
            LevelOpt::Master => AiLevel::Master,
        }
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig, EngineError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(level) = cli.level {
        config.depth = AiLevel::from(level).depth();
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    config.validate()?;
    Ok(config)
}

fn read_snapshot(source: &str) -> Result<Snapshot, EngineError> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };
    Snapshot::from_json(&text)
}

fn selfplay(engine: &AIEngine, plies: u32) -> Result<(), EngineError> {
    let mut snapshot = Snapshot::new_game();

    for ply in 1..=plies {
        let result = engine.suggest(&snapshot);
        let Some(mv) = result.best_move else {
            info!("ply {ply}: no action available for {}", snapshot.current_player);
            break;
        };
        info!("ply {ply}: {} {:?} -> {}", snapshot.current_player, mv.kind, mv.reasoning);
        snapshot = apply(&snapshot, mv.action());
        if snapshot.is_game_over() {
            break;
        }
    }

    println!("{}", snapshot.board);
    match bombchess::winner(&snapshot) {
        Some(player) => println!("winner: {player}"),
        None => println!("no winner ({:?})", snapshot.phase),
    }
    println!("{}", snapshot.to_json()?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), EngineError> {
    let config = load_config(&cli)?;
    let engine = AIEngine::with_config(config);

    match cli.command {
        Command::New => println!("{}", Snapshot::new_game().to_json()?),
        Command::Best { snapshot } => {
            let snapshot = read_snapshot(&snapshot)?;
            let result = engine.suggest(&snapshot);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Eval { snapshot } => {
            let snapshot = read_snapshot(&snapshot)?;
            println!("{}", engine.quick_evaluate(&snapshot));
        }
        Command::Selfplay { plies } => selfplay(&engine, plies)?,
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
