use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use othello_engine::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use othello_player::othello::{get_board_size, Othello};
use othello_player::Settings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/// Play Othello (Reversi) on the command line.
#[derive(Parser)]
#[command(about, arg_required_else_help = false, disable_version_flag = true)]
struct Args {
    /// Optional board size (4..10)
    size: Option<usize>,

    /// Enable autoplay mode with both players controlled by computer
    #[arg(short, long, conflicts_with = "default")]
    autoplay: bool,

    /// Only print hash to check the result (implies `autoplay` and `test`)
    #[arg(short, long)]
    check: bool,

    /// Play with default settings
    #[arg(short, long)]
    default: bool,

    /// Show game log at the end
    #[arg(short, long)]
    log: bool,

    /// Hide disk placement hints
    #[arg(short, long)]
    no_helpers: bool,

    /// Seed for the computer's random moves
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable test mode with deterministic computer moves
    #[arg(short, long)]
    test: bool,

    /// Print version and exit
    #[arg(short, long)]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.version {
        println!("Othello Rust {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let check_mode = args.check;
    if !check_mode {
        println!("{}", "OTHELLO GAME - RUST".green().bold());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let board_size = if let Some(size) = args.size {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            anyhow::bail!("Unsupported board size: {}", size)
        }
        if !check_mode {
            println!("Using board size: {}", size);
        }
        size
    } else if args.autoplay || args.default || check_mode {
        DEFAULT_BOARD_SIZE
    } else {
        get_board_size(&mut input)?
    };

    let settings = Settings {
        board_size,
        autoplay_mode: args.autoplay || check_mode,
        check_mode,
        show_helpers: !args.no_helpers,
        show_log: args.log,
        test_mode: args.test || check_mode,
        use_defaults: args.default,
    };
    log::debug!("{}", settings);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Othello::new(settings, rng, input)?.play()?;
    Ok(())
}
