use blocky::{Block, Goal, Move, StrategicPlayer};
use blocky_bot_utils::{initialize_logging, Bot};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// RNG seed for simulated smashes and candidate sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Only evaluate this many randomly chosen moves per turn
    #[arg(short, long)]
    difficulty: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, difficulty = ?args.difficulty);
    let mut player = StrategicPlayer::new(seed);
    if let Some(difficulty) = args.difficulty {
        player = player.with_difficulty(difficulty);
    }

    SmartBot { player }.run()
}

struct SmartBot {
    player: StrategicPlayer,
}

impl Bot for SmartBot {
    fn choose_move(&mut self, board: Block, goal: Goal, score: i64) -> Move {
        // The search compares against the goal's score on the board, without penalties
        let board_score = goal.score(&board);
        let mv = self.player.choose_move(&board, &goal, board_score);
        debug!(%goal, score, board_score, action = %mv.action, "Chose move");
        mv
    }
}
