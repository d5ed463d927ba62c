use std::io::{BufRead, Write};

use blocky::{Block, Goal, Move, Request};
use tracing::trace;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A trait to simplify writing bots.
pub trait Bot {
    /// Picks the next move for a player with the given goal and score.
    fn choose_move(&mut self, board: Block, goal: Goal, score: i64) -> Move;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        self.serve(std::io::stdin().lock(), std::io::stdout().lock())
    }

    /// Answers requests, one JSON document per line, until `Bye` or EOF.
    fn serve(&mut self, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the game has exited.
                break Ok(());
            }
            trace!(request = buf.trim_end(), "Received request");

            match serde_json::from_str::<Request>(buf.trim_end())? {
                Request::ChooseMove { board, goal, score } => {
                    let mv = self.choose_move(board.to_block()?, goal, score);
                    serde_json::to_writer(&mut output, &mv)?;
                }
                Request::Bye => break Ok(()),
            }
            writeln!(output)?;
            output.flush()?;
        }
    }
}

/// Logs to stderr, since stdout is reserved for responses.
pub fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
