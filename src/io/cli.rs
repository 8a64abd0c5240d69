//! Command-line interface for tiling a single deficient board

use crate::algorithm::board::Board;
use crate::algorithm::engine::TilingEngine;
use crate::io::configuration::{
    DEFAULT_LOG_FILTER, EXIT_INVALID_SIZE, EXIT_MISSING_ARGUMENTS, EXIT_OUT_OF_BOUNDS,
    EXIT_OUTPUT_FAILURE, EXIT_TILING_FAILURE, EXIT_UNPARSABLE_ARGUMENTS, VERBOSE_LOG_FILTER,
};
use crate::io::error::{Result, TilingError};
use crate::io::output::{write_placements, write_placements_to_path};
use crate::io::progress::ProgressReporter;
use crate::spatial::Position;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

const EXAMPLES: &str = "\
Examples:
  A 2x2 board with the bottom-left square missing:
    trominotile 2 0 0
  A 2x2 board with the top-right square missing:
    trominotile 2 1 1";

#[derive(Parser, Debug)]
#[command(name = "trominotile")]
#[command(
    author,
    version,
    about = "Tile a deficient power-of-two board with L-shaped trominoes",
    allow_negative_numbers = true,
    after_help = EXAMPLES
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Width and height of the board; a power of two
    #[arg(value_name = "SIZE")]
    pub size: i64,

    /// X coordinate of the missing square (0 is the left column)
    #[arg(value_name = "X")]
    pub x: i32,

    /// Y coordinate of the missing square (0 is the bottom row)
    #[arg(value_name = "Y")]
    pub y: i32,

    /// Write the placement listing to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Check the finished tiling covers every square exactly once
    #[arg(long)]
    pub verify: bool,
}

impl Cli {
    /// The requested missing square
    pub const fn deficient(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter applied when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Usage line followed by worked examples
pub fn usage_information() -> String {
    let usage = Cli::command().render_usage();
    format!("{usage}\n\n{EXAMPLES}")
}

/// Process exit code for an argument parsing failure
///
/// Help and version requests are not failures and map to 0.
pub const fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        ErrorKind::MissingRequiredArgument
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_MISSING_ARGUMENTS,
        _ => EXIT_UNPARSABLE_ARGUMENTS,
    }
}

/// Process exit code for a tiling failure
pub const fn exit_code(error: &TilingError) -> u8 {
    match error {
        TilingError::InvalidBoardSize { .. } => EXIT_INVALID_SIZE,
        TilingError::DeficientOutOfBounds { .. } => EXIT_OUT_OF_BOUNDS,
        TilingError::Output { .. } => EXIT_OUTPUT_FAILURE,
        TilingError::InvalidRegion { .. }
        | TilingError::PlacementOutOfBounds { .. }
        | TilingError::Overlap { .. }
        | TilingError::InvariantViolation { .. } => EXIT_TILING_FAILURE,
    }
}

/// Write a failure message, followed by usage text for bad arguments
///
/// # Errors
///
/// Returns any error raised by `writer`
pub fn report_failure<W: Write>(error: &TilingError, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{error}")?;

    if matches!(
        error,
        TilingError::InvalidBoardSize { .. } | TilingError::DeficientOutOfBounds { .. }
    ) {
        writeln!(writer, "{}", usage_information())?;
    }

    Ok(())
}

/// Runs one tiling according to CLI arguments
pub struct TilingRunner {
    cli: Cli,
}

impl TilingRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Tile the requested board and write the placement listing
    ///
    /// The listing goes to the `--output` file when given, otherwise to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board size or missing square is invalid
    /// - Tiling or `--verify` reports a defect
    /// - The listing cannot be written
    pub fn run(&self) -> Result<Board> {
        let board = self.tile()?;

        match self.cli.output {
            Some(ref path) => write_placements_to_path(&board, path)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                write_placements(&board, &mut stdout)?;
            }
        }

        Ok(board)
    }

    /// Tile the requested board without writing anything
    ///
    /// # Errors
    ///
    /// Same conditions as [`TilingRunner::run`], minus output failures
    pub fn tile(&self) -> Result<Board> {
        let start_time = Instant::now();
        let mut engine = TilingEngine::with_board(self.cli.size, self.cli.deficient())?;

        let progress = ProgressReporter::new(
            engine.board().expected_placements(),
            self.cli.should_show_progress(),
        );
        let result = engine.tile_with(|_| progress.record());
        progress.finish();
        result?;

        let board = engine.into_board();
        if self.cli.verify {
            board.verify()?;
            log::info!("verified tiling covers every square exactly once");
        }

        log::info!(
            "tiled {0}x{0} board with {1} trominoes in {2:?}",
            board.size(),
            board.placement_count(),
            start_time.elapsed()
        );

        Ok(board)
    }
}
