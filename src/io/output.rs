//! Plain-text placement listing handed to renderers

use crate::algorithm::board::Board;
use crate::io::error::{Result, TilingError};
use crate::spatial::Placement;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Format one placement as `(cx, cy) -> Variant: (a), (b), (c)`
pub fn format_placement(placement: &Placement) -> String {
    let [a, b, c] = placement.squares();
    format!("{placement}: {a}, {b}, {c}")
}

/// Write the board header and every placement in center order
///
/// # Errors
///
/// Returns any error raised by `writer`
pub fn write_placements<W: Write>(board: &Board, writer: &mut W) -> std::io::Result<()> {
    writeln!(
        writer,
        "board {0}x{0}, deficient {1}, {2} trominoes",
        board.size(),
        board.deficient(),
        board.placement_count()
    )?;

    for placement in board.iter() {
        writeln!(writer, "{}", format_placement(&placement))?;
    }

    writer.flush()
}

/// Write the listing to a file, replacing any existing content
///
/// # Errors
///
/// Returns [`TilingError::Output`] if the file cannot be created or written
pub fn write_placements_to_path(board: &Board, path: &Path) -> Result<()> {
    let wrap = |source| TilingError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_placements(board, &mut writer).map_err(wrap)
}
