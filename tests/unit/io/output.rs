//! Tests for the placement listing

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use trominotile::io::output::{format_placement, write_placements, write_placements_to_path};
    use trominotile::spatial::{Placement, Position, Tromino};
    use trominotile::{TilingEngine, TilingError};

    fn tiled(size: i64, x: i32, y: i32) -> trominotile::Board {
        let mut engine = TilingEngine::with_board(size, Position::new(x, y)).unwrap();
        engine.tile().unwrap();
        engine.into_board()
    }

    // Tests one placement line lists center, orientation and squares
    // Verified by listing squares in reverse order
    #[test]
    fn test_format_placement() {
        let placement = Placement::new(Position::new(1, 1), Tromino::UpperRight);
        assert_eq!(
            format_placement(&placement),
            "(1, 1) -> UpperRight: (0, 1), (1, 1), (1, 0)"
        );
    }

    // Tests the listing has a header and one line per placement
    // Verified by skipping the header line
    #[test]
    fn test_write_placements() {
        let board = tiled(2, 0, 0);
        let mut buffer = Vec::new();
        write_placements(&board, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "board 2x2, deficient (0, 0), 1 trominoes\n(1, 1) -> UpperRight: (0, 1), (1, 1), (1, 0)\n"
        );
    }

    // Tests the file listing matches the in-memory listing
    // Verified by writing the header twice to files
    #[test]
    fn test_write_placements_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiling.txt");
        let board = tiled(8, 3, 6);

        write_placements_to_path(&board, &path).unwrap();

        let mut expected = Vec::new();
        write_placements(&board, &mut expected).unwrap();
        assert_eq!(fs::read(&path).unwrap(), expected);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 22);
    }

    // Tests unwritable destinations report the path
    // Verified by reporting the stdout placeholder path
    #[test]
    fn test_write_placements_to_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("tiling.txt");
        let board = tiled(2, 1, 1);

        match write_placements_to_path(&board, &path) {
            Err(TilingError::Output { path: reported, .. }) => {
                assert_eq!(reported.as_path(), Path::new(&path));
            }
            other => unreachable!("expected output error, got {other:?}"),
        }
    }
}
