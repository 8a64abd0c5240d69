//! Tests for command-line parsing, exit codes and the tiling runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use trominotile::TilingError;
    use trominotile::io::cli::{
        Cli, TilingRunner, exit_code, parse_exit_code, report_failure, usage_information,
    };
    use trominotile::io::configuration::{
        DEFAULT_LOG_FILTER, EXIT_INVALID_SIZE, EXIT_MISSING_ARGUMENTS, EXIT_OUT_OF_BOUNDS,
        EXIT_OUTPUT_FAILURE, EXIT_TILING_FAILURE, EXIT_UNPARSABLE_ARGUMENTS, VERBOSE_LOG_FILTER,
    };
    use trominotile::io::error::invariant_violation;
    use trominotile::spatial::Position;

    fn parse_failure_code(args: &[&str]) -> u8 {
        match Cli::try_parse_from(args) {
            Ok(cli) => unreachable!("expected a parse failure, got {cli:?}"),
            Err(error) => parse_exit_code(error.kind()),
        }
    }

    // Tests CLI parsing with only the three positional arguments
    // Verified by changing flag defaults
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "8", "3", "5"]);

        assert_eq!(cli.size, 8);
        assert_eq!(cli.deficient(), Position::new(3, 5));
        assert_eq!(cli.output, None);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(!cli.verify);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), DEFAULT_LOG_FILTER);
    }

    // Tests CLI parsing with every flag
    // Verified by removing the short flag definitions
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "16", "0", "15", "-o", "out.txt", "-q", "-v", "--verify",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), VERBOSE_LOG_FILTER);
        assert!(cli.verify);
    }

    // Tests negative numbers reach validation instead of being read as flags
    // Verified by removing allow_negative_numbers
    #[test]
    fn test_cli_accepts_negative_numbers() {
        let cli = Cli::parse_from(["program", "-4", "-1", "0"]);
        assert_eq!(cli.size, -4);
        assert_eq!(cli.deficient(), Position::new(-1, 0));
    }

    // Tests missing arguments map to their own exit code
    // Verified by mapping every parse error to the unparsable code
    #[test]
    fn test_missing_arguments_exit_code() {
        assert_eq!(parse_failure_code(&["program"]), EXIT_MISSING_ARGUMENTS);
        assert_eq!(parse_failure_code(&["program", "4", "1"]), EXIT_MISSING_ARGUMENTS);
    }

    // Tests non-integer arguments map to the unparsable exit code
    // Verified by mapping invalid values to the missing code
    #[test]
    fn test_unparsable_arguments_exit_code() {
        assert_eq!(
            parse_failure_code(&["program", "four", "1", "1"]),
            EXIT_UNPARSABLE_ARGUMENTS
        );
        assert_eq!(
            parse_failure_code(&["program", "4", "1.5", "1"]),
            EXIT_UNPARSABLE_ARGUMENTS
        );
    }

    // Tests help requests are not failures
    // Verified by mapping help to the missing arguments code
    #[test]
    fn test_help_exit_code() {
        assert_eq!(parse_failure_code(&["program", "--help"]), 0);
    }

    // Tests tiling failures map to their exit codes
    // Verified by swapping the size and bounds codes
    #[test]
    fn test_tiling_exit_codes() {
        let size = TilingError::InvalidBoardSize {
            size: 3,
            reason: String::new(),
        };
        let bounds = TilingError::DeficientOutOfBounds {
            position: Position::new(9, 9),
            size: 8,
        };
        let output: TilingError = std::io::Error::other("closed").into();

        assert_eq!(exit_code(&size), EXIT_INVALID_SIZE);
        assert_eq!(exit_code(&bounds), EXIT_OUT_OF_BOUNDS);
        assert_eq!(exit_code(&output), EXIT_OUTPUT_FAILURE);
        assert_eq!(
            exit_code(&invariant_violation("verify", &"gap")),
            EXIT_TILING_FAILURE
        );
    }

    // Tests input failures are followed by usage text and defects are not
    // Verified by always appending usage text
    #[test]
    fn test_report_failure() {
        let mut buffer = Vec::new();
        let size = TilingError::InvalidBoardSize {
            size: 3,
            reason: "board size must be a positive power of two".to_string(),
        };
        report_failure(&size, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("power of two"));
        assert!(text.contains("Usage"));
        assert!(text.contains("trominotile 2 1 1"));

        let mut buffer = Vec::new();
        report_failure(&invariant_violation("verify", &"gap"), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("Usage"));
    }

    // Tests usage text lists positional arguments and examples
    // Verified by omitting the examples block
    #[test]
    fn test_usage_information() {
        let usage = usage_information();
        assert!(usage.contains("<SIZE> <X> <Y>"));
        assert!(usage.contains("trominotile 2 0 0"));
    }

    // Tests the runner tiles and verifies a valid board
    // Verified by skipping the tiling step
    #[test]
    fn test_runner_tile() {
        let cli = Cli::parse_from(["program", "16", "7", "9", "--quiet", "--verify"]);
        let board = TilingRunner::new(cli).tile().unwrap();

        assert_eq!(board.placement_count(), 85);
        assert!(board.is_complete());
    }

    // Tests the runner surfaces validation failures
    // Verified by clamping the deficient square onto the board
    #[test]
    fn test_runner_rejects_invalid_input() {
        let cli = Cli::parse_from(["program", "6", "0", "0", "-q"]);
        assert!(matches!(
            TilingRunner::new(cli).tile(),
            Err(TilingError::InvalidBoardSize { .. })
        ));

        let cli = Cli::parse_from(["program", "8", "0", "8", "-q"]);
        assert!(matches!(
            TilingRunner::new(cli).tile(),
            Err(TilingError::DeficientOutOfBounds { .. })
        ));
    }

    // Tests the runner writes the listing to the requested file
    // Verified by writing to stdout regardless of --output
    #[test]
    fn test_runner_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiling.txt");
        let path_arg = path.to_str().unwrap();

        let cli = Cli::parse_from(["program", "4", "3", "3", "-q", "-o", path_arg]);
        let board = TilingRunner::new(cli).run().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("board 4x4, deficient (3, 3), 5 trominoes")
        );
        assert_eq!(lines.count(), board.placement_count());
    }

    // Tests an unwritable output path is an output failure
    // Verified by ignoring file creation errors
    #[test]
    fn test_runner_output_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("tiling.txt");
        let path_arg = path.to_str().unwrap();

        let cli = Cli::parse_from(["program", "2", "0", "0", "-q", "-o", path_arg]);
        let error = TilingRunner::new(cli).run().unwrap_err();
        assert_eq!(exit_code(&error), EXIT_OUTPUT_FAILURE);
    }
}
