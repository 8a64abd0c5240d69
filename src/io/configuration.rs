//! Board limits, exit codes and runtime display defaults

/// Smallest accepted board side length
pub const MIN_BOARD_SIZE: i64 = 1;

// Occupancy index grows with the square of the side
/// Largest accepted board side length
pub const MAX_BOARD_SIZE: i64 = 1024;

// Process exit codes, one per failure kind
/// Board size or a deficient coordinate was not supplied
pub const EXIT_MISSING_ARGUMENTS: u8 = 1;
/// An argument could not be parsed as an integer
pub const EXIT_UNPARSABLE_ARGUMENTS: u8 = 2;
/// Board size is not a positive power of two within limits
pub const EXIT_INVALID_SIZE: u8 = 3;
/// Deficient square lies outside the board
pub const EXIT_OUT_OF_BOUNDS: u8 = 4;
/// Tiling or verification reported an internal defect
pub const EXIT_TILING_FAILURE: u8 = 5;
/// Placement listing could not be written
pub const EXIT_OUTPUT_FAILURE: u8 = 6;

// Progress bar display settings
/// Boards with fewer placements than this finish without a progress bar
pub const PROGRESS_THRESHOLD: usize = 10_000;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
