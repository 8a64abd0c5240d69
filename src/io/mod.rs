/// Command-line parsing and the tiling runner
pub mod cli;
/// Board limits, exit codes and display defaults
pub mod configuration;
/// Error types for construction, placement and tiling
pub mod error;
/// Placement listing output
pub mod output;
/// Progress display for large tilings
pub mod progress;
