/// Board state with validated placement and deficiency lookup
pub mod board;
/// Recursive divide-and-conquer tiling
pub mod engine;
/// Board size and deficient square validation
pub mod validation;
