/// Utility modules for the sanity checker
///
/// File reading at the boundary and console output formatting.

pub mod file_utils;
pub mod output_formatter;
