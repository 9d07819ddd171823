/// Core pattern matcher
///
/// This file contains the scan over file contents and the per-file result that
/// the reporter consumes.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::rules::RuleSet;
use crate::error::SanityError;
use crate::utils::file_utils::read_file_content;

/// Return the message of every rule whose pattern occurs in `text`.
///
/// Each rule fires at most once and messages come back in rule order.
pub fn scan<'r>(text: &str, rules: &'r RuleSet) -> Vec<&'r str> {
    rules
        .iter()
        .filter(|rule| rule.is_match(text))
        .map(|rule| rule.message())
        .collect()
}

/// Outcome of checking one file
#[derive(Debug)]
pub struct ScanResult {
    /// Path as supplied by the caller
    pub filepath: PathBuf,

    /// Messages of the rules that fired, in rule order
    pub matched: Vec<String>,

    /// Set when the file could not be read
    pub failure: Option<SanityError>,
}

impl ScanResult {
    pub fn readable(&self) -> bool {
        !self.failure.as_ref().is_some_and(SanityError::is_unreadable)
    }

    pub fn is_clean(&self) -> bool {
        self.readable() && self.matched.is_empty()
    }
}

/// Read `file_path` and scan it against `rules`.
///
/// Read failures are recorded on the result instead of being returned, so one
/// bad path never stops the caller from checking the rest.
pub fn check_file(file_path: &Path, rules: &RuleSet) -> ScanResult {
    info!("Checking file: {}", file_path.display());

    match read_file_content(file_path) {
        Ok(content) => {
            let matched: Vec<String> = scan(&content, rules)
                .into_iter()
                .map(str::to_string)
                .collect();
            debug!("{} rule(s) fired for {}", matched.len(), file_path.display());
            ScanResult {
                filepath: file_path.to_path_buf(),
                matched,
                failure: None,
            }
        }
        Err(e) => {
            info!("Skipping unreadable file {}", e);
            ScanResult {
                filepath: file_path.to_path_buf(),
                matched: Vec::new(),
                failure: Some(e),
            }
        }
    }
}
