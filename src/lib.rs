/// Stack Sanity - A Stack Overflow sanity checker
///
/// This library scans source files for patterns that usually mean code was
/// copy-pasted without being understood, and reports them with some
/// well-earned wisdom.

// Re-export core modules
pub mod core;
pub mod error;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::SanityConfig;
pub use crate::core::matcher::{check_file, scan, ScanResult};
pub use crate::core::rules::{Rule, RuleSet};
pub use crate::error::SanityError;
pub use crate::utils::output_formatter::{
    FixedSelector, QuotePool, QuoteSelector, RandomSelector, Reporter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a piece of text against the built-in rules
///
/// This is a convenience function for simple use cases.
pub fn check_text(text: &str) -> Result<Vec<String>, SanityError> {
    let rules = RuleSet::builtin()?;
    Ok(scan(text, &rules).into_iter().map(str::to_string).collect())
}

/// Library configuration
pub mod config {
    use crate::core::rules::RuleSet;
    use crate::error::SanityError;
    use crate::utils::output_formatter::QuotePool;

    /// Immutable rules and quotes, built once and shared by reference
    #[derive(Debug, Clone)]
    pub struct SanityConfig {
        pub rules: RuleSet,
        pub quotes: QuotePool,
    }

    impl SanityConfig {
        pub fn new(rules: RuleSet, quotes: QuotePool) -> Self {
            Self { rules, quotes }
        }

        /// Create default configuration
        pub fn builtin() -> Result<Self, SanityError> {
            Ok(Self::new(RuleSet::builtin()?, QuotePool::builtin()))
        }
    }
}

/// Command-line application functionality
pub mod app {
    use std::io::{self, Write};
    use std::path::Path;

    use log::info;

    use crate::config::SanityConfig;
    use crate::core::matcher::check_file;
    use crate::utils::output_formatter::{QuoteSelector, Reporter};

    /// Totals for one run over the supplied files
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct RunSummary {
        pub files_checked: usize,
        pub clean: usize,
        pub unreadable: usize,
        pub total_issues: usize,
    }

    /// Check every file in order and report each one
    ///
    /// # Arguments
    ///
    /// * `file_paths` - Paths to check, processed in the order given
    /// * `config` - Rules and quotes
    /// * `reporter` - Where the per-file reports go
    ///
    /// # Returns
    ///
    /// Totals for the run. Unreadable files are reported and counted, never
    /// returned as errors; only a failing output sink is.
    pub fn run<P, W, S>(
        file_paths: &[P],
        config: &SanityConfig,
        reporter: &mut Reporter<W, S>,
    ) -> io::Result<RunSummary>
    where
        P: AsRef<Path>,
        W: Write,
        S: QuoteSelector,
    {
        let mut summary = RunSummary::default();

        for file_path in file_paths {
            let result = check_file(file_path.as_ref(), &config.rules);
            reporter.report_result(&result, &config.quotes)?;

            summary.files_checked += 1;
            summary.total_issues += result.matched.len();
            if result.is_clean() {
                summary.clean += 1;
            }
            if !result.readable() {
                summary.unreadable += 1;
            }
        }

        info!(
            "Checked {} file(s), {} clean, {} unreadable, {} issue(s)",
            summary.files_checked, summary.clean, summary.unreadable, summary.total_issues
        );

        Ok(summary)
    }
}
