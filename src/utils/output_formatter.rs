/// Output formatter for check results
///
/// This module writes the human-readable report for each file: the clean
/// verdict, the list of warnings plus a quote, or the read failure.

use std::io::{self, Write};
use std::path::Path;

use colored::{ColoredString, Colorize};
use rand::Rng;

use crate::core::matcher::ScanResult;
use crate::error::SanityError;

/// Built-in quotes shown after a list of warnings
pub fn get_quotes() -> Vec<&'static str> {
    vec![
        "Understanding the code is optional, but suffering the consequences is mandatory.",
        "This code works on my machine™",
        "If it's stupid but it works, it's still stupid and you're lucky.",
        "You're not a real developer until you've debugged someone else's Stack Overflow code at 3 AM.",
    ]
}

/// Non-empty list of quotes to close a report with
#[derive(Debug, Clone)]
pub struct QuotePool {
    quotes: Vec<String>,
}

impl QuotePool {
    pub fn new<I, S>(quotes: I) -> Result<Self, SanityError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let quotes: Vec<String> = quotes.into_iter().map(Into::into).collect();
        if quotes.is_empty() {
            return Err(SanityError::EmptyQuotePool);
        }
        Ok(Self { quotes })
    }

    pub fn builtin() -> Self {
        Self {
            quotes: get_quotes().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Never true once constructed
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quote at `index`, wrapping around the pool
    fn nth_wrapping(&self, index: usize) -> &str {
        &self.quotes[index % self.quotes.len()]
    }
}

/// Picks the quote shown after a list of warnings
pub trait QuoteSelector {
    fn choose<'q>(&mut self, quotes: &'q QuotePool) -> &'q str;
}

/// Uniformly random quote selection
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> QuoteSelector for RandomSelector<R> {
    fn choose<'q>(&mut self, quotes: &'q QuotePool) -> &'q str {
        let index = self.rng.gen_range(0..quotes.len());
        quotes.nth_wrapping(index)
    }
}

/// Always picks the same position, wrapping around the pool
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl QuoteSelector for FixedSelector {
    fn choose<'q>(&mut self, quotes: &'q QuotePool) -> &'q str {
        quotes.nth_wrapping(self.0)
    }
}

/// Writes reports to any output sink
pub struct Reporter<W: Write, S: QuoteSelector> {
    out: W,
    selector: S,
    color: bool,
}

impl<W: Write, S: QuoteSelector> Reporter<W, S> {
    /// Create a reporter. With `color` off the output is plain text.
    pub fn new(out: W, selector: S, color: bool) -> Self {
        Self { out, selector, color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Print the tool banner
    pub fn banner(&mut self) -> io::Result<()> {
        let title = self.paint("🧠 Stack Overflow Sanity Checker", |s| s.bold());
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "=".repeat(40))
    }

    /// Report the messages that fired for one file
    pub fn report<M: AsRef<str>>(
        &mut self,
        filepath: &Path,
        matched: &[M],
        quotes: &QuotePool,
    ) -> io::Result<()> {
        if matched.is_empty() {
            let verdict = format!(
                "✅ {} looks... suspiciously clean. Did you actually write this?",
                filepath.display()
            );
            let verdict = self.paint(&verdict, |s| s.green());
            return writeln!(self.out, "{}", verdict);
        }

        let header = self.paint("🔍 Checking:", |s| s.cyan().bold());
        writeln!(self.out, "\n{} {}", header, filepath.display())?;
        writeln!(self.out, "Found {} potential issue(s):", matched.len())?;
        for issue in matched {
            let issue = self.paint(issue.as_ref(), |s| s.yellow());
            writeln!(self.out, "  ⚠️  {}", issue)?;
        }

        let quote = self.selector.choose(quotes);
        let label = self.paint("💡 Wisdom:", |s| s.magenta());
        writeln!(self.out, "\n{} {}", label, quote)
    }

    /// Report a file that could not be read
    pub fn report_failure(&mut self, error: &SanityError) -> io::Result<()> {
        let line = format!("Failed to read {}", error);
        let line = self.paint(&line, |s| s.red());
        writeln!(self.out, "{}", line)
    }

    /// Dispatch on the outcome of `check_file`
    pub fn report_result(&mut self, result: &ScanResult, quotes: &QuotePool) -> io::Result<()> {
        match &result.failure {
            Some(error) => self.report_failure(error),
            None => self.report(&result.filepath, &result.matched, quotes),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The two usage lines shown when no files are given
pub fn usage_lines(program: &str) -> [String; 2] {
    [
        format!("Usage: {} <file1.py> [file2.py ...]", program),
        format!("Example: {} my_questionable_code.py", program),
    ]
}
