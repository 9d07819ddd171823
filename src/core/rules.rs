/// Rule definitions for the sanity checker
///
/// This module contains the regex patterns used to detect code that was most
/// likely pasted from Stack Overflow without being read first, along with the
/// warning attached to each one.

use log::error;
use regex::Regex;

use crate::error::SanityError;

/// Built-in (pattern, message) table, in reporting order.
pub fn get_patterns() -> Vec<(&'static str, &'static str)> {
    vec![
        (r"\beval\b", "Found 'eval' - Congratulations, you've installed a backdoor!"),
        (r"\bexec\b", "Found 'exec' - Your code now runs arbitrary code. What could go wrong?"),
        (r"\bimport\s*\*", "Wildcard import detected - Namespace pollution incoming!"),
        (r"\bassert\s*True", "Asserting True - The programmer's equivalent of 'This statement is false'"),
        (r"\bwhile\s*True:", "Infinite loop found - Your CPU sends its regards"),
        (r"\bfrom\s+os\s+import\s+system", "Direct system calls - Because security is someone else's problem"),
        (r"\b\d{4}-\d{2}-\d{2}\b", "Hardcoded date - This code expires like milk"),
        (r"# TODO:", "TODO comment - Future you will hate present you"),
        (r"\bpass\b", "'pass' statement - The programming equivalent of shrugging"),
    ]
}

/// Helper function to compile pattern
pub fn compile_pattern(pattern: &str) -> Result<Regex, SanityError> {
    Regex::new(pattern).map_err(|source| {
        error!("Error compiling pattern {}: {}", pattern, source);
        SanityError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })
}

/// A single code smell detector
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    message: String,
}

impl Rule {
    /// Compile a rule from a pattern and the warning it raises
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, SanityError> {
        Ok(Self {
            pattern: compile_pattern(pattern)?,
            message: message.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the pattern occurs anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered, non-empty collection of rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, keeping the given order.
    ///
    /// # Errors
    ///
    /// `EmptyRuleSet` when `rules` is empty.
    pub fn new(rules: Vec<Rule>) -> Result<Self, SanityError> {
        if rules.is_empty() {
            return Err(SanityError::EmptyRuleSet);
        }
        Ok(Self { rules })
    }

    /// Compile a rule set from (pattern, message) pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, SanityError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, message)| Rule::new(pattern, message))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// The built-in rule table
    pub fn builtin() -> Result<Self, SanityError> {
        Self::from_pairs(get_patterns())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Never true once constructed
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
