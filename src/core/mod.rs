/// Core module for the sanity checker
///
/// This module contains the rule table and the matcher that runs file
/// contents against it.

pub mod matcher;
pub mod rules;
