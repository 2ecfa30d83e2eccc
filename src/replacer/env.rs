//! Environment-variable replacers

use std::collections::{BTreeMap, HashMap};

use crate::domain::{ReplacementPair, ReplacementSet};

/// Name → value lookup used by the environment source.
pub trait EnvLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Split a comma-separated list of names, trimming whitespace and discarding
/// empty segments.
pub fn parse_names(names: &str) -> Vec<&str> {
    names.split(',').map(str::trim).filter(|name| !name.is_empty()).collect()
}

/// Build pairs from the named variables, in list order.
///
/// Missing (or non-Unicode) variables are warned about and skipped.
pub fn load_environment(names: &str, env: &dyn EnvLookup) -> ReplacementSet {
    parse_names(names)
        .into_iter()
        .filter_map(|name| match env.lookup(name) {
            Some(value) => Some(ReplacementPair::new(name, value)),
            None => {
                tracing::warn!("Environment variable '{}' not found.", name);
                None
            }
        })
        .collect()
}
