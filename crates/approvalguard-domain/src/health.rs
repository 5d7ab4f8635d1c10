//! Per-prefix risk accumulation.

use approvalguard_types::PrefixHealth;
use std::collections::BTreeMap;

/// Prefix → health, ordered by prefix for deterministic output.
///
/// `merge` is associative and commutative on the counters, so maps built for disjoint
/// batches of files can be combined in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixHealthMap {
    entries: BTreeMap<String, PrefixHealth>,
}

impl PrefixHealthMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, prefix: &str, pattern: &str, risky: bool) {
        self.entries
            .entry(prefix.to_string())
            .or_insert_with(|| PrefixHealth::new(prefix))
            .record(pattern, risky);
    }

    pub fn merge(mut self, other: PrefixHealthMap) -> PrefixHealthMap {
        for (prefix, health) in other.entries {
            match self.entries.get_mut(&prefix) {
                Some(existing) => existing.absorb(health),
                None => {
                    self.entries.insert(prefix, health);
                }
            }
        }
        self
    }

    pub fn get(&self, prefix: &str) -> Option<&PrefixHealth> {
        self.entries.get(prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixHealth> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, PrefixHealth> {
        self.entries
    }
}
