// Duplicate-item detection for owned items

use blades_config::{default_distinct_types, default_exempt_types, DuplicateRules};
use blades_models::ItemRecord;
use tracing::debug;

/// Type-based uniqueness rules for an owner's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePolicy {
    distinct_types: Vec<String>,
    exempt_types: Vec<String>,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::new(default_distinct_types(), default_exempt_types())
    }
}

impl From<&DuplicateRules> for DuplicatePolicy {
    fn from(rules: &DuplicateRules) -> Self {
        Self::new(rules.distinct_types.clone(), rules.exempt_types.clone())
    }
}

/// Equality where an absent value matches nothing, not even another absent value
fn same(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

impl DuplicatePolicy {
    pub fn new(distinct_types: Vec<String>, exempt_types: Vec<String>) -> Self {
        Self { distinct_types, exempt_types }
    }

    pub fn is_distinct(&self, item_type: Option<&str>) -> bool {
        item_type.map_or(false, |t| self.distinct_types.iter().any(|d| d == t))
    }

    pub fn is_exempt(&self, item_type: Option<&str>) -> bool {
        item_type.map_or(false, |t| self.exempt_types.iter().any(|e| e == t))
    }

    /// Ids of the `existing` items that adding `candidate` should replace.
    ///
    /// An item is a duplicate when it shares the candidate's name, or when the
    /// candidate's type is distinct and the item has that same type. Nothing
    /// is reported for exempt candidate types, and the candidate's own id is
    /// never reported. Order follows `existing`.
    pub fn compute_duplicates(&self, candidate: &ItemRecord, existing: &[ItemRecord]) -> Vec<String> {
        if self.is_exempt(candidate.type_str()) {
            return Vec::new();
        }

        let must_be_distinct = self.is_distinct(candidate.type_str());

        let dupes: Vec<String> = existing
            .iter()
            .filter(|item| item.id != candidate.id)
            .filter(|item| {
                let same_name = same(item.name_str(), candidate.name_str());
                let same_type = same(item.type_str(), candidate.type_str());
                same_name || (must_be_distinct && same_type)
            })
            .map(|item| item.id.clone())
            .collect();

        debug!(
            "compute_duplicates: candidate_type={:?}, existing_count={}, duplicate_count={}",
            candidate.item_type,
            existing.len(),
            dupes.len()
        );

        dupes
    }

    /// The collection after adding `candidate`: duplicates dropped, candidate appended.
    pub fn merge_candidate(&self, existing: &[ItemRecord], candidate: ItemRecord) -> Vec<ItemRecord> {
        let dupes = self.compute_duplicates(&candidate, existing);
        let mut merged: Vec<ItemRecord> = existing
            .iter()
            .filter(|item| !dupes.contains(&item.id))
            .cloned()
            .collect();
        merged.push(candidate);
        merged
    }
}

/// [`DuplicatePolicy::compute_duplicates`] with the stock type rules
pub fn compute_duplicates(candidate: &ItemRecord, existing: &[ItemRecord]) -> Vec<String> {
    DuplicatePolicy::default().compute_duplicates(candidate, existing)
}
