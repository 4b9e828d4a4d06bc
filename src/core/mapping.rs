// raw index / id / group lookups
use std::collections::HashMap;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::core::batch::BatchResolutionError;
use crate::core::types::{Index, Query, RawIndex};
use crate::mapping::document::MappingDocument;
use crate::mapping::loader::LoadError;
use crate::mapping::render::RenderError;

/// Immutable lookup tables turning queries into canonical indexes.
///
/// Built once (through [`Mapping::new`] or [`Mapping::load`]) and only read
/// afterwards. Name queries check `id_table` before `group_table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MappingDocument", into = "MappingDocument")]
pub struct Mapping {
    length: i64,
    index_table: HashMap<RawIndex, Index>,
    id_table: HashMap<String, Index>,
    group_table: HashMap<String, Vec<Index>>,
}

#[derive(Debug, Error)]
pub enum MappingError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Batch(#[from] BatchResolutionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to encode mapping as JSON: {0}")]
    EncodeJson(#[source] serde_json::Error),

    #[error("failed to encode mapping as TOON: {0}")]
    EncodeToon(#[source] Box<dyn StdError + Send + Sync>),

    //encoder produced text the decoder rejects
    #[error("TOON encoding of mapping does not load back: {source}")]
    ToonRoundTrip { source: LoadError },

    #[error("TOON encoding of mapping loads back as a different mapping")]
    ToonMismatch,
}

impl Mapping {
    //no checks that values stay below `length`, that is on whoever wrote the tables
    pub fn new(
        length: i64,
        index_table: HashMap<RawIndex, Index>,
        id_table: HashMap<String, Index>,
        group_table: HashMap<String, Vec<Index>>,
    ) -> Self {
        Self {
            length,
            index_table,
            id_table,
            group_table,
        }
    }

    /// Declared number of canonical indexes, taken as written (may be negative).
    pub fn len(&self) -> i64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn index_table(&self) -> &HashMap<RawIndex, Index> {
        &self.index_table
    }

    pub fn id_table(&self) -> &HashMap<String, Index> {
        &self.id_table
    }

    pub fn group_table(&self) -> &HashMap<String, Vec<Index>> {
        &self.group_table
    }

    pub fn resolve_index(&self, raw: RawIndex) -> Option<Index> {
        self.index_table.get(&raw).copied()
    }

    pub fn resolve_group(&self, label: &str) -> Option<&[Index]> {
        self.group_table.get(label).map(Vec::as_slice)
    }

    pub fn resolve_id(&self, label: &str) -> Option<Index> {
        self.id_table.get(label).copied()
    }

    /// Id lookup wins; groups are only consulted when no id has that label.
    pub fn resolve_name(&self, label: &str) -> Option<Vec<Index>> {
        match self.resolve_id(label) {
            Some(index) => Some(vec![index]),
            None => self.resolve_group(label).map(<[Index]>::to_vec),
        }
    }

    pub fn resolve_query(&self, query: &Query) -> Option<Vec<Index>> {
        let resolved = match query {
            Query::Index(raw) => self.resolve_index(*raw).map(|index| vec![index]),
            Query::Name(label) => self.resolve_name(label),
        };
        trace!(%query, found = resolved.is_some(), "resolved query");
        resolved
    }

    pub fn contains_name(&self, label: &str) -> bool {
        self.id_table.contains_key(label) || self.group_table.contains_key(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mapping {
        Mapping::new(
            10,
            HashMap::from([(5, 9), (0, 3)]),
            HashMap::from([("a".to_string(), 1), ("shared".to_string(), 7)]),
            HashMap::from([
                ("g".to_string(), vec![2, 3]),
                ("shared".to_string(), vec![4, 5, 6]),
                ("reversed".to_string(), vec![8, 1, 0]),
            ]),
        )
    }

    #[test]
    fn resolve_index_hits_and_misses() {
        let m = sample();

        assert_eq!(m.resolve_index(5), Some(9));
        assert_eq!(m.resolve_index(0), Some(3));
        assert_eq!(m.resolve_index(9), None);
        assert_eq!(m.resolve_index(-1), None);
    }

    #[test]
    fn id_lookup_takes_precedence_over_group_with_same_label() {
        let m = sample();

        assert_eq!(m.resolve_name("shared"), Some(vec![7]));
        assert_eq!(m.resolve_name("a"), Some(vec![1]));

        //the group is still reachable directly
        assert_eq!(m.resolve_group("shared"), Some(&[4, 5, 6][..]));
    }

    #[test]
    fn group_only_label_keeps_source_order() {
        let m = sample();

        assert_eq!(m.resolve_name("reversed"), Some(vec![8, 1, 0]));
        assert_eq!(m.resolve_name("g"), Some(vec![2, 3]));
        assert_eq!(m.resolve_id("g"), None);
        assert_eq!(m.resolve_name("nope"), None);
    }

    #[test]
    fn resolve_query_dispatches_on_variant() {
        let m = sample();

        assert_eq!(m.resolve_query(&Query::from(5)), Some(vec![9]));
        assert_eq!(m.resolve_query(&Query::from(6)), None);
        assert_eq!(m.resolve_query(&Query::from("g")), Some(vec![2, 3]));

        //"5" is a name, not an index
        assert_eq!(m.resolve_query(&Query::from("5")), None);
    }

    #[test]
    fn repeated_lookups_leave_mapping_untouched() {
        let m = sample();
        let before = m.clone();

        for _ in 0..3 {
            assert_eq!(m.resolve_query(&Query::from("shared")), Some(vec![7]));
            assert_eq!(m.resolve_query(&Query::from(0)), Some(vec![3]));
        }

        assert_eq!(m, before);
        assert_eq!(m.len(), 10);
        assert!(!m.is_empty());
        assert!(m.contains_name("g"));
        assert!(!m.contains_name("missing"));
    }

    #[test]
    fn mapping_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mapping>();
    }
}
