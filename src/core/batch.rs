// all-or-nothing batch resolution
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::mapping::Mapping;
use crate::core::types::{Index, Query};

/// Every query of a batch that had no match, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("names or indexes not found in mapping: {}", join_queries(.failed))]
pub struct BatchResolutionError {
    failed: Vec<Query>,
}

impl BatchResolutionError {
    pub fn new(failed: Vec<Query>) -> Self {
        Self { failed }
    }

    pub fn failed(&self) -> &[Query] {
        &self.failed
    }

    pub fn into_failed(self) -> Vec<Query> {
        self.failed
    }
}

fn join_queries(queries: &[Query]) -> String {
    queries
        .iter()
        .map(Query::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Mapping {
    /// Resolve every query and concatenate the results in input order.
    ///
    /// The whole batch is walked even after a miss, so the error names all
    /// unresolved queries at once. No partial result is returned and no
    /// deduplication happens.
    pub fn resolve_batch(&self, queries: &[Query]) -> Result<Vec<Index>, BatchResolutionError> {
        let mut resolved = Vec::with_capacity(queries.len());
        let mut failed = Vec::new();

        for query in queries {
            match self.resolve_query(query) {
                Some(indexes) => resolved.extend(indexes),
                None => failed.push(query.clone()),
            }
        }

        if !failed.is_empty() {
            warn!(failed = failed.len(), total = queries.len(), "batch resolution failed");
            return Err(BatchResolutionError::new(failed));
        }

        debug!(queries = queries.len(), indexes = resolved.len(), "batch resolved");
        Ok(resolved)
    }
}
