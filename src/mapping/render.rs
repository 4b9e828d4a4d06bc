// turning resolved indexes into text for input templates
use thiserror::Error;

use crate::core::batch::BatchResolutionError;
use crate::core::mapping::Mapping;
use crate::core::types::{Index, Query};

/// Numbering expected by the consumer of rendered indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

impl IndexBase {
    fn offset(self) -> Index {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Batch(#[from] BatchResolutionError),

    #[error("index {index} cannot be shifted to base {base:?}")]
    Overflow { index: Index, base: IndexBase },
}

pub fn render_indexes(
    indexes: &[Index],
    separator: &str,
    base: IndexBase,
) -> Result<String, RenderError> {
    let offset = base.offset();
    let shifted = indexes
        .iter()
        .map(|&index| {
            index
                .checked_add(offset)
                .map(|shifted| shifted.to_string())
                .ok_or(RenderError::Overflow { index, base })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(shifted.join(separator))
}

impl Mapping {
    /// `resolve_batch` followed by [`render_indexes`].
    pub fn render_batch(
        &self,
        queries: &[Query],
        separator: &str,
        base: IndexBase,
    ) -> Result<String, RenderError> {
        let indexes = self.resolve_batch(queries)?;
        render_indexes(&indexes, separator, base)
    }
}
