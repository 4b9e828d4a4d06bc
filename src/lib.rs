//! Static index mapping: load a `{len, indexes, ids, groups}` document once and
//! resolve integer or name queries into canonical indexes.
//!
//! ```no_run
//! use index_mapping::{Mapping, Query};
//!
//! let mapping = Mapping::load("mapping.json")?;
//! let indexes = mapping.resolve_batch(&[Query::from("metal"), Query::from(5)])?;
//! # Ok::<(), index_mapping::MappingError>(())
//! ```

pub mod core;
pub mod mapping;

pub use crate::core::batch::BatchResolutionError;
pub use crate::core::mapping::{Mapping, MappingError};
pub use crate::core::types::{Index, Query, RawIndex};
pub use crate::mapping::document::{DocumentFormat, MappingDocument};
pub use crate::mapping::loader::LoadError;
pub use crate::mapping::render::{IndexBase, RenderError, render_indexes};
