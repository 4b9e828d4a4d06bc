// on-disk shape of a mapping: {"len", "indexes", "ids", "groups"}
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::mapping::Mapping;
use crate::core::types::{Index, RawIndex};
use crate::mapping::loader::LoadError;

/// Serialization formats a mapping document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Toon,
}

impl DocumentFormat {
    //anything that is not `.toon` is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toon") => DocumentFormat::Toon,
            _ => DocumentFormat::Json,
        }
    }
}

/// Document as written by producers. `indexes` keys are strings because most
/// formats only allow string keys; they become integers in [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    pub len: i64,
    pub indexes: BTreeMap<String, Index>,
    pub ids: BTreeMap<String, Index>,
    pub groups: BTreeMap<String, Vec<Index>>,
}

impl TryFrom<MappingDocument> for Mapping {
    type Error = LoadError;

    fn try_from(doc: MappingDocument) -> Result<Self, Self::Error> {
        let mut index_table = HashMap::with_capacity(doc.indexes.len());
        for (key, index) in doc.indexes {
            let raw = match key.parse::<RawIndex>() {
                Ok(raw) => raw,
                Err(_) => return Err(LoadError::InvalidIndexKey { key }),
            };
            //distinct spellings of one integer must not silently overwrite each other
            if index_table.insert(raw, index).is_some() {
                return Err(LoadError::DuplicateIndexKey { key, raw });
            }
        }

        Ok(Mapping::new(
            doc.len,
            index_table,
            doc.ids.into_iter().collect(),
            doc.groups.into_iter().collect(),
        ))
    }
}

impl From<Mapping> for MappingDocument {
    fn from(mapping: Mapping) -> Self {
        MappingDocument {
            len: mapping.len(),
            indexes: mapping
                .index_table()
                .iter()
                .map(|(raw, index)| (raw.to_string(), *index))
                .collect(),
            ids: mapping
                .id_table()
                .iter()
                .map(|(id, index)| (id.clone(), *index))
                .collect(),
            groups: mapping
                .group_table()
                .iter()
                .map(|(label, indexes)| (label.clone(), indexes.clone()))
                .collect(),
        }
    }
}
