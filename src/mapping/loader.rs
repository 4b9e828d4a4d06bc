// reading / writing mapping documents (JSON, TOON)
use std::error::Error as StdError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::mapping::{Mapping, MappingError};
use crate::core::types::RawIndex;
use crate::mapping::document::{DocumentFormat, MappingDocument};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mapping document '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    //also covers missing top-level fields and wrong value types
    #[error("malformed mapping document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOON mapping document: {0}")]
    Toon(#[source] Box<dyn StdError + Send + Sync>),

    #[error("index key '{key}' is not an integer")]
    InvalidIndexKey { key: String },

    //"1", "01" and "+1" all name raw index 1
    #[error("index key '{key}' repeats raw index {raw}")]
    DuplicateIndexKey { key: String, raw: RawIndex },
}

impl Mapping {
    /// Read a mapping document from `path`, picking the format from the
    /// extension (`.toon`, otherwise JSON).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        Self::load_with_format(path, DocumentFormat::from_path(path))
    }

    pub fn load_with_format(
        path: impl AsRef<Path>,
        format: DocumentFormat,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), ?format, "loading mapping document");

        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            DocumentFormat::Json => Self::from_json_str(&text),
            DocumentFormat::Toon => Self::from_toon_str(&text),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let doc: MappingDocument = serde_json::from_str(text)?;
        Self::from_document(doc)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let doc: MappingDocument = serde_json::from_reader(reader)?;
        Self::from_document(doc)
    }

    pub fn from_toon_str(text: &str) -> Result<Self, LoadError> {
        let doc: MappingDocument =
            toon_format::decode_default(text).map_err(|e| LoadError::Toon(Box::new(e)))?;
        Self::from_document(doc)
    }

    fn from_document(doc: MappingDocument) -> Result<Self, LoadError> {
        let mapping = Mapping::try_from(doc)?;
        debug!(
            len = mapping.len(),
            indexes = mapping.index_table().len(),
            ids = mapping.id_table().len(),
            groups = mapping.group_table().len(),
            "mapping built"
        );
        Ok(mapping)
    }

    pub fn to_json_string(&self) -> Result<String, MappingError> {
        serde_json::to_string_pretty(self).map_err(MappingError::EncodeJson)
    }

    /// Encode as TOON. The output is read back before it is returned, so a
    /// label the encoder cannot express (e.g. a non-leading `true` or `null`
    /// key) is an error here instead of an unloadable file later.
    pub fn to_toon_string(&self) -> Result<String, MappingError> {
        let doc = MappingDocument::from(self.clone());
        let text = toon_format::encode_default(&doc)
            .map_err(|e| MappingError::EncodeToon(Box::new(e)))?;

        let reloaded = Self::from_toon_str(&text)
            .map_err(|source| MappingError::ToonRoundTrip { source })?;
        if reloaded != *self {
            return Err(MappingError::ToonMismatch);
        }
        Ok(text)
    }
}
