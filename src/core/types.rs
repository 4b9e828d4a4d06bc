// shared id types + query input
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical index, the final value every resolution produces.
pub type Index = i64;

/// Index as written by the caller, before the raw -> canonical remap.
pub type RawIndex = i64;

/// One lookup request: either a raw index or a label (id or group name).
///
/// Serialized untagged, so a JSON batch looks like `["a", "g", 5]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    Index(RawIndex),
    Name(String),
}

impl Query {
    /// Reads a query typed as text: integer-like input (optional sign, digits)
    /// is an index, everything else is a name.
    pub fn parse(input: &str) -> Self {
        match input.parse::<RawIndex>() {
            Ok(raw) => Query::Index(raw),
            Err(_) => Query::Name(input.to_string()),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Query::Index(_))
    }
}

impl From<RawIndex> for Query {
    fn from(raw: RawIndex) -> Self {
        Query::Index(raw)
    }
}

impl From<&str> for Query {
    fn from(name: &str) -> Self {
        Query::Name(name.to_string())
    }
}

impl From<String> for Query {
    fn from(name: String) -> Self {
        Query::Name(name)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Index(raw) => write!(f, "{raw}"),
            Query::Name(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_integer_like_text_from_names() {
        assert_eq!(Query::parse("12"), Query::Index(12));
        assert_eq!(Query::parse("-3"), Query::Index(-3));
        assert_eq!(Query::parse("+7"), Query::Index(7));
        assert_eq!(Query::parse("Ru"), Query::Name("Ru".to_string()));

        //whitespace and mixed text stay names
        assert_eq!(Query::parse(" 4"), Query::Name(" 4".to_string()));
        assert_eq!(Query::parse("4a"), Query::Name("4a".to_string()));
        assert_eq!(Query::parse(""), Query::Name(String::new()));
    }

    #[test]
    fn untagged_serde_reads_mixed_batches() {
        let batch: Vec<Query> = serde_json::from_str(r#"["a", "g", 5]"#).unwrap();
        assert_eq!(
            batch,
            vec![Query::from("a"), Query::from("g"), Query::from(5)]
        );
        assert_eq!(serde_json::to_string(&batch).unwrap(), r#"["a","g",5]"#);
    }

    #[test]
    fn display_shows_the_raw_value() {
        assert_eq!(Query::from(999).to_string(), "999");
        assert_eq!(Query::from("missing").to_string(), "missing");
        assert!(Query::from(1).is_index());
        assert!(!Query::from("1").is_index());
    }
}
