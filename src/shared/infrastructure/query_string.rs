use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryStringError {
    #[error("query string is empty")]
    Empty,

    #[error("query pair {0:?} has no '='")]
    MissingSeparator(String),
}

/// Decoded query parameters in first-seen key order.
///
/// Every `&`-separated piece must contain an `=`; a single malformed piece
/// rejects the whole query. A repeated key keeps its first position and
/// takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn parse(raw: &str) -> Result<Self, QueryStringError> {
        if raw.is_empty() {
            return Err(QueryStringError::Empty);
        }
        let mut pairs: Vec<(String, String)> = Vec::new();
        for piece in raw.split('&') {
            if !piece.contains('=') {
                return Err(QueryStringError::MissingSeparator(piece.to_string()));
            }
            let Some((key, value)) = form_urlencoded::parse(piece.as_bytes()).next() else {
                return Err(QueryStringError::MissingSeparator(piece.to_string()));
            };
            match pairs.iter_mut().find(|(k, _)| k.as_str() == &*key) {
                Some(existing) => existing.1 = value.into_owned(),
                None => pairs.push((key.into_owned(), value.into_owned())),
            }
        }
        Ok(Self { pairs })
    }

    /// `None` when the query is absent or malformed.
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        match QueryPairs::parse(raw?) {
            Ok(pairs) => Some(pairs),
            Err(error) => {
                tracing::debug!(%error, "ignoring malformed query string");
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
