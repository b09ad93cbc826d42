//! Query filters for list endpoints.

/// A single filter value: a scalar or an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Bool(bool),
    /// Encoded as the key repeated once per element.
    List(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(v as i64)
    }
}

impl From<u32> for FilterValue {
    fn from(v: u32) -> Self {
        FilterValue::Int(v as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::List(v)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(v: &[&str]) -> Self {
        FilterValue::List(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered query-parameter mapping accepted by the list endpoints
/// (page, type, sort, ...).
///
/// Insertion order is preserved for deterministic URLs; the backend
/// treats the parameters as an unordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter. Chainable.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a percent-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        for (key, value) in &self.entries {
            let k = urlencoding::encode(key).into_owned();
            match value {
                FilterValue::Text(s) => params.push(format!("{}={}", k, urlencoding::encode(s))),
                FilterValue::Int(n) => params.push(format!("{}={}", k, n)),
                FilterValue::Bool(b) => params.push(format!("{}={}", k, b)),
                FilterValue::List(items) => {
                    for item in items {
                        params.push(format!("{}={}", k, urlencoding::encode(item)));
                    }
                }
            }
        }
        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_render_empty() {
        let f = Filters::new();
        assert!(f.is_empty());
        assert_eq!(f.to_query_string(), "");
    }

    #[test]
    fn test_scalar_filters_preserve_order() {
        let f = Filters::new().insert("type", "fire").insert("page", 2);
        assert_eq!(f.to_query_string(), "type=fire&page=2");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let f = Filters::new().insert("sort", "attack desc");
        assert_eq!(f.to_query_string(), "sort=attack%20desc");
    }

    #[test]
    fn test_list_values_repeat_the_key() {
        let f = Filters::new().insert("type", ["fire", "flying"].as_slice());
        assert_eq!(f.to_query_string(), "type=fire&type=flying");
    }

    #[test]
    fn test_bool_renders_lowercase() {
        let f = Filters::new().insert("legendary", true);
        assert_eq!(f.to_query_string(), "legendary=true");
    }
}
