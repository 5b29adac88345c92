//! Outgoing request shapes for the catalogue API.

use serde::{Serialize, Serializer};

/// Filters and paging for `GET /resources`.
///
/// Empty strings mean "no filter" but are still sent, so the backend always
/// sees the full parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub q: String,
    pub resource_type: String,
    pub difficulty: String,
    pub tag: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            resource_type: String::new(),
            difficulty: String::new(),
            tag: String::new(),
            page: 1,
            limit: 10,
        }
    }
}

impl ResourceQuery {
    /// Query string pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("resourceType", self.resource_type.clone()),
            ("difficulty", self.difficulty.clone()),
            ("tag", self.tag.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Body of `POST /ai/recommend-path`.
///
/// `max_items` is passed through as typed by the user: zero, negative and
/// NaN values reach the backend unchanged (NaN serialises as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub goal: String,
    #[serde(serialize_with = "serialize_number")]
    pub max_items: f64,
}

/// Writes whole finite values as JSON integers (`3`, not `3.0`), the way a
/// browser would send them. Everything else goes out as a float.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let whole = value.is_finite()
        && value.fract() == 0.0
        && *value >= i64::MIN as f64
        && *value < i64::MAX as f64;
    if whole {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Reads the max-items field the way a numeric input coerces text: blank is
/// zero, anything unparsable is NaN.
pub fn parse_max_items(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_keep_empty_filters() {
        let query = ResourceQuery {
            q: "rust".to_string(),
            page: 3,
            ..ResourceQuery::default()
        };
        let pairs = query.to_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["q", "resourceType", "difficulty", "tag", "page", "limit"]);
        assert_eq!(pairs[0].1, "rust");
        assert_eq!(pairs[1].1, "");
        assert_eq!(pairs[4].1, "3");
        assert_eq!(pairs[5].1, "10");
    }

    #[test]
    fn recommend_body_uses_camel_case() {
        let body = RecommendRequest {
            goal: "Learn Rust".to_string(),
            max_items: 3.0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"goal": "Learn Rust", "maxItems": 3}));
    }

    #[test]
    fn whole_max_items_are_sent_as_integers() {
        let body = |max_items| RecommendRequest {
            goal: "g".to_string(),
            max_items,
        };
        assert_eq!(serde_json::to_string(&body(3.0)).unwrap(), r#"{"goal":"g","maxItems":3}"#);
        assert_eq!(serde_json::to_string(&body(-2.0)).unwrap(), r#"{"goal":"g","maxItems":-2}"#);
        assert_eq!(serde_json::to_string(&body(2.5)).unwrap(), r#"{"goal":"g","maxItems":2.5}"#);
    }

    #[test]
    fn nan_max_items_serialises_as_null() {
        let body = RecommendRequest {
            goal: String::new(),
            max_items: f64::NAN,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"goal":"","maxItems":null}"#);
    }

    #[test]
    fn max_items_coercion() {
        assert_eq!(parse_max_items(""), 0.0);
        assert_eq!(parse_max_items(" 4 "), 4.0);
        assert_eq!(parse_max_items("-2"), -2.0);
        assert!(parse_max_items("many").is_nan());
    }
}
