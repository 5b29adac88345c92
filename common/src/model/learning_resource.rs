use serde::{Deserialize, Serialize};

/// A catalogued learning item as returned by `GET /resources/{id}`.
///
/// The backend owns these records; the client only keeps transient copies
/// for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// `Article`, `Tutorial` or `Course` in the current catalogue.
    pub resource_type: String,
    /// `Beginner`, `Intermediate` or `Advanced` in the current catalogue.
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "super::minutes")]
    pub estimated_minutes: f64,
    pub created_at: String,
    /// Older records come back without an update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The reduced row shape used by the paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub id: String,
    pub title: String,
    pub resource_type: String,
    pub difficulty: String,
    #[serde(default, deserialize_with = "super::minutes")]
    pub estimated_minutes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload() {
        let json = r#"{
            "id": "r-1",
            "title": "Ownership in Rust",
            "slug": "ownership-in-rust",
            "description": "Borrowing and moves",
            "resourceType": "Article",
            "difficulty": "Beginner",
            "tags": ["rust", "memory"],
            "estimatedMinutes": 15,
            "createdAt": "2024-01-02T10:00:00Z",
            "updatedAt": "2024-02-03T10:00:00Z"
        }"#;

        let resource: LearningResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.resource_type, "Article");
        assert_eq!(resource.estimated_minutes, 15.0);
        assert_eq!(resource.tags, vec!["rust", "memory"]);
        assert_eq!(resource.updated_at.as_deref(), Some("2024-02-03T10:00:00Z"));
    }

    #[test]
    fn tolerates_missing_tags_and_update_time() {
        let json = r#"{
            "id": "r-2",
            "title": "Async basics",
            "slug": "async-basics",
            "description": "",
            "resourceType": "Course",
            "difficulty": "Advanced",
            "estimatedMinutes": 240,
            "createdAt": "2024-01-02T10:00:00Z"
        }"#;

        let resource: LearningResource = serde_json::from_str(json).unwrap();
        assert!(resource.tags.is_empty());
        assert!(resource.updated_at.is_none());
    }

    #[test]
    fn fractional_and_null_minutes_do_not_fail_the_row() {
        let rows: Vec<ResourceSummary> = serde_json::from_str(
            r#"[
                {"id":"a","title":"A","resourceType":"Article","difficulty":"Beginner","estimatedMinutes":12.5},
                {"id":"b","title":"B","resourceType":"Course","difficulty":"Advanced","estimatedMinutes":null},
                {"id":"c","title":"C","resourceType":"Tutorial","difficulty":"Beginner"}
            ]"#,
        )
        .unwrap();
        let minutes: Vec<f64> = rows.iter().map(|r| r.estimated_minutes).collect();
        assert_eq!(minutes, vec![12.5, 0.0, 0.0]);
    }
}
