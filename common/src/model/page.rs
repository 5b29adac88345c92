use serde::{Deserialize, Serialize};

use super::learning_resource::ResourceSummary;

/// One page of the catalogue listing. Recomputed by the backend for every
/// query; pages are never merged on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePage {
    pub items: Vec<ResourceSummary>,
    pub total_pages: u32,
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_empty_page() {
        let page: ResourcePage =
            serde_json::from_str(r#"{"items":[],"totalItems":0,"totalPages":0}"#).unwrap();
        assert_eq!(page, ResourcePage::default());
    }
}
