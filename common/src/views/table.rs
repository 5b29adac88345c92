//! State of the catalogue table: filters, paging, results and the detail
//! fetch guard.

use crate::model::learning_resource::{LearningResource, ResourceSummary};
use crate::model::page::ResourcePage;
use crate::pacing::{RequestSequence, RequestToken};
use crate::requests::ResourceQuery;

pub const PAGE_SIZE: u32 = 10;

pub const RESOURCE_TYPES: [&str; 3] = ["Article", "Tutorial", "Course"];
pub const DIFFICULTIES: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Everything the table view renders.
///
/// `search` and `tag` hold what the user typed; `applied_search` and
/// `applied_tag` hold the debounced values that actually reach the query.
#[derive(Debug)]
pub struct TableState {
    pub search: String,
    pub tag: String,
    pub applied_search: String,
    pub applied_tag: String,
    pub resource_type: String,
    pub difficulty: String,
    pub current_page: u32,
    pub page_size: u32,
    pub loading: bool,
    pub items: Vec<ResourceSummary>,
    pub total_pages: u32,
    pub total_items: u64,
    pub error: Option<String>,
    pub selected: Option<LearningResource>,
    /// Row whose details are being fetched. One at a time for the whole table.
    pub loading_resource_id: Option<String>,
    fetches: RequestSequence,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            tag: String::new(),
            applied_search: String::new(),
            applied_tag: String::new(),
            resource_type: String::new(),
            difficulty: String::new(),
            current_page: 1,
            page_size,
            loading: false,
            items: Vec::new(),
            total_pages: 0,
            total_items: 0,
            error: None,
            selected: None,
            loading_resource_id: None,
            fetches: RequestSequence::default(),
        }
    }

    pub fn query(&self) -> ResourceQuery {
        ResourceQuery {
            q: self.applied_search.clone(),
            resource_type: self.resource_type.clone(),
            difficulty: self.difficulty.clone(),
            tag: self.applied_tag.clone(),
            page: self.current_page,
            limit: self.page_size,
        }
    }

    /// Applies the debounced search text. Returns `true` when a refetch is due.
    pub fn apply_search(&mut self, value: String) -> bool {
        if self.applied_search == value {
            return false;
        }
        self.applied_search = value;
        self.current_page = 1;
        true
    }

    /// Applies the debounced tag text. Returns `true` when a refetch is due.
    pub fn apply_tag(&mut self, value: String) -> bool {
        if self.applied_tag == value {
            return false;
        }
        self.applied_tag = value;
        self.current_page = 1;
        true
    }

    pub fn set_resource_type(&mut self, value: String) -> bool {
        if self.resource_type == value {
            return false;
        }
        self.resource_type = value;
        self.current_page = 1;
        true
    }

    pub fn set_difficulty(&mut self, value: String) -> bool {
        if self.difficulty == value {
            return false;
        }
        self.difficulty = value;
        self.current_page = 1;
        true
    }

    /// Moves to `page` if it is a real page. Returns `true` when a refetch is due.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == 0 || page == self.current_page || page > self.total_pages.max(1) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Marks a listing request as outgoing and returns its token and query.
    pub fn begin_fetch(&mut self) -> (RequestToken, ResourceQuery) {
        self.loading = true;
        (self.fetches.issue(), self.query())
    }

    /// Applies a listing response. Superseded responses are dropped and
    /// `false` is returned.
    pub fn finish_fetch(&mut self, token: RequestToken, result: Result<ResourcePage, String>) -> bool {
        if !self.fetches.is_latest(token) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages;
                self.total_items = page.total_items;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.total_pages = 0;
                self.total_items = 0;
                self.error = Some(message);
            }
        }
        true
    }

    /// Claims the detail fetch slot for `id`. Refused while another row is
    /// still loading.
    pub fn begin_detail(&mut self, id: &str) -> bool {
        if self.loading_resource_id.is_some() {
            return false;
        }
        self.loading_resource_id = Some(id.to_string());
        true
    }

    pub fn finish_detail(&mut self, id: &str, result: Result<LearningResource, String>) {
        if self.loading_resource_id.as_deref() == Some(id) {
            self.loading_resource_id = None;
        }
        match result {
            Ok(resource) => self.selected = Some(resource),
            Err(message) => self.error = Some(message),
        }
    }

    pub fn is_detail_loading(&self) -> bool {
        self.loading_resource_id.is_some()
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn summary(&self) -> String {
        range_summary(self.current_page, self.page_size, self.total_items)
    }
}

/// "Showing a-b of n results" for a 1-based page, or "No results found".
pub fn range_summary(page: u32, page_size: u32, total_items: u64) -> String {
    if total_items == 0 {
        return "No results found".to_string();
    }
    let page = u64::from(page.max(1));
    let size = u64::from(page_size);
    let first = (page - 1) * size + 1;
    let last = (page * size).min(total_items);
    format!("Showing {}-{} of {} results", first, last, total_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::{Admission, Throttle};

    fn summary(id: &str) -> ResourceSummary {
        ResourceSummary {
            id: id.to_string(),
            title: format!("Resource {}", id),
            resource_type: "Article".to_string(),
            difficulty: "Beginner".to_string(),
            estimated_minutes: 10.0,
        }
    }

    fn resource(id: &str) -> LearningResource {
        LearningResource {
            id: id.to_string(),
            title: "Traits".to_string(),
            slug: "traits".to_string(),
            description: "Shared behaviour".to_string(),
            resource_type: "Tutorial".to_string(),
            difficulty: "Intermediate".to_string(),
            tags: vec!["rust".to_string()],
            estimated_minutes: 30.0,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: None,
        }
    }

    fn page(total_items: u64, total_pages: u32) -> ResourcePage {
        ResourcePage {
            items: vec![summary("a"), summary("b")],
            total_pages,
            total_items,
        }
    }

    #[test]
    fn empty_catalogue_reads_no_results() {
        let mut state = TableState::default();
        let (token, query) = state.begin_fetch();
        assert_eq!(query, ResourceQuery::default());
        state.finish_fetch(token, Ok(ResourcePage::default()));
        assert_eq!(state.summary(), "No results found");
    }

    #[test]
    fn middle_page_range() {
        let mut state = TableState::default();
        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Ok(page(25, 3)));
        assert!(state.go_to_page(2));
        assert_eq!(state.summary(), "Showing 11-20 of 25 results");
    }

    #[test]
    fn last_page_range_is_clamped() {
        assert_eq!(range_summary(3, 10, 25), "Showing 21-25 of 25 results");
        assert_eq!(range_summary(1, 10, 7), "Showing 1-7 of 7 results");
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let mut state = TableState::default();
        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Ok(page(40, 4)));
        state.go_to_page(3);

        assert!(state.set_difficulty("Advanced".to_string()));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.query().difficulty, "Advanced");

        state.go_to_page(2);
        assert!(state.apply_search("borrow".to_string()));
        assert_eq!(state.query().page, 1);
        assert_eq!(state.query().q, "borrow");
    }

    #[test]
    fn deferred_page_change_is_dropped_by_filter_change() {
        let mut state = TableState::default();
        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Ok(page(40, 4)));

        let mut pages = Throttle::new(500.0);
        let Admission::Run(next) = pages.call(0.0, state.current_page + 1) else {
            panic!("first page change should run immediately");
        };
        assert!(state.go_to_page(next));
        assert_eq!(
            pages.call(100.0, state.current_page + 1),
            Admission::Schedule { wait_ms: 400.0 }
        );

        assert!(state.set_difficulty("Advanced".to_string()));
        pages.cancel();
        assert_eq!(pages.fire(500.0), None);
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn unchanged_filter_does_not_refetch() {
        let mut state = TableState::default();
        assert!(state.apply_tag("rust".to_string()));
        assert!(!state.apply_tag("rust".to_string()));
        assert!(!state.set_resource_type(String::new()));
    }

    #[test]
    fn paging_bounds() {
        let mut state = TableState::default();
        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Ok(page(25, 3)));

        assert!(!state.has_previous());
        assert!(state.has_next());
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(4));
        assert!(state.go_to_page(3));
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn no_next_page_without_results() {
        let mut state = TableState::default();
        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Ok(ResourcePage::default()));
        assert!(!state.has_next());
        assert!(!state.go_to_page(2));
    }

    #[test]
    fn superseded_listing_is_discarded() {
        let mut state = TableState::default();
        let (stale, _) = state.begin_fetch();
        state.apply_search("rust".to_string());
        let (fresh, query) = state.begin_fetch();
        assert_eq!(query.q, "rust");

        assert!(state.finish_fetch(fresh, Ok(page(2, 1))));
        assert!(!state.finish_fetch(stale, Ok(ResourcePage::default())));
        assert_eq!(state.total_items, 2);
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_keeps_loading_until_latest_arrives() {
        let mut state = TableState::default();
        let (stale, _) = state.begin_fetch();
        let (fresh, _) = state.begin_fetch();
        state.finish_fetch(stale, Ok(page(2, 1)));
        assert!(state.loading);
        state.finish_fetch(fresh, Ok(page(5, 1)));
        assert!(!state.loading);
        assert_eq!(state.total_items, 5);
    }

    #[test]
    fn listing_failure_surfaces_error_and_stops_loading() {
        let mut state = TableState::default();
        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Ok(page(25, 3)));

        let (token, _) = state.begin_fetch();
        state.finish_fetch(token, Err("Server error. Please try again later.".to_string()));
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("Server error. Please try again later."));
        assert_eq!(state.summary(), "No results found");

        state.dismiss_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn one_detail_fetch_at_a_time() {
        let mut state = TableState::default();
        assert!(state.begin_detail("a"));
        assert!(state.is_detail_loading());
        assert!(!state.begin_detail("b"));

        state.finish_detail("a", Ok(resource("a")));
        assert!(!state.is_detail_loading());
        assert_eq!(state.selected.as_ref().map(|r| r.id.as_str()), Some("a"));

        state.close_detail();
        assert!(state.selected.is_none());
        assert!(state.begin_detail("b"));
    }

    #[test]
    fn detail_failure_releases_the_slot() {
        let mut state = TableState::default();
        state.begin_detail("gone");
        state.finish_detail("gone", Err("Resource not found.".to_string()));
        assert!(!state.is_detail_loading());
        assert!(state.selected.is_none());
        assert_eq!(state.error.as_deref(), Some("Resource not found."));
    }
}
