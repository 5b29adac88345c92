//! Component state for the resource table.
//!
//! The filter, paging and result bookkeeping lives in `TableState`; this
//! struct adds the timers that pace user input into it.

use common::views::table::TableState;

use crate::config::{ACTION_THROTTLE_MS, FILTER_DEBOUNCE_MS};
use crate::pacing::{Debounced, Throttled};

pub struct ResourceTableComponent {
    pub table: TableState,

    /// Search text on its way to the query.
    pub search: Debounced<String>,

    /// Tag text on its way to the query.
    pub tag: Debounced<String>,

    /// Requested page numbers.
    pub page_change: Throttled<u32>,

    /// Resource ids whose details were requested.
    pub detail_fetch: Throttled<String>,
}

impl ResourceTableComponent {
    pub fn new() -> Self {
        Self {
            table: TableState::default(),
            search: Debounced::new(FILTER_DEBOUNCE_MS),
            tag: Debounced::new(FILTER_DEBOUNCE_MS),
            page_change: Throttled::new(ACTION_THROTTLE_MS),
            detail_fetch: Throttled::new(ACTION_THROTTLE_MS),
        }
    }
}
