pub mod ai_recommendation;
pub mod error_alert;
pub mod resource_detail;
pub mod resource_table;
