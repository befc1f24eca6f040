mod api_issue_store;
mod static_issue_store;

pub use crate::adapters::api_issue_store::ApiIssueStore;
pub use crate::adapters::static_issue_store::StaticIssueStore;
