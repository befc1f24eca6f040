pub mod archive;
mod backend_issue;
pub mod envelope;
mod issue_card;
mod issue_detail;
mod issue_store;
pub mod published_date;
mod reading_time;

pub use crate::domain::backend_issue::{BackendIssue, DEFAULT_TOPIC};
pub use crate::domain::issue_card::IssueCard;
pub use crate::domain::issue_detail::{clean_bullet, IssueDetail, Section};
pub use crate::domain::issue_store::{IssueStore, IssueStoreError};
pub use crate::domain::reading_time::{estimate_minutes, WORDS_PER_MINUTE};
