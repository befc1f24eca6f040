use crate::domain::{IssueCard, IssueDetail};
use crate::utils::error_chain_fmt;
use async_trait::async_trait;

#[derive(thiserror::Error)]
pub enum IssueStoreError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for IssueStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Where the site gets its issues from.
///
/// View models are built fresh on every call; nothing is cached between
/// requests.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Every valid issue, in the order the source lists them.
    async fn list_issues(&self) -> Result<Vec<IssueCard>, IssueStoreError>;

    /// Exact-match lookup. `Ok(None)` when no valid issue has this slug.
    async fn get_issue(&self, slug: &str) -> Result<Option<IssueDetail>, IssueStoreError>;
}
