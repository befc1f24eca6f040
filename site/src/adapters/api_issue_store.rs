use crate::domain::envelope::{IssueEnvelope, IssueListEnvelope};
use crate::domain::{IssueCard, IssueDetail, IssueStore, IssueStoreError};
use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Reads issues from the content API.
///
/// `GET {base_url}/issues` lists issues, `GET {base_url}/issues/{slug}` fetches
/// one. A 404 on the latter means the issue does not exist; any other failure
/// is reported to the caller without retrying.
#[derive(Clone)]
pub struct ApiIssueStore {
    http_client: Client,
    base_url: String,
}

impl ApiIssueStore {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn issues_url(&self) -> String {
        format!("{}/issues", self.base_url)
    }

    fn issue_url(&self, slug: &str) -> String {
        format!("{}/issues/{}", self.base_url, urlencoding::encode(slug))
    }

    #[tracing::instrument(name = "Fetching the issue list from the content API", skip(self))]
    async fn fetch_issue_list(&self) -> Result<IssueListEnvelope, IssueStoreError> {
        let payload: Value = self
            .http_client
            .get(self.issues_url())
            .send()
            .await
            .context("Failed to reach the content API")?
            .error_for_status()
            .context("The content API failed to list issues")?
            .json()
            .await
            .context("The issue list response was not valid JSON")?;

        let envelope = IssueListEnvelope::classify(payload);
        tracing::debug!(envelope = envelope.shape(), "Decoded the issue list envelope");

        Ok(envelope)
    }
}

#[async_trait]
impl IssueStore for ApiIssueStore {
    async fn list_issues(&self) -> Result<Vec<IssueCard>, IssueStoreError> {
        let envelope = self.fetch_issue_list().await?;
        Ok(envelope.into_cards(Utc::now()))
    }

    #[tracing::instrument(name = "Fetching an issue from the content API", skip(self))]
    async fn get_issue(&self, slug: &str) -> Result<Option<IssueDetail>, IssueStoreError> {
        let response = self
            .http_client
            .get(self.issue_url(slug))
            .send()
            .await
            .context("Failed to reach the content API")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let payload: Value = response
            .error_for_status()
            .with_context(|| format!("The content API failed to return issue {}", slug))?
            .json()
            .await
            .with_context(|| format!("The response for issue {} was not valid JSON", slug))?;

        let issue = IssueEnvelope::classify(payload).into_issue();
        if issue.is_none() {
            tracing::warn!("The content API returned a record without a string slug and title");
        }

        Ok(issue.map(|issue| IssueDetail::from_backend(&issue, Utc::now())))
    }
}
