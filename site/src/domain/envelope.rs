//! Decoding of the content API's response envelopes.
//!
//! The API does not commit to a single envelope across deployments, so every
//! accepted shape gets its own variant. Anything else is `Unrecognized` and
//! decodes to nothing rather than failing.

use crate::domain::{BackendIssue, IssueCard};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Envelope of the issue list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueListEnvelope {
    /// `[...]`
    Bare(Vec<Value>),
    /// `{"data": [...]}`
    Data(Vec<Value>),
    /// `{"issues": [...]}`
    Issues(Vec<Value>),
    /// `{"data": {"issues": [...]}}`
    NestedData(Vec<Value>),
    Unrecognized,
}

impl IssueListEnvelope {
    /// The first matching shape wins, in the order the variants are declared.
    pub fn classify(payload: Value) -> Self {
        let mut body = match payload {
            Value::Array(records) => return Self::Bare(records),
            Value::Object(body) => body,
            _ => return Self::Unrecognized,
        };

        let data = match body.remove("data") {
            Some(Value::Array(records)) => return Self::Data(records),
            other => other,
        };

        if let Some(Value::Array(records)) = body.remove("issues") {
            return Self::Issues(records);
        }

        match data {
            Some(Value::Object(mut data)) => match data.remove("issues") {
                Some(Value::Array(records)) => Self::NestedData(records),
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bare(_) => "array",
            Self::Data(_) => "data",
            Self::Issues(_) => "issues",
            Self::NestedData(_) => "data.issues",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::Bare(records)
            | Self::Data(records)
            | Self::Issues(records)
            | Self::NestedData(records) => records,
            Self::Unrecognized => Vec::new(),
        }
    }

    /// Cards in envelope order.
    ///
    /// When every record is already card-shaped the list is taken as is.
    /// Otherwise each valid record is mapped from its backend fields.
    pub fn into_cards(self, now: DateTime<Utc>) -> Vec<IssueCard> {
        let shape = self.shape();
        let records = self.into_records();

        if !records.is_empty() {
            let cards: Option<Vec<IssueCard>> =
                records.iter().map(IssueCard::from_card_value).collect();
            if let Some(cards) = cards {
                tracing::debug!(envelope = shape, "The issue list is already card-shaped");
                return cards;
            }
        }

        backend_issues(shape, records)
            .iter()
            .map(|issue| IssueCard::from_backend(issue, now))
            .collect()
    }

    /// Valid records in envelope order. Invalid ones are dropped.
    pub fn into_issues(self) -> Vec<BackendIssue> {
        let shape = self.shape();
        backend_issues(shape, self.into_records())
    }
}

fn backend_issues(shape: &str, records: Vec<Value>) -> Vec<BackendIssue> {
    let total = records.len();
    let issues: Vec<BackendIssue> = records.iter().filter_map(BackendIssue::from_value).collect();

    if issues.len() < total {
        tracing::debug!(
            envelope = shape,
            dropped = total - issues.len(),
            "Skipping issue records without a string slug and title"
        );
    }

    issues
}

/// Envelope of the single issue endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueEnvelope {
    /// `{"data": ...}`, whatever `data` holds.
    Wrapped(Value),
    Bare(Value),
}

impl IssueEnvelope {
    pub fn classify(payload: Value) -> Self {
        match payload {
            Value::Object(mut body) => match body.remove("data") {
                Some(data) => Self::Wrapped(data),
                None => Self::Bare(Value::Object(body)),
            },
            other => Self::Bare(other),
        }
    }

    /// `None` when the unwrapped value is not a valid issue record.
    pub fn into_issue(self) -> Option<BackendIssue> {
        match self {
            Self::Wrapped(record) | Self::Bare(record) => BackendIssue::from_value(&record),
        }
    }
}
