use crate::domain::{estimate_minutes, BackendIssue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Summary of an issue as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCard {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub topic: String,
    pub date: String,
    pub minutes: u32,
    pub read_more: Option<String>,
}

impl IssueCard {
    pub fn from_backend(issue: &BackendIssue, now: DateTime<Utc>) -> Self {
        let summary = issue
            .preview_text
            .clone()
            .or_else(|| issue.intro.clone())
            .unwrap_or_else(|| "New issue.".to_string());

        let full_text = issue.full_text();
        let minutes = if full_text.is_empty() {
            estimate_minutes(&summary)
        } else {
            estimate_minutes(&full_text)
        };

        Self {
            slug: issue.slug.clone(),
            title: issue.title.clone(),
            topic: issue.topic(),
            date: issue.resolve_date(now),
            read_more: issue.read_more_link(),
            summary,
            minutes,
        }
    }

    /// Reads a record that is already card-shaped: string `slug`, `title`,
    /// `summary`, `topic` and `date`, plus a numeric `minutes`.
    pub fn from_card_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);
        let minutes = record.get("minutes")?.as_f64().filter(|m| m.is_finite())?;

        Some(Self {
            slug: text("slug")?,
            title: text("title")?,
            summary: text("summary")?,
            topic: text("topic")?,
            date: text("date")?,
            minutes: minutes.round().clamp(1.0, u32::MAX as f64) as u32,
            read_more: text("readMore"),
        })
    }
}
