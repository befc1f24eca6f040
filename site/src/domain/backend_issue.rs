use crate::domain::published_date::iso_timestamp;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub const DEFAULT_TOPIC: &str = "NEWS";

/// An issue record as the content API sends it.
///
/// Only `slug` and `title` are guaranteed. Any other field that is missing,
/// `null` or not a string is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendIssue {
    pub slug: String,
    pub title: String,
    pub preview_text: Option<String>,
    pub intro: Option<String>,
    pub whats_going_on: Option<String>,
    pub why_it_matters: Option<String>,
    pub read_more: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
}

impl BackendIssue {
    /// Returns `None` unless `value` is an object with string `slug` and `title`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_owned);

        Some(Self {
            slug: text("slug")?,
            title: text("title")?,
            preview_text: text("previewText"),
            intro: text("intro"),
            whats_going_on: text("whatsGoingOn"),
            why_it_matters: text("whyItMatters"),
            read_more: text("readMore"),
            category: text("category"),
            published_at: text("publishedAt"),
            created_at: text("createdAt"),
        })
    }

    /// `publishedAt`, then `createdAt`, then `now`.
    pub fn resolve_date(&self, now: DateTime<Utc>) -> String {
        self.published_at
            .clone()
            .or_else(|| self.created_at.clone())
            .unwrap_or_else(|| iso_timestamp(now))
    }

    pub fn topic(&self) -> String {
        match &self.category {
            Some(category) if !category.trim().is_empty() => category.clone(),
            _ => DEFAULT_TOPIC.to_string(),
        }
    }

    /// Every non-blank free-text field, joined with single spaces.
    pub fn full_text(&self) -> String {
        [
            &self.preview_text,
            &self.intro,
            &self.whats_going_on,
            &self.why_it_matters,
            &self.read_more,
            &self.category,
        ]
        .into_iter()
        .flatten()
        .filter(|text| !text.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn read_more_link(&self) -> Option<String> {
        self.read_more
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(str::to_owned)
    }
}
